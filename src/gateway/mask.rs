use serde::Serialize;

pub struct MaskedPhone;
pub struct MaskedEmail;

pub trait MaskPolicy {
    fn mask(value: &str) -> String;
}

impl MaskPolicy for MaskedPhone {
    fn mask(value: &str) -> String {
        let len = value.chars().count();
        if len > 4 {
            let tail: String = value.chars().skip(len - 4).collect();
            "*".repeat(len - 4) + &tail
        } else {
            value.to_string()
        }
    }
}

impl MaskPolicy for MaskedEmail {
    fn mask(value: &str) -> String {
        match value.split_once('@') {
            Some((local, domain)) => {
                let mut chars = local.chars();
                match chars.next() {
                    Some(first) => format!("{first}{}@{domain}", "*".repeat(chars.count())),
                    None => format!("@{domain}"),
                }
            }
            None => "*".repeat(value.chars().count()),
        }
    }
}

/// Return true if a key name likely holds a phone number.
fn is_phone_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("phone") || k.contains("msisdn") || k == "mobile"
}

fn is_email_key(key: &str) -> bool {
    key.to_lowercase().contains("email")
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    let value = serde_json::to_value(v).expect("serialization is infallible");
    secure_value(&value)
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(s) if is_phone_key(k) => Value::String(MaskedPhone::mask(s)),
                    Value::Number(n) if is_phone_key(k) => {
                        Value::String(MaskedPhone::mask(&n.to_string()))
                    }
                    Value::String(s) if is_email_key(k) => Value::String(MaskedEmail::mask(s)),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}
