use std::{str::FromStr, time::Duration};

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base url of the donation backend, without the `/donate` suffix
    pub api_url: String,
    /// Unset means no explicit request timeout
    pub request_timeout: Option<Duration>,
    /// Refuse a submission while another one for the same session is in flight
    pub single_flight: bool,
}

impl Config {
    pub const DEFAULT_API_URL: &str = "http://localhost:3000";

    pub fn from_env() -> Self {
        let api_url = std::env::var("DONATION_API_URL").unwrap_or_else(|_| {
            tracing::warn!(
                "DONATION_API_URL is not defined, using {}",
                Self::DEFAULT_API_URL
            );
            Self::DEFAULT_API_URL.to_string()
        });
        let request_timeout =
            parse_env::<u64>("DONATION_REQUEST_TIMEOUT_SECS").map(Duration::from_secs);
        let single_flight = parse_env("DONATION_SINGLE_FLIGHT").unwrap_or(true);

        Self {
            api_url,
            request_timeout,
            single_flight,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            request_timeout: None,
            single_flight: true,
        }
    }
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(%key, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert!(config.request_timeout.is_none());
        assert!(config.single_flight);
    }

    #[test]
    fn api_url_override() {
        let config = Config::default().with_api_url("http://10.0.0.2:8080");
        assert_eq!(config.api_url, "http://10.0.0.2:8080");
    }
}
