use std::sync::Arc;

use anyhow::Context;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinSet,
};

use crate::{
    form::{PaymentGateway, PredefinedAmount},
    session::{DonationSession, outcome::Submission},
};

pub const HELP: &str = "\
commands:
  amount <digits>        set the amount (TSH)
  preset <500|1000|2000|5000>
  name <full name>
  email <email>
  phone <digits>
  gateway <name>         choose a gateway and pay (M-Pesa, Tigo Pesa, Airtel Money, Visa)
  choose <name>          choose a gateway without paying
  pay                    make payment with the chosen gateway
  show                   print the form
  quit";

/// One line of host input. Field arguments are kept exactly as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Amount(&'a str),
    Preset(&'a str),
    Name(&'a str),
    Email(&'a str),
    Phone(&'a str),
    Gateway(&'a str),
    Choose(&'a str),
    Pay,
    Show,
    Quit,
    Empty,
    Unknown,
}

impl<'a> Command<'a> {
    /// Splits off the command word at the first space; the rest is the argument.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_start();
        let (word, arg) = line.split_once(' ').unwrap_or((line, ""));
        match word.trim_end() {
            "" => Self::Empty,
            "amount" => Self::Amount(arg),
            "preset" => Self::Preset(arg),
            "name" => Self::Name(arg),
            "email" => Self::Email(arg),
            "phone" => Self::Phone(arg),
            "gateway" => Self::Gateway(arg),
            "choose" => Self::Choose(arg),
            "pay" => Self::Pay,
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

/// Drives `session` from `input` until EOF, `quit` or ctrl-c.
///
/// Payment triggers run concurrently with further input. Every payment that
/// was started is awaited before returning, so each one gets its notification.
pub async fn run<R>(session: Arc<DonationSession>, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut payments = JoinSet::new();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read input")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else { break };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Amount(text) => {
                session.set_amount(text);
            }
            Command::Name(text) => {
                session.set_full_name(text);
            }
            Command::Phone(text) => {
                session.set_phone_number(text);
            }
            Command::Email(text) => session.set_email(text),
            Command::Preset(value) => {
                match value.trim().parse::<u32>().ok().map(PredefinedAmount::try_from) {
                    Some(Ok(amount)) => session.select_predefined_amount(amount),
                    _ => println!("preset must be one of 500, 1000, 2000, 5000"),
                }
            }
            Command::Choose(name) => match name.parse::<PaymentGateway>() {
                Ok(gateway) => session.choose_gateway(gateway),
                Err(e) => println!("{e}"),
            },
            Command::Gateway(name) => match name.parse::<PaymentGateway>() {
                Ok(gateway) => {
                    let session = session.clone();
                    payments.spawn(async move { session.select_gateway(gateway).await });
                }
                Err(e) => println!("{e}"),
            },
            Command::Pay => {
                let session = session.clone();
                payments.spawn(async move { session.submit_payment().await });
            }
            Command::Show => println!("{:#?}", session.form()),
            Command::Quit => break,
            Command::Unknown => println!("{HELP}"),
        }

        while let Some(finished) = payments.try_join_next() {
            log_payment(finished);
        }
    }

    if !payments.is_empty() {
        tracing::info!(pending = payments.len(), "Waiting for in-flight payments");
    }
    while let Some(finished) = payments.join_next().await {
        log_payment(finished);
    }
    Ok(())
}

fn log_payment(finished: Result<Submission, tokio::task::JoinError>) {
    match finished {
        Ok(submission) => tracing::debug!(?submission, "Payment trigger finished"),
        Err(e) => tracing::error!("Payment task failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_passed_through_untrimmed() {
        assert_eq!(Command::parse("amount  15"), Command::Amount(" 15"));
        assert_eq!(Command::parse("name Jane Doe "), Command::Name("Jane Doe "));
        assert_eq!(Command::parse("email "), Command::Email(""));
        assert_eq!(Command::parse("  phone 0712"), Command::Phone("0712"));
    }

    #[test]
    fn bare_words_and_blank_lines() {
        assert_eq!(Command::parse("pay"), Command::Pay);
        assert_eq!(Command::parse("pay   "), Command::Pay);
        assert_eq!(Command::parse("amount"), Command::Amount(""));
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("donate now"), Command::Unknown);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }
}
