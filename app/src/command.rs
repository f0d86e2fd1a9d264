//! Parses the lines typed at the board's prompt.

use std::str::FromStr;

use anyhow::anyhow;
use strum::IntoEnumIterator;
use strum_macros::{
    Display,
    EnumIter,
    EnumString,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Connect,
    Init,
    Input,
    Submit,
    Refresh,
    Show,
    Help,
    Quit,
}

impl Verb {
    fn usage(&self) -> &'static str {
        match self {
            Self::Connect => "connect             Connect to the wallet",
            Self::Init => "init                Do one-time initialization of the board account",
            Self::Input => "input <link>        Set the gif link to submit",
            Self::Submit => "submit [link]       Submit the gif link (optionally setting it first)",
            Self::Refresh => "refresh             Re-fetch the board",
            Self::Show => "show                Print the board",
            Self::Help => "help                Show this help",
            Self::Quit => "quit                Exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Connect,
    Init,
    Input(String),
    Submit(Option<String>),
    Refresh,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let verb = Verb::from_str(&verb.to_lowercase())
            .map_err(|_| anyhow!("Unknown command `{verb}`, try `help`"))?;

        let no_args = |command: Command| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(anyhow!("`{verb}` takes no arguments"))
            }
        };

        match verb {
            Verb::Connect => no_args(Command::Connect),
            Verb::Init => no_args(Command::Init),
            Verb::Input => Ok(Command::Input(rest.to_string())),
            Verb::Submit => Ok(Command::Submit(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            Verb::Refresh => no_args(Command::Refresh),
            Verb::Show => no_args(Command::Show),
            Verb::Help => no_args(Command::Help),
            Verb::Quit => no_args(Command::Quit),
        }
    }
}

pub fn help() -> String {
    Verb::iter()
        .map(|verb| format!("  {}", verb.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}
