//! Renders a [`Session`] as the board's terminal page.

use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::Colorize;

use crate::{
    logs::LogColor,
    session::{
        BoardState,
        Session,
    },
};

pub const HEADER: &str = "Web3 Public GIF Board";
pub const SUB_TEXT: &str = "Upload a gif for everyone on Web3 to see :)";

pub struct PrettySession<'a> {
    /// The amount of spaces preceding each line in the output.
    pub indent_size: usize,
    pub session: &'a Session,
}

impl<'a> PrettySession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            indent_size: 2,
            session,
        }
    }
}

impl Display for PrettySession<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(self.indent_size);
        writeln!(f, "{}", HEADER.color(LogColor::Header).bold())?;
        writeln!(f, "{}", SUB_TEXT.color(LogColor::Gray))?;

        let Some(board) = self.session.board() else {
            return writeln!(f, "{indent}{} Connect to Wallet", action("connect"));
        };

        if let Some(address) = self.session.wallet_address() {
            let label = "wallet".color(LogColor::Gray);
            writeln!(f, "{indent}{label}: {address}")?;
        }

        match board {
            BoardState::Unfetched => writeln!(f, "{indent}Fetching GIF list..."),
            BoardState::Uninitialized => writeln!(
                f,
                "{indent}{} Do One-Time Initialization For GIF Program Account",
                action("init")
            ),
            BoardState::Ready(entries) => {
                let input = match self.session.input_buffer() {
                    "" => "Enter gif link!".color(LogColor::FadedGray),
                    text => text.normal(),
                };
                writeln!(f, "{indent}> {input}")?;
                writeln!(f, "{indent}{} Submit", action("submit"))?;

                if entries.is_empty() {
                    return writeln!(f, "{indent}No GIFs yet");
                }

                let width = entries.len().to_string().len();
                for (i, entry) in entries.iter().enumerate() {
                    let submitter = format!("by {}", entry.submitter).color(LogColor::FadedGray);
                    writeln!(f, "{indent}{:>width$}. {} {submitter}", i + 1, entry.link)?;
                }
                Ok(())
            }
        }
    }
}

fn action(name: &str) -> colored::ColoredString {
    format!("[{name}]").color(LogColor::Highlight)
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey::Pubkey;

    use super::*;
    use crate::session::{
        Connection,
        Entry,
    };

    fn render(session: &Session) -> String {
        colored::control::set_override(false);
        PrettySession::new(session).to_string()
    }

    fn connected(board: BoardState) -> Session {
        Session {
            connection: Connection::Connected {
                wallet_address: Pubkey::new_unique(),
                board,
            },
            input_buffer: String::new(),
        }
    }

    #[test]
    fn disconnected_offers_connect() {
        let out = render(&Session::default());
        assert!(out.starts_with(HEADER));
        assert!(out.contains("[connect] Connect to Wallet"));
        assert!(!out.contains("[submit]"));
    }

    #[test]
    fn uninitialized_offers_initialization() {
        let out = render(&connected(BoardState::Uninitialized));
        assert!(out.contains("[init] Do One-Time Initialization For GIF Program Account"));
        assert!(!out.contains("[submit]"));
    }

    #[test]
    fn empty_board_shows_form_and_empty_grid() {
        let out = render(&connected(BoardState::Ready(vec![])));
        assert!(out.contains("> Enter gif link!"));
        assert!(out.contains("[submit] Submit"));
        assert!(out.contains("No GIFs yet"));
    }

    #[test]
    fn ready_board_lists_entries_in_order() {
        let submitter = Pubkey::new_unique();
        let mut session = connected(BoardState::Ready(vec![
            Entry {
                link: "http://x/1.gif".into(),
                submitter,
            },
            Entry {
                link: "http://x/2.gif".into(),
                submitter,
            },
        ]));
        session.input_buffer = "http://x/3.gif".into();

        let out = render(&session);
        assert!(out.contains("> http://x/3.gif"));
        let first = out.find("1. http://x/1.gif").unwrap();
        let second = out.find("2. http://x/2.gif").unwrap();
        assert!(first < second);
        assert!(out.contains(&format!("by {submitter}")));
    }
}
