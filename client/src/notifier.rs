use colored::Colorize;

use crate::logs::LogColor;

/// Surfaces a message the user has to see, as opposed to one that's only logged.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Prints alerts as a highlighted banner on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        let banner = format!("!! {message} !!");
        println!("\n{}\n", banner.color(LogColor::Warning).bold());
    }
}
