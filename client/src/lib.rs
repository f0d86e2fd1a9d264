//! Client for the GIF board: the session controller that drives connecting a wallet,
//! initializing the board account, and submitting links, plus the wallet and ledger adapters it
//! runs against.

pub mod config;
pub mod error;
pub mod keypair;
pub mod ledger;
pub mod logs;
pub mod notifier;
pub mod render;
pub mod session;
pub mod test_helpers;
pub mod wallet;

pub use logs::LogColor;
