//! The on-chain contract of the GIF board program: its schema description, account layout, and
//! instruction builders.
//!
//! Nothing here talks to the network. The program itself is an opaque Anchor program; this crate
//! only knows enough of its shape to build instructions for it and decode its account.

pub mod discriminator;
pub mod error;
pub mod idl;
pub mod instructions;
pub mod state;

pub use idl::BoardSchema;
