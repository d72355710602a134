//! Subcommands of the `grove` binary

pub mod play;
pub mod replay;
