//! Subcommands of the `spar` binary

pub mod info;
pub mod play;
pub mod score;
