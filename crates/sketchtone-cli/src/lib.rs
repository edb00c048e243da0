//! Sketchtone CLI library.
//!
//! Input loading and the command implementations behind the `sketchtone`
//! binary. Exposed as a library so commands can be driven from tests.

pub mod commands;
pub mod input;
