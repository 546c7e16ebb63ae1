//! blitfont CLI library.
//!
//! This crate provides the core functionality for the blitfont CLI:
//! manifest loading, generated source emission, and the command
//! implementations behind the `blitfont` binary.

pub mod commands;
pub mod emit;
pub mod input;
