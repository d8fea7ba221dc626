//! Command implementations.
//!
//! Output goes to a caller-supplied writer so commands can be tested
//! against a buffer.

pub mod cart;
pub mod catalog;
