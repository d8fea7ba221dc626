//! Core types for GuitarLA.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod guitar;
pub mod id;
pub mod price;

pub use guitar::Guitar;
pub use id::GuitarId;
pub use price::{Price, PriceError};
