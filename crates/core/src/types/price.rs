//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are plain non-negative amounts in the shop's single currency, capped
//! at [`Price::MAX`] so cart totals stay far inside `Decimal`'s range.
//! Formatting and tax are the presentation layer's business.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The amount exceeds [`Price::MAX`].
    #[error("price cannot exceed {max} (got {got})")]
    TooLarge {
        /// Largest accepted amount.
        max: Decimal,
        /// Rejected amount.
        got: Decimal,
    },
}

/// A non-negative price.
///
/// Serialized through `Decimal`: written as a decimal string, read back from
/// either a string or a JSON number.
///
/// ```
/// use guitarla_core::Price;
///
/// let price = Price::from_units(299);
/// assert_eq!(price.to_string(), "299");
/// assert!(Price::try_from(rust_decimal::Decimal::NEGATIVE_ONE).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest accepted price: one trillion units.
    pub const MAX: Self = Self(Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0));

    /// Create a price from an amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero, or
    /// [`PriceError::TooLarge`] if it is above [`Price::MAX`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Self::MAX.0 {
            return Err(PriceError::TooLarge {
                max: Self::MAX.0,
                got: amount,
            });
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of currency units.
    ///
    /// Any `u32` is below [`Price::MAX`].
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a price from an amount in hundredths (e.g. cents).
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

/// Saturates at `Decimal::MAX` instead of panicking.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Line total: unit price times quantity. Saturates like `Add`.
impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
