// Copyright © 2026 Hypermesh Foundation. All rights reserved.
// Licensed under the Business Source License 1.1.
// See the LICENSE file in the repository root for full license text.

//! Core value types for the reimbursement engine.
//!
//! `TripInput` is the validated, immutable input triple; `Usd` is the
//! currency denomination backing every monetary quantity. Both are plain
//! values with no lifecycle beyond a single engine call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Rejections raised when constructing a [`TripInput`].
///
/// The engine itself is infallible; out-of-contract input is stopped here,
/// before a trip ever reaches it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TripInputError {
    #[error("trip duration must be at least one day")]
    ZeroDuration,
    #[error("receipts amount cannot be negative")]
    NegativeReceipts,
}

// ---------------------------------------------------------------------------
// Usd
// ---------------------------------------------------------------------------

/// US-dollar denomination backed by `rust_decimal::Decimal`.
///
/// `Decimal` has no NaN or infinity, so any `Usd` is finite by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Usd(pub Decimal);

impl Usd {
    /// Zero value
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from a `Decimal` value
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }

    /// Whether the value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Usd {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Usd {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TripInput
// ---------------------------------------------------------------------------

/// One reimbursement request: duration, distance, and submitted receipts.
///
/// Constructed per call and never mutated. Derived quantities (efficiency,
/// receipts per day) are computed on demand, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripInput {
    /// Whole trip days, at least 1.
    pub duration_days: u32,
    /// Total miles traveled over the whole trip.
    pub miles_traveled: u32,
    /// Sum of submitted receipt amounts.
    pub receipts: Usd,
}

impl TripInput {
    /// Build a validated trip. Duration must be >= 1 and receipts >= 0.
    pub fn new(
        duration_days: u32,
        miles_traveled: u32,
        receipts: Decimal,
    ) -> Result<Self, TripInputError> {
        if duration_days == 0 {
            return Err(TripInputError::ZeroDuration);
        }
        if receipts.is_sign_negative() {
            return Err(TripInputError::NegativeReceipts);
        }
        Ok(Self {
            duration_days,
            miles_traveled,
            receipts: Usd(receipts),
        })
    }

    /// Trip duration as a `Decimal`, for exact arithmetic.
    pub fn days(&self) -> Decimal {
        Decimal::from(self.duration_days)
    }

    /// Miles per day. Duration >= 1 is guaranteed, so this never divides by zero.
    pub fn efficiency(&self) -> Decimal {
        Decimal::from(self.miles_traveled) / self.days()
    }

    /// Receipts per day.
    pub fn receipts_per_day(&self) -> Decimal {
        self.receipts.0 / self.days()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_zero_duration() {
        let err = TripInput::new(0, 100, dec!(50));
        assert_eq!(err, Err(TripInputError::ZeroDuration));
    }

    #[test]
    fn rejects_negative_receipts() {
        let err = TripInput::new(3, 100, dec!(-0.01));
        assert_eq!(err, Err(TripInputError::NegativeReceipts));
    }

    #[test]
    fn accepts_zero_miles_and_zero_receipts() {
        let trip = TripInput::new(1, 0, Decimal::ZERO).expect("test: minimal trip");
        assert_eq!(trip.efficiency(), Decimal::ZERO);
        assert_eq!(trip.receipts_per_day(), Decimal::ZERO);
    }

    #[test]
    fn single_day_efficiency_has_no_division_hazard() {
        let trip = TripInput::new(1, 47, dec!(17.97)).expect("test: fixture trip");
        assert_eq!(trip.efficiency(), dec!(47));
        assert_eq!(trip.receipts_per_day(), dec!(17.97));
    }

    #[test]
    fn derived_quantities_divide_exactly() {
        let trip = TripInput::new(4, 250, dec!(100)).expect("test: multi-day trip");
        assert_eq!(trip.efficiency(), dec!(62.5));
        assert_eq!(trip.receipts_per_day(), dec!(25));
    }

    #[test]
    fn usd_arithmetic_and_display() {
        let a = Usd(dec!(10.50));
        let b = Usd(dec!(0.25));
        assert_eq!(a + b, Usd(dec!(10.75)));
        assert_eq!(a - b, Usd(dec!(10.25)));
        assert_eq!(format!("{}", a), "$10.50");
        assert!(Usd::zero().is_zero());
    }
}
