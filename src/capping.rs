// Copyright (c) 2026 Hypermesh Foundation. All rights reserved.
// Licensed under the Business Source License 1.1.
// See the LICENSE file in the repository root for full license text.

//! Shared capping and bounding helpers used across dispatch paths.
//!
//! Capping tiers an amount through ordered bands with decreasing marginal
//! rates; bounding clamps the efficiency penalty to a fraction of the
//! pre-penalty subtotal. Every boundary here is continuous: each band pays
//! only on the portion above the previous bound, and ramps scale linearly
//! from 0 to 1 instead of switching.

use crate::params::{PenaltyBound, ReceiptTiers};
use rust_decimal::Decimal;

/// Tiered contribution of `amount` under band-sum capping.
///
/// Each band pays its marginal rate on the slice of `amount` that falls
/// inside it. Concave and continuous in `amount`; the tier bounds share the
/// unit of `amount` (per-day callers pass a per-day figure and scale back
/// up by duration themselves).
pub fn tiered_amount(amount: Decimal, tiers: &ReceiptTiers) -> Decimal {
    let mut total = Decimal::ZERO;
    let mut lower = Decimal::ZERO;
    for (bound, rate) in tiers.bounds.iter().zip(tiers.rates.iter()) {
        let width = *bound - lower;
        let portion = (amount - lower).max(Decimal::ZERO).min(width);
        total += portion * *rate;
        lower = *bound;
    }
    // Open top band
    let excess = (amount - lower).max(Decimal::ZERO);
    total + excess * tiers.rates[tiers.rates.len() - 1]
}

/// Linear 0..=1 intensity ramp starting at `threshold` over `width`.
///
/// Returns 0 at or below the threshold and saturates at 1, so formulas
/// approach their boundaries gradually rather than stepping.
pub fn ramp_intensity(value: Decimal, threshold: Decimal, width: Decimal) -> Decimal {
    if width <= Decimal::ZERO {
        // Degenerate ramp collapses to a step at the threshold
        return if value > threshold { Decimal::ONE } else { Decimal::ZERO };
    }
    ((value - threshold) / width)
        .max(Decimal::ZERO)
        .min(Decimal::ONE)
}

/// Bounded efficiency penalty magnitude (always >= 0).
///
/// Linear in the excess over the threshold, clamped to `max_fraction` of
/// `subtotal` so the penalty can never flip the result negative.
pub fn bounded_penalty(efficiency: Decimal, subtotal: Decimal, bound: &PenaltyBound) -> Decimal {
    if efficiency <= bound.threshold {
        return Decimal::ZERO;
    }
    let raw = (efficiency - bound.threshold) * bound.rate;
    let cap = subtotal * bound.max_fraction;
    raw.min(cap)
}

// ===========================================================================
// Tests
// ===========================================================================
