// Copyright © 2026 Hypermesh Foundation. All rights reserved.
// Licensed under the Business Source License 1.1.
// See the LICENSE file in the repository root for full license text.

//! The reimbursement calculation engine.
//!
//! Strictly linear control flow for every call: dispatch through the
//! ordered edge-case list, fall back to the default formula, then finalize
//! (floor-clamp and round to currency precision). Pure function of the
//! input and the immutable parameter snapshot: no I/O, no randomness, no
//! clock, no state between calls.

use crate::capping::{bounded_penalty, tiered_amount};
use crate::dispatch::{dispatch, RulePath};
use crate::params::EngineParams;
use crate::types::{TripInput, Usd};
use rust_decimal::{Decimal, RoundingStrategy};

// ---------------------------------------------------------------------------
// ReimbursementEngine
// ---------------------------------------------------------------------------

/// Stateless calculator around one immutable parameter snapshot.
///
/// Recalibration builds a new snapshot and a new engine; parameters are
/// never mutated in place, so concurrent callers can share `&self` freely.
#[derive(Debug, Clone)]
pub struct ReimbursementEngine {
    params: EngineParams,
}

impl ReimbursementEngine {
    /// Engine over a specific parameter snapshot.
    pub fn new(params: EngineParams) -> Self {
        Self { params }
    }

    /// Engine over the current best calibration.
    pub fn with_defaults() -> Self {
        Self::new(EngineParams::default())
    }

    /// The snapshot this engine computes with.
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Which edge-case path would handle the trip; `None` means the
    /// default formula. Exposed for per-path accounting in the harness.
    pub fn route(&self, trip: &TripInput) -> Option<RulePath> {
        dispatch(trip, &self.params)
    }

    /// Compute the reimbursement for one trip.
    pub fn calculate(&self, trip: &TripInput) -> Usd {
        let raw = match dispatch(trip, &self.params) {
            Some(path) => path.evaluate(trip, &self.params),
            None => default_formula(trip, &self.params),
        };
        finalize(raw, &self.params)
    }
}

impl Default for ReimbursementEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ---------------------------------------------------------------------------
// Default formula
// ---------------------------------------------------------------------------

/// Fallback payout: decaying daily base, plus the shared tiered receipt
/// component, minus the bounded efficiency penalty.
fn default_formula(trip: &TripInput, params: &EngineParams) -> Decimal {
    let p = &params.default_formula;

    let decayed = p.base_first_day - (trip.days() - Decimal::ONE) * p.base_decay_per_day;
    let base = decayed.max(p.base_floor);

    let capped_per_day = tiered_amount(trip.receipts_per_day(), &params.receipt_tiers);
    let receipt_component = capped_per_day * trip.days();

    let subtotal = base + receipt_component;
    let penalty = bounded_penalty(trip.efficiency(), subtotal, &params.penalty);

    subtotal - penalty
}

// ---------------------------------------------------------------------------
// Finalizer
// ---------------------------------------------------------------------------

/// Clamp to the configured floor, round half away from zero to cents, and
/// fix the scale at exactly two fractional digits.
///
/// The floor runs unconditionally, independent of every upstream formula;
/// upstream bounding already keeps results positive, this is the last
/// resort that makes a negative output structurally unreachable.
fn finalize(raw: Decimal, params: &EngineParams) -> Usd {
    let floored = raw.max(params.finalizer.floor);
    let mut rounded = floored.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    Usd(rounded)
}

// ===========================================================================
// Tests
// ===========================================================================
