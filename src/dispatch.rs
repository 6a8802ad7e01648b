// Copyright © 2026 Hypermesh Foundation. All rights reserved.
// Licensed under the Business Source License 1.1.
// See the LICENSE file in the repository root for full license text.

//! Edge-case dispatch: an ordered decision list of (predicate, formula)
//! pairs.
//!
//! Priority order is the explicit [`DISPATCH_ORDER`] array, not a nest of
//! branches; the first matching path wins and later predicates are never
//! consulted. Reordering or narrowing a threshold changes which formula a
//! boundary input receives, so any recalibration must re-verify inputs near
//! every predicate edge.

use crate::capping::{ramp_intensity, tiered_amount};
use crate::params::EngineParams;
use crate::types::TripInput;
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// RulePath
// ---------------------------------------------------------------------------

/// Named edge-case paths. Variants carry no data; the constants live in
/// [`EngineParams`] so recalibration never touches control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RulePath {
    /// Trips of a single day, with their own receipt tiering and bonus.
    SingleDay,
    /// Multi-day trips whose receipts fall under the low-receipts floor.
    LowReceipts,
    /// Long-duration, long-distance trips.
    LongHaul,
    /// High miles-per-day "travel day" trips.
    TravelDay,
    /// Extended trips at low-to-moderate efficiency.
    ExtendedStay,
    /// Five-day trips.
    FiveDay,
}

/// Evaluation priority, highest first. First match commits.
pub const DISPATCH_ORDER: [RulePath; 6] = [
    RulePath::SingleDay,
    RulePath::LowReceipts,
    RulePath::LongHaul,
    RulePath::TravelDay,
    RulePath::ExtendedStay,
    RulePath::FiveDay,
];

impl RulePath {
    /// Stable name used in reports and per-path accounting.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleDay => "single-day",
            Self::LowReceipts => "low-receipts",
            Self::LongHaul => "long-haul",
            Self::TravelDay => "travel-day",
            Self::ExtendedStay => "extended-stay",
            Self::FiveDay => "five-day",
        }
    }

    /// Whether this path's predicate holds for the trip.
    pub fn matches(&self, trip: &TripInput, params: &EngineParams) -> bool {
        match self {
            Self::SingleDay => trip.days() <= params.single_day.day_ceiling,
            Self::LowReceipts => {
                trip.receipts.0 < params.low_receipt.threshold && trip.duration_days > 1
            }
            Self::LongHaul => {
                trip.duration_days >= params.long_haul.min_days
                    && trip.miles_traveled >= params.long_haul.min_miles
            }
            Self::TravelDay => trip.efficiency() > params.travel_day.threshold,
            Self::ExtendedStay => {
                let eff = trip.efficiency();
                trip.duration_days >= params.extended_stay.min_days
                    && eff >= params.extended_stay.efficiency_low
                    && eff <= params.extended_stay.efficiency_high
            }
            Self::FiveDay => {
                let days = trip.days();
                days >= params.five_day.day_low && days <= params.five_day.day_high
            }
        }
    }

    /// Raw (pre-finalizer) payout for a trip this path matched.
    pub fn evaluate(&self, trip: &TripInput, params: &EngineParams) -> Decimal {
        match self {
            Self::SingleDay => single_day(trip, params),
            Self::LowReceipts => low_receipts(trip, params),
            Self::LongHaul => long_haul(trip, params),
            Self::TravelDay => travel_day(trip, params),
            Self::ExtendedStay => extended_stay(trip, params),
            Self::FiveDay => five_day(trip, params),
        }
    }
}

/// Scan the decision list in priority order; `None` means the default
/// formula applies.
pub fn dispatch(trip: &TripInput, params: &EngineParams) -> Option<RulePath> {
    DISPATCH_ORDER
        .iter()
        .copied()
        .find(|path| path.matches(trip, params))
}

// ---------------------------------------------------------------------------
// Edge-case formulas
// ---------------------------------------------------------------------------

fn single_day(trip: &TripInput, params: &EngineParams) -> Decimal {
    let p = &params.single_day;
    let receipt_component = tiered_amount(trip.receipts.0, &p.receipt_tiers);
    let bonus = p.bonus_max * ramp_intensity(trip.efficiency(), p.bonus_threshold, p.bonus_ramp);
    p.base + receipt_component + bonus
}

fn low_receipts(trip: &TripInput, params: &EngineParams) -> Decimal {
    let p = &params.low_receipt;
    p.base + trip.days() * p.per_day + trip.receipts.0 * p.receipt_rate
}

fn long_haul(trip: &TripInput, params: &EngineParams) -> Decimal {
    let p = &params.long_haul;
    p.base
        + trip.days() * p.per_day
        + Decimal::from(trip.miles_traveled) * p.mile_rate
        + trip.receipts.0 * p.receipt_rate
}

fn travel_day(trip: &TripInput, params: &EngineParams) -> Decimal {
    let p = &params.travel_day;
    let intensity = ramp_intensity(trip.efficiency(), p.threshold, p.ramp);
    let receipts = trip.receipts.0;
    if receipts > p.receipt_split {
        receipts * (p.high_rate_base + p.high_rate_span * intensity)
    } else {
        let boosted = receipts * (p.low_rate_base + p.low_rate_span * intensity);
        let minimum = p.floor_base + p.floor_span * intensity;
        boosted.max(minimum)
    }
}

fn extended_stay(trip: &TripInput, params: &EngineParams) -> Decimal {
    let p = &params.extended_stay;
    let allowance = trip.days() * p.daily_allowance;
    let capped_per_day = tiered_amount(trip.receipts_per_day(), &params.receipt_tiers);
    allowance + capped_per_day * trip.days() * p.receipt_scale
}

fn five_day(trip: &TripInput, params: &EngineParams) -> Decimal {
    let p = &params.five_day;
    if trip.efficiency() < p.low_efficiency {
        trip.receipts.0 * p.low_receipt_rate
    } else {
        trip.receipts.0 * p.receipt_rate + Decimal::from(trip.miles_traveled) * p.mile_rate
    }
}

// ===========================================================================
// Tests
// ===========================================================================
