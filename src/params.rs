// Copyright © 2026 Hypermesh Foundation. All rights reserved.
// Licensed under the Business Source License 1.1.
// See the LICENSE file in the repository root for full license text.

//! Engine configuration: every rate, threshold, and floor as a named value.
//!
//! The defaults are the current best calibration against the labeled legacy
//! dataset. Recalibration produces a whole new `EngineParams` snapshot
//! (plain JSON via serde) and a new engine around it; fields are never
//! mutated in place.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EngineParams
// ---------------------------------------------------------------------------

/// Complete tuned-constant table consumed by the engine.
///
/// One sub-structure per dispatch path plus the shared capping/bounding
/// and finalizer sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineParams {
    #[serde(default)]
    pub single_day: SingleDayParams,
    #[serde(default)]
    pub low_receipt: LowReceiptParams,
    #[serde(default)]
    pub long_haul: LongHaulParams,
    #[serde(default)]
    pub travel_day: TravelDayParams,
    #[serde(default)]
    pub extended_stay: ExtendedStayParams,
    #[serde(default)]
    pub five_day: FiveDayParams,
    #[serde(default)]
    pub default_formula: DefaultFormulaParams,
    #[serde(default)]
    pub receipt_tiers: ReceiptTiers,
    #[serde(default)]
    pub penalty: PenaltyBound,
    #[serde(default)]
    pub finalizer: FinalizerParams,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            single_day: SingleDayParams::default(),
            low_receipt: LowReceiptParams::default(),
            long_haul: LongHaulParams::default(),
            travel_day: TravelDayParams::default(),
            extended_stay: ExtendedStayParams::default(),
            five_day: FiveDayParams::default(),
            default_formula: DefaultFormulaParams::default(),
            receipt_tiers: ReceiptTiers::default(),
            penalty: PenaltyBound::default(),
            finalizer: FinalizerParams::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// ReceiptTiers
// ---------------------------------------------------------------------------

/// Ordered per-day tier bounds with decreasing marginal rates.
///
/// The contribution of an amount is the sum over band portions, each band
/// paying its own marginal rate: piecewise-linear, concave, and continuous
/// at every bound. Rates shrink as the bands rise, encoding the legacy
/// system's distrust of large claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptTiers {
    /// Upper bound of each band below the open top band, ascending.
    pub bounds: [Decimal; 3],
    /// Marginal rate per band; one more entry than `bounds` for the top band.
    pub rates: [Decimal; 4],
}

impl Default for ReceiptTiers {
    fn default() -> Self {
        Self {
            bounds: [dec!(100), dec!(200), dec!(400)],
            rates: [dec!(0.95), dec!(0.70), dec!(0.40), dec!(0.15)],
        }
    }
}

// ---------------------------------------------------------------------------
// PenaltyBound
// ---------------------------------------------------------------------------

/// Efficiency penalty shape for the default formula.
///
/// The raw penalty grows linearly above `threshold` and is clamped to
/// `max_fraction` of the pre-penalty subtotal. The clamp is what keeps the
/// result from ever going negative; an earlier unbounded formulation
/// produced negative outputs for ~3% of inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyBound {
    /// Miles-per-day level above which the penalty applies.
    pub threshold: Decimal,
    /// Dollars of penalty per mile-per-day of excess.
    pub rate: Decimal,
    /// Largest allowed penalty as a fraction of the pre-penalty subtotal.
    pub max_fraction: Decimal,
}

impl Default for PenaltyBound {
    fn default() -> Self {
        Self {
            threshold: dec!(50),
            rate: dec!(1.5),
            max_fraction: dec!(0.3),
        }
    }
}

// ---------------------------------------------------------------------------
// SingleDayParams
// ---------------------------------------------------------------------------

/// Single-day trips: own base, own receipt tiering, ramped mileage bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleDayParams {
    /// Duration at or below which this path applies.
    pub day_ceiling: Decimal,
    /// Flat base payout.
    pub base: Decimal,
    /// Receipt tiering over the absolute receipt amount.
    pub receipt_tiers: ReceiptTiers,
    /// Miles-per-day where the travel bonus starts.
    pub bonus_threshold: Decimal,
    /// Width of the linear bonus ramp, in miles per day.
    pub bonus_ramp: Decimal,
    /// Bonus paid at full ramp intensity.
    pub bonus_max: Decimal,
}

impl Default for SingleDayParams {
    fn default() -> Self {
        Self {
            day_ceiling: dec!(1.5),
            base: dec!(80),
            receipt_tiers: ReceiptTiers {
                bounds: [dec!(200), dec!(500), dec!(1000)],
                rates: [dec!(1.0), dec!(0.7), dec!(0.4), dec!(0.1)],
            },
            bonus_threshold: dec!(300),
            bonus_ramp: dec!(300),
            bonus_max: dec!(40),
        }
    }
}

// ---------------------------------------------------------------------------
// LowReceiptParams
// ---------------------------------------------------------------------------

/// Multi-day trips with genuinely low receipts: guaranteed minimum payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowReceiptParams {
    /// Receipt total below which the floor formula applies.
    pub threshold: Decimal,
    /// Flat base of the floor payout.
    pub base: Decimal,
    /// Additional payout per trip day.
    pub per_day: Decimal,
    /// Rate applied to the (small) receipt total.
    pub receipt_rate: Decimal,
}

impl Default for LowReceiptParams {
    fn default() -> Self {
        Self {
            threshold: dec!(40),
            base: dec!(100),
            per_day: dec!(20),
            receipt_rate: dec!(0.4),
        }
    }
}

// ---------------------------------------------------------------------------
// LongHaulParams
// ---------------------------------------------------------------------------

/// Long-duration, long-distance business trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongHaulParams {
    /// Minimum trip days for this path.
    pub min_days: u32,
    /// Minimum total miles for this path.
    pub min_miles: u32,
    /// Flat base payout.
    pub base: Decimal,
    /// Additional payout per trip day.
    pub per_day: Decimal,
    /// Payout per mile traveled.
    pub mile_rate: Decimal,
    /// Near-linear rate on the receipt total.
    pub receipt_rate: Decimal,
}

impl Default for LongHaulParams {
    fn default() -> Self {
        Self {
            min_days: 5,
            min_miles: 800,
            base: dec!(150),
            per_day: dec!(35),
            mile_rate: dec!(0.45),
            receipt_rate: dec!(0.4),
        }
    }
}

// ---------------------------------------------------------------------------
// TravelDayParams
// ---------------------------------------------------------------------------

/// High-efficiency "travel day" trips, receipt-conditioned.
///
/// The intensity factor ramps from 0 at `threshold` to 1 over `ramp` miles
/// per day, so the path's own rates phase in gradually instead of switching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelDayParams {
    /// Miles-per-day level above which this path applies.
    pub threshold: Decimal,
    /// Width of the intensity ramp, in miles per day.
    pub ramp: Decimal,
    /// Receipt total separating the high- and low-receipt branches.
    pub receipt_split: Decimal,
    /// High-receipt branch rate at zero intensity.
    pub high_rate_base: Decimal,
    /// Additional high-receipt rate at full intensity.
    pub high_rate_span: Decimal,
    /// Low-receipt branch rate at zero intensity.
    pub low_rate_base: Decimal,
    /// Additional low-receipt rate at full intensity.
    pub low_rate_span: Decimal,
    /// Low-receipt minimum payout at zero intensity.
    pub floor_base: Decimal,
    /// Additional minimum payout at full intensity.
    pub floor_span: Decimal,
}

impl Default for TravelDayParams {
    fn default() -> Self {
        Self {
            threshold: dec!(250),
            ramp: dec!(100),
            receipt_split: dec!(800),
            high_rate_base: dec!(0.7),
            high_rate_span: dec!(0.1),
            low_rate_base: dec!(1.1),
            low_rate_span: dec!(0.2),
            floor_base: dec!(250),
            floor_span: dec!(100),
        }
    }
}

// ---------------------------------------------------------------------------
// ExtendedStayParams
// ---------------------------------------------------------------------------

/// Extended trips at low-to-moderate efficiency.
///
/// Covers long trips whose receipts are small relative to trip length, a
/// band where the default formula systematically underestimated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedStayParams {
    /// Minimum trip days for this path.
    pub min_days: u32,
    /// Inclusive lower efficiency bound, miles per day.
    pub efficiency_low: Decimal,
    /// Inclusive upper efficiency bound, miles per day.
    pub efficiency_high: Decimal,
    /// Per-day allowance independent of receipts.
    pub daily_allowance: Decimal,
    /// Scale applied to the shared tiered receipt component.
    pub receipt_scale: Decimal,
}

impl Default for ExtendedStayParams {
    fn default() -> Self {
        Self {
            min_days: 8,
            efficiency_low: dec!(30),
            efficiency_high: dec!(200),
            daily_allowance: dec!(40),
            receipt_scale: dec!(0.85),
        }
    }
}

// ---------------------------------------------------------------------------
// FiveDayParams
// ---------------------------------------------------------------------------

/// Five-day trips, a band the legacy data treats as its own regime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveDayParams {
    /// Inclusive lower duration bound, in days.
    pub day_low: Decimal,
    /// Inclusive upper duration bound, in days.
    pub day_high: Decimal,
    /// Miles-per-day level separating the two sub-formulas.
    pub low_efficiency: Decimal,
    /// Receipt rate below the efficiency split.
    pub low_receipt_rate: Decimal,
    /// Receipt rate at or above the efficiency split.
    pub receipt_rate: Decimal,
    /// Mileage rate at or above the efficiency split.
    pub mile_rate: Decimal,
}

impl Default for FiveDayParams {
    fn default() -> Self {
        Self {
            day_low: dec!(4.5),
            day_high: dec!(5.5),
            low_efficiency: dec!(60),
            low_receipt_rate: dec!(0.8),
            receipt_rate: dec!(1.0),
            mile_rate: dec!(0.3),
        }
    }
}

// ---------------------------------------------------------------------------
// DefaultFormulaParams
// ---------------------------------------------------------------------------

/// Fallback formula for trips matching no edge case.
///
/// The daily base shrinks as trips lengthen, never below `base_floor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultFormulaParams {
    /// Base payout for a first trip day.
    pub base_first_day: Decimal,
    /// Base reduction per additional trip day.
    pub base_decay_per_day: Decimal,
    /// Smallest base regardless of duration.
    pub base_floor: Decimal,
}

impl Default for DefaultFormulaParams {
    fn default() -> Self {
        Self {
            base_first_day: dec!(80),
            base_decay_per_day: dec!(8),
            base_floor: dec!(40),
        }
    }
}

// ---------------------------------------------------------------------------
// FinalizerParams
// ---------------------------------------------------------------------------

/// Last-resort floor and currency precision applied to every result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizerParams {
    /// Unconditional minimum payout.
    pub floor: Decimal,
}

impl Default for FinalizerParams {
    fn default() -> Self {
        Self { floor: dec!(20.00) }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
