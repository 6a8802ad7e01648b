// Accuracy tracker — exact/close matches, error moments, aggregate score
//
// Calibration mismatch is scored, never raised: a disagreement with an
// expected value feeds the score and the worst-case listing, nothing else.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Score weights: MAE dominates, every missed exact match adds a sliver,
// and any negative output is ruinous so that bug class can never hide.
const SCORE_MAE_WEIGHT: f64 = 100.0;
const SCORE_MISS_WEIGHT: f64 = 0.1;
const SCORE_NEGATIVE_PENALTY: f64 = 1000.0;

/// Accumulates per-case errors across an evaluation run.
pub struct EvalTracker {
    /// Absolute difference at or below this counts as an exact match.
    pub exact_tolerance: Decimal,
    /// Absolute difference at or below this counts as a close match.
    pub close_tolerance: Decimal,
    pub total: usize,
    pub exact_matches: usize,
    pub close_matches: usize,
    pub negative_outputs: usize,
    pub max_abs_error: Decimal,
    pub worst_index: Option<usize>,
    sum_abs_error: Decimal,
    sum_pct_error: f64,
    pct_samples: usize,
}

impl EvalTracker {
    pub fn new() -> Self {
        Self {
            exact_tolerance: dec!(0.01),
            close_tolerance: dec!(1.00),
            total: 0,
            exact_matches: 0,
            close_matches: 0,
            negative_outputs: 0,
            max_abs_error: Decimal::ZERO,
            worst_index: None,
            sum_abs_error: Decimal::ZERO,
            sum_pct_error: 0.0,
            pct_samples: 0,
        }
    }

    /// Record one case's expected/actual pair.
    pub fn record(&mut self, index: usize, expected: Decimal, actual: Decimal) {
        self.total += 1;
        let err = (actual - expected).abs();

        if err <= self.exact_tolerance {
            self.exact_matches += 1;
        }
        if err <= self.close_tolerance {
            self.close_matches += 1;
        }
        if actual.is_sign_negative() && !actual.is_zero() {
            self.negative_outputs += 1;
        }

        self.sum_abs_error += err;
        if !expected.is_zero() {
            let pct = (err / expected.abs()).to_f64().unwrap_or(0.0) * 100.0;
            self.sum_pct_error += pct;
            self.pct_samples += 1;
        }
        if err > self.max_abs_error {
            self.max_abs_error = err;
            self.worst_index = Some(index);
        }
    }

    /// Mean absolute error in dollars.
    pub fn mean_abs_error(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.sum_abs_error.to_f64().unwrap_or(0.0) / self.total as f64
    }

    /// Mean absolute percentage error over cases with a nonzero expectation.
    pub fn mean_pct_error(&self) -> f64 {
        if self.pct_samples == 0 {
            return 0.0;
        }
        self.sum_pct_error / self.pct_samples as f64
    }

    /// Aggregate calibration score, lower is better.
    pub fn score(&self) -> f64 {
        let misses = (self.total - self.exact_matches) as f64;
        self.mean_abs_error() * SCORE_MAE_WEIGHT
            + misses * SCORE_MISS_WEIGHT
            + self.negative_outputs as f64 * SCORE_NEGATIVE_PENALTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_close_counting() {
        let mut t = EvalTracker::new();
        t.record(0, dec!(100.00), dec!(100.00)); // exact
        t.record(1, dec!(100.00), dec!(100.01)); // exact (boundary)
        t.record(2, dec!(100.00), dec!(100.75)); // close only
        t.record(3, dec!(100.00), dec!(150.00)); // miss
        assert_eq!(t.total, 4);
        assert_eq!(t.exact_matches, 2);
        assert_eq!(t.close_matches, 3);
        assert_eq!(t.max_abs_error, dec!(50.00));
        assert_eq!(t.worst_index, Some(3));
    }

    #[test]
    fn mean_errors() {
        let mut t = EvalTracker::new();
        t.record(0, dec!(100), dec!(110)); // 10, 10%
        t.record(1, dec!(200), dec!(160)); // 40, 20%
        assert!((t.mean_abs_error() - 25.0).abs() < 1e-9);
        assert!((t.mean_pct_error() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn negative_outputs_dominate_the_score() {
        let mut clean = EvalTracker::new();
        clean.record(0, dec!(100), dec!(90));
        let mut buggy = EvalTracker::new();
        buggy.record(0, dec!(100), dec!(-10));
        assert!(
            buggy.score() > clean.score() + SCORE_NEGATIVE_PENALTY / 2.0,
            "a negative output must swamp ordinary error"
        );
    }

    #[test]
    fn empty_tracker_scores_zero() {
        let t = EvalTracker::new();
        assert_eq!(t.mean_abs_error(), 0.0);
        assert_eq!(t.mean_pct_error(), 0.0);
        assert_eq!(t.score(), 0.0);
    }
}
