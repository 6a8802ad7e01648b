// Evaluation report types — structured JSON artifact per run
// Written under eval-results/ so calibrations can be compared offline.

use crate::sweep::SweepSummary;
use rust_decimal::Decimal;
use serde::Serialize;

/// Top-level report for one evaluation run.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub timestamp: String,
    pub version: &'static str,
    pub cases_file: String,
    pub params_file: Option<String>,
    pub n_cases: usize,
    pub exact_matches: usize,
    pub close_matches: usize,
    pub mean_abs_error: f64,
    pub mean_pct_error: f64,
    pub max_abs_error: Decimal,
    pub negative_outputs: usize,
    pub score: f64,
    pub paths: Vec<PathBreakdown>,
    pub worst_cases: Vec<WorstCase>,
    pub sweep: Option<SweepSummary>,
}

/// Case count and error mass per dispatch path (including the default).
#[derive(Debug, Clone, Serialize)]
pub struct PathBreakdown {
    pub path: &'static str,
    pub cases: usize,
    pub mean_abs_error: f64,
}

/// One of the largest-error cases, listed for calibration triage.
#[derive(Debug, Clone, Serialize)]
pub struct WorstCase {
    pub index: usize,
    pub duration_days: u32,
    pub miles_traveled: u32,
    pub receipts: Decimal,
    pub expected: Decimal,
    pub actual: Decimal,
    pub abs_error: Decimal,
    pub path: &'static str,
}
