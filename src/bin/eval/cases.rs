// Labeled-case loading — the legacy dataset format
//
// A case file is a JSON array of records shaped like:
//   {"input": {"trip_duration_days": 3, "miles_traveled": 150,
//              "total_receipts_amount": 275.50}, "expected_output": 364.51}
// Field names match the historical public_cases.json exactly.

use reimburse_engine::TripInput;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Failures while loading or validating a case file.
#[derive(Debug, thiserror::Error)]
pub enum CaseFileError {
    #[error("failed to read case file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed case file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("case {index}: {reason}")]
    Record { index: usize, reason: String },
}

#[derive(Debug, Deserialize)]
struct RawCase {
    input: RawInput,
    expected_output: f64,
}

// The legacy dataset stores every field as a JSON number, durations
// included, so everything arrives as f64 and is validated on conversion.
#[derive(Debug, Deserialize)]
struct RawInput {
    trip_duration_days: f64,
    miles_traveled: f64,
    total_receipts_amount: f64,
}

/// One validated labeled case.
#[derive(Debug, Clone)]
pub struct LabeledCase {
    pub trip: TripInput,
    pub expected: Decimal,
}

/// Load and validate a full case file.
pub fn load_cases(path: &Path) -> Result<Vec<LabeledCase>, CaseFileError> {
    let text = std::fs::read_to_string(path)?;
    let raw: Vec<RawCase> = serde_json::from_str(&text)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, case)| convert(index, case))
        .collect()
}

fn convert(index: usize, case: RawCase) -> Result<LabeledCase, CaseFileError> {
    let record_err = |reason: String| CaseFileError::Record { index, reason };

    let days = integral(case.input.trip_duration_days)
        .ok_or_else(|| record_err(format!(
            "trip_duration_days must be a whole number, got {}",
            case.input.trip_duration_days
        )))?;
    let miles = integral(case.input.miles_traveled)
        .ok_or_else(|| record_err(format!(
            "miles_traveled must be a whole number, got {}",
            case.input.miles_traveled
        )))?;
    let receipts = currency(case.input.total_receipts_amount)
        .ok_or_else(|| record_err(format!(
            "total_receipts_amount is not a currency amount: {}",
            case.input.total_receipts_amount
        )))?;
    let expected = currency(case.expected_output)
        .ok_or_else(|| record_err(format!(
            "expected_output is not a currency amount: {}",
            case.expected_output
        )))?;

    let trip = TripInput::new(days, miles, receipts).map_err(|e| record_err(e.to_string()))?;
    Ok(LabeledCase { trip, expected })
}

/// Non-negative whole number carried in a JSON float.
fn integral(v: f64) -> Option<u32> {
    if !v.is_finite() || v < 0.0 || v > u32::MAX as f64 {
        return None;
    }
    let rounded = v.round();
    if (v - rounded).abs() > 1e-9 {
        return None;
    }
    Some(rounded as u32)
}

/// Dataset amounts carry cent precision; rounding to two places strips the
/// float representation dust picked up on the way through JSON.
fn currency(v: f64) -> Option<Decimal> {
    if !v.is_finite() {
        return None;
    }
    Decimal::from_f64(v).map(|d| d.round_dp(2))
}
