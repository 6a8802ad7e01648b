// Seeded property sweep — invariant checks over generated inputs
// ChaCha8 with an explicit seed, so a sweep is reproducible by seed alone.
//
// The engine's contract properties are checked on every generated trip:
// repeated calls bit-identical, output at or above the configured floor,
// output scale exactly two fractional digits. Violations are counted and
// reported, never thrown.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reimburse_engine::{ReimbursementEngine, TripInput};
use rust_decimal::Decimal;
use serde::Serialize;

// Generation ranges: wide enough to cross every dispatch predicate and
// capping tier, including zero-mile and zero-receipt trips.
const MAX_DAYS: u32 = 30;
const MAX_MILES: u32 = 2_000;
const MAX_RECEIPT_CENTS: i64 = 500_000;

/// Outcome of one property sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub cases: usize,
    pub seed: u64,
    pub determinism_violations: usize,
    pub floor_violations: usize,
    pub scale_violations: usize,
}

impl SweepSummary {
    pub fn clean(&self) -> bool {
        self.determinism_violations == 0
            && self.floor_violations == 0
            && self.scale_violations == 0
    }
}

/// Run `cases` generated trips through the engine and check invariants.
pub fn run_sweep(engine: &ReimbursementEngine, cases: usize, seed: u64) -> SweepSummary {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let floor = engine.params().finalizer.floor;

    let mut summary = SweepSummary {
        cases,
        seed,
        determinism_violations: 0,
        floor_violations: 0,
        scale_violations: 0,
    };

    for _ in 0..cases {
        let days = rng.gen_range(1..=MAX_DAYS);
        let miles = rng.gen_range(0..=MAX_MILES);
        let receipts = Decimal::new(rng.gen_range(0..=MAX_RECEIPT_CENTS), 2);
        let trip = TripInput::new(days, miles, receipts)
            .expect("sweep generation stays inside the input contract");

        let first = engine.calculate(&trip);
        let second = engine.calculate(&trip);

        if first != second {
            summary.determinism_violations += 1;
        }
        if first.0 < floor {
            summary.floor_violations += 1;
        }
        if first.0.scale() != 2 {
            summary.scale_violations += 1;
        }
    }

    summary
}
