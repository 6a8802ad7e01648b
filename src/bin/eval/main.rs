// Reimbursement Evaluation Harness — acceptance test and calibration loop
//
// Usage:
//   cargo run --release --bin eval                            # score data/sample_cases.json
//   cargo run --release --bin eval -- path/to/cases.json      # score another dataset
//   cargo run --release --bin eval -- --params tuned.json     # score a calibration snapshot
//   cargo run --release --bin eval -- --sweep 5000 --seed 7   # add a property sweep
//   cargo run --release --bin eval -- --top 10                # list more worst cases

mod cases;
mod metrics;
mod report;
mod sweep;

use cases::{load_cases, LabeledCase};
use metrics::EvalTracker;
use report::{EvalReport, PathBreakdown, WorstCase};

use num_traits::ToPrimitive;
use reimburse_engine::{EngineParams, ReimbursementEngine, DISPATCH_ORDER};
use rust_decimal::Decimal;
use std::path::Path;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_CASES: &str = "data/sample_cases.json";

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    cases: String,
    params: Option<String>,
    sweep_cases: usize,
    seed: u64,
    top: usize,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        cases: DEFAULT_CASES.to_string(),
        params: None,
        sweep_cases: 0,
        seed: 0,
        top: 5,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--params" => {
                i += 1;
                if i < args.len() {
                    cli.params = Some(args[i].clone());
                }
            }
            "--sweep" => {
                i += 1;
                if i < args.len() {
                    cli.sweep_cases = args[i].parse().unwrap_or(0);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--top" => {
                i += 1;
                if i < args.len() {
                    cli.top = args[i].parse().unwrap_or(5);
                }
            }
            arg if !arg.starts_with('-') => {
                cli.cases = arg.to_string();
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

fn load_params(path: &str) -> Result<EngineParams, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read params snapshot {}: {}", path, e))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("malformed params snapshot {}: {}", path, e))
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();

    let params = match &cli.params {
        Some(path) => match load_params(path) {
            Ok(p) => p,
            Err(msg) => {
                eprintln!("error: {}", msg);
                std::process::exit(1);
            }
        },
        None => EngineParams::default(),
    };
    let engine = ReimbursementEngine::new(params);

    let labeled = match load_cases(Path::new(&cli.cases)) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if labeled.is_empty() {
        eprintln!("error: case file {} holds no records", cli.cases);
        std::process::exit(1);
    }

    println!("\n  Reimbursement Engine Evaluation v{}", VERSION);
    println!("  Cases: {} ({} records)\n", cli.cases, labeled.len());

    // ─── Score every case ───────────────────────────────────────────────

    let mut tracker = EvalTracker::new();
    let mut path_names: Vec<&'static str> = DISPATCH_ORDER.iter().map(|p| p.name()).collect();
    path_names.push("default");
    let mut path_cases: Vec<usize> = vec![0; path_names.len()];
    let mut path_error: Vec<Decimal> = vec![Decimal::ZERO; path_names.len()];
    let mut scored: Vec<WorstCase> = Vec::with_capacity(labeled.len());

    let run_start = Instant::now();
    for (index, LabeledCase { trip, expected }) in labeled.iter().enumerate() {
        let path = engine.route(trip).map(|p| p.name()).unwrap_or("default");
        let actual = engine.calculate(trip);
        tracker.record(index, *expected, actual.0);

        let slot = path_names.iter().position(|n| *n == path).unwrap_or(0);
        let abs_error = (actual.0 - *expected).abs();
        path_cases[slot] += 1;
        path_error[slot] += abs_error;

        scored.push(WorstCase {
            index,
            duration_days: trip.duration_days,
            miles_traveled: trip.miles_traveled,
            receipts: trip.receipts.0,
            expected: *expected,
            actual: actual.0,
            abs_error,
            path,
        });
    }
    let elapsed = run_start.elapsed();

    // ─── Per-path table ─────────────────────────────────────────────────

    println!("  {:<16} {:>6} {:>12}", "Path", "Cases", "MAE");
    println!("  {}", "-".repeat(36));
    let paths: Vec<PathBreakdown> = path_names
        .iter()
        .enumerate()
        .map(|(slot, name)| {
            let count = path_cases[slot];
            let mae = if count > 0 {
                path_error[slot].to_f64().unwrap_or(0.0) / count as f64
            } else {
                0.0
            };
            println!("  {:<16} {:>6} {:>11.2}", name, count, mae);
            PathBreakdown {
                path: name,
                cases: count,
                mean_abs_error: mae,
            }
        })
        .collect();

    // ─── Summary ────────────────────────────────────────────────────────

    let n = tracker.total;
    let pct = |count: usize| 100.0 * count as f64 / n as f64;
    println!("\n  Exact  (<= $0.01): {:>5} ({:.1}%)", tracker.exact_matches, pct(tracker.exact_matches));
    println!("  Close  (<= $1.00): {:>5} ({:.1}%)", tracker.close_matches, pct(tracker.close_matches));
    println!(
        "  MAE: ${:.2}   Mean %: {:.1}%   Max: ${} (case {})",
        tracker.mean_abs_error(),
        tracker.mean_pct_error(),
        tracker.max_abs_error,
        tracker.worst_index.unwrap_or(0),
    );
    println!("  Negative outputs: {}", tracker.negative_outputs);
    println!("  Score: {:.1} (lower is better)", tracker.score());
    println!(
        "  Engine throughput: {:.0} calls/sec\n",
        n as f64 / elapsed.as_secs_f64().max(1e-9)
    );

    // ─── Worst cases ────────────────────────────────────────────────────

    scored.sort_by(|a, b| b.abs_error.cmp(&a.abs_error));
    let worst: Vec<WorstCase> = scored.iter().take(cli.top).cloned().collect();
    if !worst.is_empty() {
        println!("  Worst {} case(s):", worst.len());
        for w in &worst {
            println!(
                "    case {:>4}  {}d {:>5}mi ${:>9}  expected {:>9}  got {:>9}  off by {}  [{}]",
                w.index, w.duration_days, w.miles_traveled, w.receipts, w.expected, w.actual, w.abs_error, w.path
            );
        }
        println!();
    }

    // ─── Property sweep ─────────────────────────────────────────────────

    let sweep_summary = if cli.sweep_cases > 0 {
        let summary = sweep::run_sweep(&engine, cli.sweep_cases, cli.seed);
        println!(
            "  Sweep: {} generated cases (seed {}) -> determinism {}, floor {}, scale {}  {}",
            summary.cases,
            summary.seed,
            summary.determinism_violations,
            summary.floor_violations,
            summary.scale_violations,
            if summary.clean() { "PASS" } else { "FAIL" },
        );
        Some(summary)
    } else {
        None
    };

    let sweep_failed = sweep_summary.as_ref().map(|s| !s.clean()).unwrap_or(false);

    // ─── Write JSON report ──────────────────────────────────────────────

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_millis();
    let timestamp = format!("{}", ts);

    let report = EvalReport {
        timestamp: timestamp.clone(),
        version: VERSION,
        cases_file: cli.cases.clone(),
        params_file: cli.params.clone(),
        n_cases: n,
        exact_matches: tracker.exact_matches,
        close_matches: tracker.close_matches,
        mean_abs_error: tracker.mean_abs_error(),
        mean_pct_error: tracker.mean_pct_error(),
        max_abs_error: tracker.max_abs_error,
        negative_outputs: tracker.negative_outputs,
        score: tracker.score(),
        paths,
        worst_cases: worst,
        sweep: sweep_summary,
    };

    let dir = Path::new("eval-results");
    if !dir.exists() {
        std::fs::create_dir_all(dir).expect("Failed to create eval-results/");
    }
    let out_path = dir.join(format!("eval-{}.json", timestamp));
    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize");
    std::fs::write(&out_path, &json).expect("Failed to write evaluation report");
    println!("  Results saved to: {}\n", out_path.display());

    if sweep_failed {
        std::process::exit(1);
    }
}
