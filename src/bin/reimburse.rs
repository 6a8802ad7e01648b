// Reimbursement CLI — thin wrapper over the calculation engine
//
// Usage:
//   reimburse <duration_days> <miles_traveled> <total_receipts_amount>
//
// Prints a single amount with two fractional digits on stdout. Malformed
// input never reaches the engine: a usage message goes to stderr and the
// process exits non-zero.

use reimburse_engine::{ReimbursementEngine, TripInput};
use rust_decimal::Decimal;
use std::str::FromStr;

const USAGE: &str = "usage: reimburse <duration_days> <miles_traveled> <total_receipts_amount>";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let trip = match parse_trip(&args) {
        Ok(trip) => trip,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let engine = ReimbursementEngine::with_defaults();
    println!("{}", engine.calculate(&trip).0);
}

fn parse_trip(args: &[String]) -> Result<TripInput, String> {
    if args.len() != 3 {
        return Err(format!("expected 3 arguments, got {}", args.len()));
    }
    let duration: u32 = args[0]
        .parse()
        .map_err(|_| format!("invalid duration_days: {:?}", args[0]))?;
    let miles: u32 = args[1]
        .parse()
        .map_err(|_| format!("invalid miles_traveled: {:?}", args[1]))?;
    // Receipts parse straight into Decimal; user input never rides through f64.
    let receipts = Decimal::from_str(&args[2])
        .map_err(|_| format!("invalid total_receipts_amount: {:?}", args[2]))?;
    TripInput::new(duration, miles, receipts).map_err(|e| e.to_string())
}
