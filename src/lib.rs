// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Legacy Reimbursement Replica Engine

pub mod capping;
pub mod dispatch;
pub mod engine;
pub mod params;
pub mod types;

pub use dispatch::{dispatch, RulePath, DISPATCH_ORDER};
pub use engine::ReimbursementEngine;
pub use params::EngineParams;
pub use types::{TripInput, TripInputError, Usd};
