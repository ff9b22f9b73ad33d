//! Commission domain - rate schedule, order normalization, tiering engine.
//!
//! Everything in this module is pure computation over value arguments:
//! no I/O, no shared state, results keyed entirely by inputs.

pub mod engine;
pub mod order;
pub mod schedule;
pub mod totals;

pub use engine::{
    CommissionEngine, IncreaseBreakdown, NextTierProjection, DEFAULT_INTERNET_COUNT,
};
pub use order::OrderProducts;
pub use schedule::{AlaCarteRates, RateSchedule, RateTier, DEFAULT_ALACARTE_THRESHOLD};
pub use totals::CurrentTotals;
