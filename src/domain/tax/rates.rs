//! Flat per-state and federal withholding rates.
//!
//! Commission payouts are supplemental wages, withheld at flat rates: one
//! federal rate plus a per-state rate. This table sits alongside the
//! commission engine but is independent of it; the dashboard combines the
//! two to show estimated take-home figures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat federal supplemental-wage withholding rate.
pub const FEDERAL_SUPPLEMENTAL_RATE: f64 = 0.22;

/// Rate applied for states missing from the table.
const DEFAULT_STATE_RATE: f64 = 0.05;

/// Flat withholding-rate lookup keyed by two-letter state code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTable {
    federal: f64,
    default_state: f64,
    states: HashMap<String, f64>,
}

impl TaxTable {
    /// Returns the builtin withholding table.
    pub fn standard() -> Self {
        let states = [
            ("AK", 0.0),
            ("AZ", 0.025),
            ("CA", 0.1023),
            ("CO", 0.044),
            ("CT", 0.0699),
            ("FL", 0.0),
            ("GA", 0.0549),
            ("IL", 0.0495),
            ("MA", 0.05),
            ("MI", 0.0425),
            ("NC", 0.045),
            ("NH", 0.0),
            ("NJ", 0.0637),
            ("NV", 0.0),
            ("NY", 0.1170),
            ("OH", 0.035),
            ("OR", 0.08),
            ("PA", 0.0307),
            ("SD", 0.0),
            ("TN", 0.0),
            ("TX", 0.0),
            ("UT", 0.0465),
            ("VA", 0.0575),
            ("WA", 0.0),
            ("WY", 0.0),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self {
            federal: FEDERAL_SUPPLEMENTAL_RATE,
            default_state: DEFAULT_STATE_RATE,
            states,
        }
    }

    /// The flat federal rate.
    pub fn federal_rate(&self) -> f64 {
        self.federal
    }

    /// The flat rate for a state, falling back to the default for unknown
    /// codes. Lookup is case-insensitive and whitespace-tolerant.
    pub fn state_rate(&self, state: &str) -> f64 {
        let code = state.trim().to_ascii_uppercase();
        self.states
            .get(&code)
            .copied()
            .unwrap_or(self.default_state)
    }

    /// Combined federal plus state rate, capped at 1.0.
    pub fn combined_rate(&self, state: &str) -> f64 {
        (self.federal + self.state_rate(state)).min(1.0)
    }

    /// Estimated withholding on a gross commission amount, rounded.
    pub fn withholding(&self, state: &str, gross: f64) -> i64 {
        (gross * self.combined_rate(state)).round() as i64
    }

    /// Estimated net commission after withholding, rounded.
    pub fn net_commission(&self, state: &str, gross: f64) -> i64 {
        (gross * (1.0 - self.combined_rate(state))).round() as i64
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::standard()
    }
}
