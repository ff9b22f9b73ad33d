//! Month-to-date totals snapshot supplied by the caller.

use serde::{Deserialize, Serialize};

/// Aggregate counts and payouts for one rep and fiscal month.
///
/// Supplied by the calling aggregation layer; the engine treats it as a
/// read-only snapshot and never reconciles it against the internet-count
/// argument. Missing fields deserialize to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentTotals {
    /// Internet units sold.
    pub internet: u32,
    /// Mobile lines sold.
    pub mobile: u32,
    /// Voice lines sold.
    pub voice: u32,
    /// Video/TV subscriptions sold.
    pub video: u32,
    /// MRR commission already paid out (dollars, rated at the current tier).
    pub mrr: f64,
    /// A-la-carte commission already paid out (dollars).
    pub alacarte: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let totals = CurrentTotals::default();
        assert_eq!(totals.internet, 0);
        assert_eq!(totals.mrr, 0.0);
        assert_eq!(totals.alacarte, 0.0);
    }

    #[test]
    fn partial_json_fills_missing_fields_with_zero() {
        let totals: CurrentTotals =
            serde_json::from_str(r#"{"internet": 9, "mobile": 5}"#).unwrap();
        assert_eq!(totals.internet, 9);
        assert_eq!(totals.mobile, 5);
        assert_eq!(totals.voice, 0);
        assert_eq!(totals.mrr, 0.0);
    }
}
