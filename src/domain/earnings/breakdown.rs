//! Monthly breakdown-by-product rows from the earnings aggregation service.
//!
//! The aggregation API reports one row per product category with the unit
//! count and the payout earned so far this fiscal month. These reductions
//! turn a row set into the `(internet_count, CurrentTotals)` pair the
//! engine's contract is keyed on. Deriving both from the same row set is
//! what keeps the snapshot consistent.

use serde::{Deserialize, Serialize};

use crate::domain::commission::CurrentTotals;
use crate::domain::foundation::ProductCategory;

/// One product row of a monthly earnings breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductBreakdown {
    /// The product this row aggregates.
    pub product: ProductCategory,
    /// Units sold this fiscal month.
    #[serde(default)]
    pub count: u32,
    /// Commission dollars paid out for this product so far.
    #[serde(default)]
    pub payout: f64,
}

impl ProductBreakdown {
    /// Creates a breakdown row.
    pub fn new(product: ProductCategory, count: u32, payout: f64) -> Self {
        Self {
            product,
            count,
            payout,
        }
    }
}

/// The rep's monthly internet count, 0 when no Internet row is present.
pub fn internet_count(rows: &[ProductBreakdown]) -> u32 {
    rows.iter()
        .find(|row| row.product == ProductCategory::Internet)
        .map(|row| row.count)
        .unwrap_or(0)
}

/// Reduces breakdown rows into the engine's totals snapshot.
///
/// Tiered products contribute their unit counts, the MRR row contributes
/// its payout, and the a-la-carte rows contribute their summed payouts.
/// Missing rows reduce to zero.
pub fn reduce_totals(rows: &[ProductBreakdown]) -> CurrentTotals {
    let mut totals = CurrentTotals::default();
    for row in rows {
        match row.product {
            ProductCategory::Internet => totals.internet += row.count,
            ProductCategory::Mobile => totals.mobile += row.count,
            ProductCategory::Voice => totals.voice += row.count,
            ProductCategory::Video => totals.video += row.count,
            ProductCategory::Mrr => totals.mrr += row.payout,
            ProductCategory::Wib | ProductCategory::GigInternet | ProductCategory::Sbc => {
                totals.alacarte += row.payout
            }
        }
    }
    totals
}

/// Total commission dollars paid out across all rows.
pub fn month_to_date_payout(rows: &[ProductBreakdown]) -> f64 {
    rows.iter().map(|row| row.payout).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<ProductBreakdown> {
        vec![
            ProductBreakdown::new(ProductCategory::Internet, 9, 900.0),
            ProductBreakdown::new(ProductCategory::Mobile, 5, 375.0),
            ProductBreakdown::new(ProductCategory::Voice, 2, 100.0),
            ProductBreakdown::new(ProductCategory::Mrr, 0, 250.0),
            ProductBreakdown::new(ProductCategory::Wib, 1, 100.0),
            ProductBreakdown::new(ProductCategory::Sbc, 4, 100.0),
        ]
    }

    #[test]
    fn internet_count_reads_the_internet_row() {
        assert_eq!(internet_count(&sample_rows()), 9);
    }

    #[test]
    fn internet_count_is_zero_without_an_internet_row() {
        let rows = vec![ProductBreakdown::new(ProductCategory::Mobile, 5, 375.0)];
        assert_eq!(internet_count(&rows), 0);
    }

    #[test]
    fn reduce_totals_splits_counts_and_payouts() {
        let totals = reduce_totals(&sample_rows());
        assert_eq!(totals.internet, 9);
        assert_eq!(totals.mobile, 5);
        assert_eq!(totals.voice, 2);
        assert_eq!(totals.video, 0);
        assert_eq!(totals.mrr, 250.0);
        assert_eq!(totals.alacarte, 200.0);
    }

    #[test]
    fn reduce_totals_of_empty_rows_is_default() {
        assert_eq!(reduce_totals(&[]), CurrentTotals::default());
    }

    #[test]
    fn duplicate_rows_accumulate() {
        let rows = vec![
            ProductBreakdown::new(ProductCategory::Internet, 3, 0.0),
            ProductBreakdown::new(ProductCategory::Internet, 4, 0.0),
        ];
        assert_eq!(reduce_totals(&rows).internet, 7);
    }

    #[test]
    fn month_to_date_sums_all_payouts() {
        assert_eq!(month_to_date_payout(&sample_rows()), 1825.0);
    }

    #[test]
    fn rows_deserialize_from_api_shape() {
        let json = r#"[{"product": "Internet", "count": 9, "payout": 900.0},
                       {"product": "MRR", "payout": 250.0}]"#;
        let rows: Vec<ProductBreakdown> = serde_json::from_str(json).unwrap();
        assert_eq!(internet_count(&rows), 9);
        assert_eq!(reduce_totals(&rows).mrr, 250.0);
    }
}
