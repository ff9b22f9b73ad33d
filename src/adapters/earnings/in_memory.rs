//! In-memory earnings reader for testing.
//!
//! Provides deterministic breakdown data for unit and integration tests.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in
//! production. It uses `.expect()` on lock operations which will panic if
//! locks are poisoned.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::earnings::ProductBreakdown;
use crate::domain::foundation::{FiscalMonth, RepId};
use crate::ports::{EarningsError, EarningsReader};

/// In-memory earnings store keyed by rep and fiscal month.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
pub struct InMemoryEarningsReader {
    rows: RwLock<HashMap<(RepId, FiscalMonth), Vec<ProductBreakdown>>>,
}

impl InMemoryEarningsReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Seeds the breakdown for a rep's fiscal month, replacing any
    /// existing rows.
    pub fn seed(&self, rep_id: RepId, month: FiscalMonth, rows: Vec<ProductBreakdown>) {
        self.rows
            .write()
            .expect("InMemoryEarningsReader: rows write lock poisoned")
            .insert((rep_id, month), rows);
    }

    /// Clears all seeded data (for test isolation).
    pub fn clear(&self) {
        self.rows
            .write()
            .expect("InMemoryEarningsReader: rows write lock poisoned")
            .clear();
    }

    /// Returns the number of seeded (rep, month) entries.
    pub fn entry_count(&self) -> usize {
        self.rows
            .read()
            .expect("InMemoryEarningsReader: rows lock poisoned")
            .len()
    }
}

impl Default for InMemoryEarningsReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EarningsReader for InMemoryEarningsReader {
    async fn monthly_breakdown(
        &self,
        rep_id: RepId,
        month: &FiscalMonth,
    ) -> Result<Vec<ProductBreakdown>, EarningsError> {
        self.rows
            .read()
            .expect("InMemoryEarningsReader: rows lock poisoned")
            .get(&(rep_id, *month))
            .cloned()
            .ok_or(EarningsError::RepNotFound(rep_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProductCategory;
    use chrono::{TimeZone, Utc};

    fn march_2024() -> FiscalMonth {
        FiscalMonth::containing(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn seeded_rows_are_returned() {
        let reader = InMemoryEarningsReader::new();
        let rep_id = RepId::new();
        let rows = vec![ProductBreakdown::new(ProductCategory::Internet, 9, 900.0)];
        reader.seed(rep_id, march_2024(), rows.clone());

        let result = reader.monthly_breakdown(rep_id, &march_2024()).await;
        assert_eq!(result.unwrap(), rows);
    }

    #[tokio::test]
    async fn unknown_rep_is_not_found() {
        let reader = InMemoryEarningsReader::new();
        let result = reader.monthly_breakdown(RepId::new(), &march_2024()).await;
        assert!(matches!(result, Err(EarningsError::RepNotFound(_))));
    }

    #[tokio::test]
    async fn months_are_isolated() {
        let reader = InMemoryEarningsReader::new();
        let rep_id = RepId::new();
        reader.seed(
            rep_id,
            march_2024(),
            vec![ProductBreakdown::new(ProductCategory::Internet, 9, 900.0)],
        );

        let other_month = march_2024().next();
        let result = reader.monthly_breakdown(rep_id, &other_month).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn seeding_replaces_existing_rows() {
        let reader = InMemoryEarningsReader::new();
        let rep_id = RepId::new();
        reader.seed(
            rep_id,
            march_2024(),
            vec![ProductBreakdown::new(ProductCategory::Internet, 2, 0.0)],
        );
        reader.seed(
            rep_id,
            march_2024(),
            vec![ProductBreakdown::new(ProductCategory::Internet, 9, 900.0)],
        );

        let rows = reader.monthly_breakdown(rep_id, &march_2024()).await.unwrap();
        assert_eq!(rows[0].count, 9);
        assert_eq!(reader.entry_count(), 1);
    }

    #[test]
    fn clear_empties_the_store() {
        let reader = InMemoryEarningsReader::new();
        reader.seed(RepId::new(), march_2024(), vec![]);
        assert_eq!(reader.entry_count(), 1);
        reader.clear();
        assert_eq!(reader.entry_count(), 0);
    }
}
