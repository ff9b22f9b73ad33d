use async_trait::async_trait;

use crate::domain::earnings::ProductBreakdown;
use crate::domain::foundation::{FiscalMonth, RepId};

/// Read-only port for the earnings aggregation service.
///
/// One call returns the full breakdown for a rep's fiscal month; callers
/// derive both the internet count and the totals snapshot from that single
/// row set so the two stay consistent.
#[async_trait]
pub trait EarningsReader: Send + Sync {
    /// Gets the monthly breakdown-by-product for a rep.
    async fn monthly_breakdown(
        &self,
        rep_id: RepId,
        month: &FiscalMonth,
    ) -> Result<Vec<ProductBreakdown>, EarningsError>;
}

/// Errors that can occur while reading earnings data.
#[derive(Debug, thiserror::Error)]
pub enum EarningsError {
    #[error("No earnings recorded for rep: {0}")]
    RepNotFound(RepId),

    #[error("Earnings service unavailable: {0}")]
    Upstream(String),

    #[error("Malformed earnings response: {0}")]
    InvalidResponse(String),
}
