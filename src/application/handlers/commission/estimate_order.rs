//! EstimateOrderCommissionHandler - Query handler for per-order commission
//! estimates.
//!
//! The dashboard shows an estimated payout while a rep is logging an order.
//! The order arrives as a raw JSON payload and is normalized at this
//! boundary before the engine sees it.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::domain::commission::{CommissionEngine, OrderProducts};
use crate::domain::earnings;
use crate::domain::foundation::{FiscalMonth, RepId};
use crate::ports::{EarningsError, EarningsReader};

/// Query to estimate the commission contribution of one order.
#[derive(Debug, Clone)]
pub struct EstimateOrderCommissionQuery {
    /// The rep logging the order.
    pub rep_id: RepId,
    /// Fiscal month supplying the tier position (defaults to current).
    pub month: Option<FiscalMonth>,
    /// Raw order payload as submitted by the order form.
    pub order: Value,
}

/// Result of a per-order estimate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCommissionEstimate {
    /// Estimated payout for this order, in whole currency units.
    pub estimated_commission: i64,
    /// The tier the estimate was rated at.
    pub tier_label: String,
    /// The internet count the tier was resolved from.
    pub internet_count: u32,
}

/// Handler for estimating one order's commission.
pub struct EstimateOrderCommissionHandler {
    reader: Arc<dyn EarningsReader>,
    engine: Arc<CommissionEngine>,
}

impl EstimateOrderCommissionHandler {
    pub fn new(reader: Arc<dyn EarningsReader>, engine: Arc<CommissionEngine>) -> Self {
        Self { reader, engine }
    }

    pub async fn handle(
        &self,
        query: EstimateOrderCommissionQuery,
    ) -> Result<OrderCommissionEstimate, EarningsError> {
        let month = query.month.unwrap_or_else(FiscalMonth::current);
        let rows = self.reader.monthly_breakdown(query.rep_id, &month).await?;
        let internet_count = earnings::internet_count(&rows);

        let order = OrderProducts::from_value(&query.order);
        let estimated_commission = self
            .engine
            .estimate_order_commission(&order, Some(internet_count));

        tracing::debug!(
            rep_id = %query.rep_id,
            internet_count,
            estimated_commission,
            "estimated order commission"
        );

        Ok(OrderCommissionEstimate {
            estimated_commission,
            tier_label: self.engine.schedule().tier_label(internet_count),
            internet_count,
        })
    }
}
