//! GetCommissionOutlookHandler - Query handler for the dashboard's
//! commission panel.
//!
//! Returns the rep's tier position, month-to-date totals, next-tier
//! projection, and optional goal progress for one fiscal month.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::commission::{CommissionEngine, CurrentTotals, NextTierProjection};
use crate::domain::earnings;
use crate::domain::foundation::{FiscalMonth, RepId};
use crate::domain::goals::{GoalProgress, MonthlyGoal};
use crate::ports::{EarningsError, EarningsReader};

/// Query to get the commission outlook for a rep.
#[derive(Debug, Clone)]
pub struct GetCommissionOutlookQuery {
    /// The rep to report on.
    pub rep_id: RepId,
    /// Fiscal month to report on (defaults to the current one).
    pub month: Option<FiscalMonth>,
    /// Monthly goal to measure progress against, if the rep set one.
    pub goal: Option<MonthlyGoal>,
}

/// The dashboard commission panel payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionOutlook {
    pub rep_id: RepId,
    pub month_label: String,
    /// Internet units sold this fiscal month; drives tier position.
    pub internet_count: u32,
    pub tier_label: String,
    pub tier_index: usize,
    pub at_top_tier: bool,
    /// Commission dollars paid out so far, rounded.
    pub month_to_date_payout: i64,
    pub totals: CurrentTotals,
    /// Absent when the rep already sits in the terminal tier.
    pub next_tier: Option<NextTierProjection>,
    /// Absent when the query carries no goal.
    pub goal_progress: Option<GoalProgress>,
    pub last_updated: DateTime<Utc>,
}

/// Handler for retrieving a rep's commission outlook.
pub struct GetCommissionOutlookHandler {
    reader: Arc<dyn EarningsReader>,
    engine: Arc<CommissionEngine>,
}

impl GetCommissionOutlookHandler {
    pub fn new(reader: Arc<dyn EarningsReader>, engine: Arc<CommissionEngine>) -> Self {
        Self { reader, engine }
    }

    pub async fn handle(
        &self,
        query: GetCommissionOutlookQuery,
    ) -> Result<CommissionOutlook, EarningsError> {
        let month = query.month.unwrap_or_else(FiscalMonth::current);
        let rows = self.reader.monthly_breakdown(query.rep_id, &month).await?;

        // Count and totals come from the same row set; the engine never
        // sees a split snapshot.
        let internet_count = earnings::internet_count(&rows);
        let totals = earnings::reduce_totals(&rows);
        let schedule = self.engine.schedule();

        let now = Utc::now();
        let goal_progress = query
            .goal
            .map(|goal| GoalProgress::measure(&goal, &totals, month.elapsed_fraction(now)));

        tracing::debug!(
            rep_id = %query.rep_id,
            month = %month,
            internet_count,
            "computed commission outlook"
        );

        Ok(CommissionOutlook {
            rep_id: query.rep_id,
            month_label: month.label(),
            internet_count,
            tier_label: schedule.tier_label(internet_count),
            tier_index: schedule.tier_index(internet_count),
            at_top_tier: schedule.is_top_tier(internet_count),
            month_to_date_payout: earnings::month_to_date_payout(&rows).round() as i64,
            totals,
            next_tier: self.engine.next_tier_info(internet_count, &totals),
            goal_progress,
            last_updated: now,
        })
    }
}
