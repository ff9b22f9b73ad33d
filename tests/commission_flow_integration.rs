//! Integration tests for the commission outlook flow.
//!
//! These tests verify the end-to-end path:
//! 1. Schedule loads from configuration (builtin or file override)
//! 2. Seeded earnings data flows through the in-memory reader port
//! 3. Handlers reduce the breakdown and run the tiering engine
//! 4. The outlook DTO carries tier, projection, and goal progress
//!
//! Uses in-memory implementations to test the flow without external
//! dependencies.

use std::io::Write;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::json;

use salesdash::adapters::earnings::InMemoryEarningsReader;
use salesdash::application::{
    EstimateOrderCommissionHandler, EstimateOrderCommissionQuery, GetCommissionOutlookHandler,
    GetCommissionOutlookQuery,
};
use salesdash::config::CommissionConfig;
use salesdash::domain::commission::CommissionEngine;
use salesdash::domain::earnings::ProductBreakdown;
use salesdash::domain::foundation::{FiscalMonth, ProductCategory, RepId};
use salesdash::domain::goals::{MonthlyGoal, PaceStatus};
use salesdash::ports::EarningsError;

fn march_2024() -> FiscalMonth {
    FiscalMonth::containing(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
}

fn seeded_reader(rep_id: RepId, rows: Vec<ProductBreakdown>) -> Arc<InMemoryEarningsReader> {
    let reader = Arc::new(InMemoryEarningsReader::new());
    reader.seed(rep_id, march_2024(), rows);
    reader
}

fn mid_tier_rows() -> Vec<ProductBreakdown> {
    vec![
        ProductBreakdown::new(ProductCategory::Internet, 9, 900.0),
        ProductBreakdown::new(ProductCategory::Mobile, 5, 375.0),
        ProductBreakdown::new(ProductCategory::Mrr, 0, 250.0),
        ProductBreakdown::new(ProductCategory::Wib, 1, 100.0),
    ]
}

#[tokio::test]
async fn outlook_flows_from_seeded_earnings_to_projection() {
    let rep_id = RepId::new();
    let reader = seeded_reader(rep_id, mid_tier_rows());
    let handler =
        GetCommissionOutlookHandler::new(reader, Arc::new(CommissionEngine::default()));

    let outlook = handler
        .handle(GetCommissionOutlookQuery {
            rep_id,
            month: Some(march_2024()),
            goal: None,
        })
        .await
        .unwrap();

    assert_eq!(outlook.internet_count, 9);
    assert_eq!(outlook.tier_label, "5-9");
    assert_eq!(outlook.month_to_date_payout, 1625);
    assert_eq!(outlook.totals.alacarte, 100.0);

    // One more internet unit reaches tier 10-19.
    let projection = outlook.next_tier.expect("mid-tier rep has a next tier");
    assert_eq!(projection.next_tier_label, "10-19");
    assert_eq!(projection.internet_needed, 1);
    assert!(projection.increase > 0);
    assert!(projection.projected_total > projection.current_total);
}

#[tokio::test]
async fn goal_progress_rides_along_with_the_outlook() {
    let rep_id = RepId::new();
    let reader = seeded_reader(rep_id, mid_tier_rows());
    let handler =
        GetCommissionOutlookHandler::new(reader, Arc::new(CommissionEngine::default()));

    let outlook = handler
        .handle(GetCommissionOutlookQuery {
            rep_id,
            month: Some(march_2024()),
            goal: Some(MonthlyGoal {
                internet: 9,
                mobile: 50,
                ..Default::default()
            }),
        })
        .await
        .unwrap();

    let progress = outlook.goal_progress.unwrap();
    assert_eq!(progress.products[0].pace, PaceStatus::Met);
    // March 2024 is long over, so 5 of 50 mobile lines reads Behind.
    assert_eq!(progress.products[1].pace, PaceStatus::Behind);
}

#[tokio::test]
async fn order_estimate_uses_the_reps_live_tier_position() {
    let rep_id = RepId::new();
    let reader = seeded_reader(
        rep_id,
        vec![ProductBreakdown::new(ProductCategory::Internet, 5, 500.0)],
    );
    let handler =
        EstimateOrderCommissionHandler::new(reader, Arc::new(CommissionEngine::default()));

    let estimate = handler
        .handle(EstimateOrderCommissionQuery {
            rep_id,
            month: Some(march_2024()),
            order: json!({
                "has_internet": true,
                "has_mobile": 2,
                "monthly_total": 1000,
                "has_wib": true
            }),
        })
        .await
        .unwrap();

    assert_eq!(estimate.tier_label, "5-9");
    assert_eq!(estimate.estimated_commission, 600);
}

#[tokio::test]
async fn unseeded_rep_surfaces_not_found() {
    let reader = Arc::new(InMemoryEarningsReader::new());
    let handler =
        GetCommissionOutlookHandler::new(reader, Arc::new(CommissionEngine::default()));

    let result = handler
        .handle(GetCommissionOutlookQuery {
            rep_id: RepId::new(),
            month: Some(march_2024()),
            goal: None,
        })
        .await;

    assert!(matches!(result, Err(EarningsError::RepNotFound(_))));
}

#[tokio::test]
async fn file_configured_schedule_drives_the_whole_flow() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(
        br#"
tiers:
  - { label: "0-4", min: 0, max: 4, internet: 0, mobile: 0, voice: 0, video: 0, mrr: 0 }
  - { label: "5+", min: 5, max: null, internet: 300, mobile: 100, voice: 50, video: 50, mrr: 0.4 }
alacarte:
  wib: 80
  gig_internet: 40
  sbc: 10
"#,
    )
    .unwrap();

    let config = CommissionConfig {
        schedule_path: Some(file.path().to_path_buf()),
    };
    let engine = Arc::new(CommissionEngine::new(config.load_schedule().unwrap()));

    let rep_id = RepId::new();
    let reader = seeded_reader(
        rep_id,
        vec![ProductBreakdown::new(ProductCategory::Internet, 6, 1800.0)],
    );
    let handler = EstimateOrderCommissionHandler::new(reader, engine);

    let estimate = handler
        .handle(EstimateOrderCommissionQuery {
            rep_id,
            month: Some(march_2024()),
            order: json!({ "has_internet": true, "has_wib": true }),
        })
        .await
        .unwrap();

    // Override rates: 300 internet + 80 WIB.
    assert_eq!(estimate.tier_label, "5+");
    assert_eq!(estimate.estimated_commission, 380);
}
