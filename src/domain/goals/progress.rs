//! Monthly sales goal tracking.
//!
//! Reps set per-product unit targets for the fiscal month; progress is
//! measured against how far into the period they are. Pure computation,
//! zero-division guarded the same way as the rest of the domain.

use serde::{Deserialize, Serialize};

use crate::domain::commission::CurrentTotals;
use crate::domain::foundation::ProductCategory;

/// A pace reading is OnTrack while completion stays within this band of
/// the elapsed fraction.
const PACE_TOLERANCE: f64 = 0.05;

/// Per-product unit targets for one fiscal month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyGoal {
    pub internet: u32,
    pub mobile: u32,
    pub voice: u32,
    pub video: u32,
}

/// Where the rep stands against a single product goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    /// Goal already reached.
    Met,
    /// Completion runs ahead of the elapsed fraction.
    Ahead,
    /// Completion tracks the elapsed fraction.
    OnTrack,
    /// Completion lags the elapsed fraction.
    Behind,
}

impl PaceStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            PaceStatus::Met => "Met",
            PaceStatus::Ahead => "Ahead",
            PaceStatus::OnTrack => "On Track",
            PaceStatus::Behind => "Behind",
        }
    }
}

/// Progress against one product's goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGoalProgress {
    pub product: ProductCategory,
    pub goal: u32,
    pub actual: u32,
    /// Completion percentage, rounded; 0 when the goal is 0. May exceed 100.
    pub percent: u32,
    pub pace: PaceStatus,
}

/// Progress across all product goals for the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub products: Vec<ProductGoalProgress>,
    /// Unit-weighted completion across every product with a goal set.
    pub overall_percent: u32,
}

impl GoalProgress {
    /// Measures goal completion from the month-to-date totals.
    ///
    /// `elapsed_fraction` is how far into the fiscal month the reading is
    /// taken (see `FiscalMonth::elapsed_fraction`); it drives the pace
    /// classification but not the percentages.
    pub fn measure(
        goal: &MonthlyGoal,
        totals: &CurrentTotals,
        elapsed_fraction: f64,
    ) -> Self {
        let products = vec![
            product_progress(
                ProductCategory::Internet,
                goal.internet,
                totals.internet,
                elapsed_fraction,
            ),
            product_progress(
                ProductCategory::Mobile,
                goal.mobile,
                totals.mobile,
                elapsed_fraction,
            ),
            product_progress(
                ProductCategory::Voice,
                goal.voice,
                totals.voice,
                elapsed_fraction,
            ),
            product_progress(
                ProductCategory::Video,
                goal.video,
                totals.video,
                elapsed_fraction,
            ),
        ];

        let goal_units = goal.internet + goal.mobile + goal.voice + goal.video;
        let actual_units = totals.internet + totals.mobile + totals.voice + totals.video;
        let overall_percent = completion_percent(goal_units, actual_units);

        Self {
            products,
            overall_percent,
        }
    }
}

fn product_progress(
    product: ProductCategory,
    goal: u32,
    actual: u32,
    elapsed_fraction: f64,
) -> ProductGoalProgress {
    ProductGoalProgress {
        product,
        goal,
        actual,
        percent: completion_percent(goal, actual),
        pace: pace(goal, actual, elapsed_fraction),
    }
}

fn completion_percent(goal: u32, actual: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    (f64::from(actual) / f64::from(goal) * 100.0).round() as u32
}

fn pace(goal: u32, actual: u32, elapsed_fraction: f64) -> PaceStatus {
    if actual >= goal {
        return PaceStatus::Met;
    }
    let completion = f64::from(actual) / f64::from(goal);
    let elapsed = elapsed_fraction.clamp(0.0, 1.0);
    if completion > elapsed + PACE_TOLERANCE {
        PaceStatus::Ahead
    } else if completion < elapsed - PACE_TOLERANCE {
        PaceStatus::Behind
    } else {
        PaceStatus::OnTrack
    }
}
