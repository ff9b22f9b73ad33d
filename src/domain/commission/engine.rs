//! Commission estimation and next-tier projection.
//!
//! Every entry point is a total, side-effect-free function over value
//! arguments: the active tier is recomputed from the internet count on
//! every call and no state survives between calls.

use serde::Serialize;

use super::{CurrentTotals, OrderProducts, RateSchedule, RateTier};

/// Internet count assumed when a caller does not supply one.
pub const DEFAULT_INTERNET_COUNT: u32 = 10;

/// Pure calculator over an immutable rate schedule.
#[derive(Debug, Clone, Default)]
pub struct CommissionEngine {
    schedule: RateSchedule,
}

/// What crossing into the next tier is worth, at minimum effort.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTierProjection {
    /// Bounds label of the next tier ("10-19").
    pub next_tier_label: String,
    /// Internet units needed to cross the boundary.
    pub internet_needed: u32,
    /// Month-to-date commission re-derived at current rates.
    pub current_total: i64,
    /// Commission if the rep sells exactly `internet_needed` more units.
    pub projected_total: i64,
    /// `projected_total - current_total`.
    pub increase: i64,
    /// Increase as a percentage of the current total (0 when current is 0).
    pub percent_increase: i64,
    /// Per-product decomposition of the rate uplift.
    pub breakdown: IncreaseBreakdown,
}

/// Rate-uplift contribution by product: `count * (next_rate - current_rate)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseBreakdown {
    pub internet: i64,
    pub mobile: i64,
    pub voice: i64,
    pub video: i64,
    pub mrr: i64,
}

impl CommissionEngine {
    /// Creates an engine over the given schedule.
    pub fn new(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule this engine computes against.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Estimates the commission one order contributes, in whole currency
    /// units, given the rep's current monthly internet count.
    ///
    /// Internet pays at the tier rate unconditionally. Every other product
    /// (mobile, voice, video, MRR, and the a-la-carte lines) pays only when
    /// the count clears the eligibility threshold.
    ///
    /// `current_internet_count` defaults to [`DEFAULT_INTERNET_COUNT`].
    pub fn estimate_order_commission(
        &self,
        order: &OrderProducts,
        current_internet_count: Option<u32>,
    ) -> i64 {
        let count = current_internet_count.unwrap_or(DEFAULT_INTERNET_COUNT);
        let rates = self.schedule.tier_for(count);
        let alacarte_eligible = self.schedule.alacarte_eligible(count);

        let mut total = 0.0;
        if order.has_internet {
            total += rates.internet;
        }
        if alacarte_eligible {
            total += f64::from(order.has_mobile) * rates.mobile;
            total += f64::from(order.has_voice) * rates.voice;
            if order.has_tv {
                total += rates.video;
            }
            total += order.monthly_total * rates.mrr;

            let alacarte = self.schedule.alacarte();
            if order.has_wib {
                total += alacarte.wib;
            }
            if order.has_gig {
                total += alacarte.gig_internet;
            }
            total += f64::from(order.has_sbc) * alacarte.sbc;
        }

        round_currency(total)
    }

    /// Projects the financial impact of reaching the next tier.
    ///
    /// Returns `None` when the count already sits in the terminal tier.
    /// The count parameter, not `totals.internet`, is authoritative for
    /// tier position. The MRR dollar base is recovered by un-rating the
    /// stored payout at the current tier's rate (a stored value rated at 0
    /// is taken as already raw); if the snapshot was aggregated across a
    /// tier change this recovery is inexact.
    pub fn next_tier_info(
        &self,
        current_internet_count: u32,
        totals: &CurrentTotals,
    ) -> Option<NextTierProjection> {
        let index = self.schedule.tier_index(current_internet_count);
        let next = self.schedule.tiers().get(index + 1)?;
        let current = &self.schedule.tiers()[index];

        let internet_needed = next.min.saturating_sub(current_internet_count);
        let raw_mrr = if current.mrr > 0.0 {
            totals.mrr / current.mrr
        } else {
            totals.mrr
        };

        let current_total = rate_totals(totals, current, f64::from(totals.internet))
            + raw_mrr * current.mrr
            + totals.alacarte;

        let projected_internet = f64::from(totals.internet) + f64::from(internet_needed);
        let mut projected_total =
            rate_totals(totals, next, projected_internet) + raw_mrr * next.mrr;
        if self.schedule.alacarte_eligible(next.min) {
            projected_total += totals.alacarte;
        }

        let increase = projected_total - current_total;
        let percent_increase = if current_total == 0.0 {
            0.0
        } else {
            increase / current_total * 100.0
        };

        Some(NextTierProjection {
            next_tier_label: next.bounds_label(),
            internet_needed,
            current_total: round_currency(current_total),
            projected_total: round_currency(projected_total),
            increase: round_currency(increase),
            percent_increase: round_currency(percent_increase),
            breakdown: IncreaseBreakdown {
                internet: round_currency(
                    f64::from(totals.internet) * (next.internet - current.internet),
                ),
                mobile: round_currency(
                    f64::from(totals.mobile) * (next.mobile - current.mobile),
                ),
                voice: round_currency(f64::from(totals.voice) * (next.voice - current.voice)),
                video: round_currency(f64::from(totals.video) * (next.video - current.video)),
                mrr: round_currency(raw_mrr * (next.mrr - current.mrr)),
            },
        })
    }
}

/// Unit payouts for the four tiered products at one tier's rates, with the
/// internet count supplied separately so projections can inflate it.
fn rate_totals(totals: &CurrentTotals, tier: &RateTier, internet_count: f64) -> f64 {
    internet_count * tier.internet
        + f64::from(totals.mobile) * tier.mobile
        + f64::from(totals.voice) * tier.voice
        + f64::from(totals.video) * tier.video
}

fn round_currency(amount: f64) -> i64 {
    amount.round() as i64
}
