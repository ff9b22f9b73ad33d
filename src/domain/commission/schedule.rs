//! Commission rate schedule - the tier table and a-la-carte rates.
//!
//! A schedule is an immutable configuration value injected into the engine.
//! Tiers are contiguous and exhaustive over `[0, inf)`: every non-negative
//! internet count maps to exactly one tier, and rates never decrease from
//! one tier to the next.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Internet count a rep must exceed before non-internet payouts unlock.
pub const DEFAULT_ALACARTE_THRESHOLD: u32 = 4;

/// Commission rates for a contiguous range of monthly internet-sale counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// Display label ("5-9", "40+").
    pub label: String,
    /// Inclusive lower bound on the monthly internet count.
    pub min: u32,
    /// Inclusive upper bound. `None` marks the unbounded terminal tier.
    pub max: Option<u32>,
    /// Flat amount paid per internet unit.
    pub internet: f64,
    /// Flat amount paid per mobile line.
    pub mobile: f64,
    /// Flat amount paid per voice line.
    pub voice: f64,
    /// Flat amount paid per video/TV subscription.
    pub video: f64,
    /// Fractional rate (0.0-1.0) applied to MRR dollars.
    pub mrr: f64,
}

impl RateTier {
    /// Checks whether an internet count falls within this tier's range.
    pub fn contains(&self, internet_count: u32) -> bool {
        internet_count >= self.min
            && self.max.map(|max| internet_count <= max).unwrap_or(true)
    }

    /// Formats the tier bounds as `"min-max"`, or `"min+"` when unbounded.
    pub fn bounds_label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }
}

/// Flat rates for ancillary products that do not vary by tier.
///
/// Payable only once the rep's internet count exceeds the schedule's
/// eligibility threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlaCarteRates {
    /// Flat amount per wireless internet backup attachment.
    pub wib: f64,
    /// Flat bonus for a gig-speed internet upgrade.
    pub gig_internet: f64,
    /// Amount per SBC seat.
    pub sbc: f64,
}

/// Raw deserialization shape for a schedule document.
#[derive(Debug, Clone, Deserialize)]
struct RawSchedule {
    tiers: Vec<RateTier>,
    alacarte: AlaCarteRates,
    #[serde(default = "default_alacarte_threshold")]
    alacarte_threshold: u32,
}

fn default_alacarte_threshold() -> u32 {
    DEFAULT_ALACARTE_THRESHOLD
}

/// The full commission rate configuration.
///
/// Construction always validates, so a `RateSchedule` in hand has a
/// non-empty, contiguous, rate-monotonic tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct RateSchedule {
    tiers: Vec<RateTier>,
    alacarte: AlaCarteRates,
    alacarte_threshold: u32,
}

static STANDARD: Lazy<RateSchedule> = Lazy::new(|| RateSchedule {
    tiers: vec![
        tier("0-4", 0, Some(4), 0.0, 0.0, 0.0, 0.0, 0.0),
        tier("5-9", 5, Some(9), 100.0, 75.0, 50.0, 50.0, 0.25),
        tier("10-19", 10, Some(19), 200.0, 150.0, 100.0, 100.0, 0.50),
        tier("20-29", 20, Some(29), 300.0, 225.0, 150.0, 150.0, 0.75),
        tier("30-39", 30, Some(39), 400.0, 300.0, 200.0, 200.0, 0.90),
        tier("40+", 40, None, 500.0, 375.0, 250.0, 250.0, 1.00),
    ],
    alacarte: AlaCarteRates {
        wib: 100.0,
        gig_internet: 50.0,
        sbc: 25.0,
    },
    alacarte_threshold: DEFAULT_ALACARTE_THRESHOLD,
});

#[allow(clippy::too_many_arguments)]
fn tier(
    label: &str,
    min: u32,
    max: Option<u32>,
    internet: f64,
    mobile: f64,
    voice: f64,
    video: f64,
    mrr: f64,
) -> RateTier {
    RateTier {
        label: label.to_string(),
        min,
        max,
        internet,
        mobile,
        voice,
        video,
        mrr,
    }
}

impl RateSchedule {
    /// Builds a schedule, validating the tier table.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the tiers are empty, do not start at 0,
    /// leave gaps or overlaps, end in a bounded tier, carry negative or
    /// out-of-range rates, or decrease from one tier to the next.
    pub fn new(
        tiers: Vec<RateTier>,
        alacarte: AlaCarteRates,
        alacarte_threshold: u32,
    ) -> Result<Self, ValidationError> {
        validate_tiers(&tiers)?;
        Ok(Self {
            tiers,
            alacarte,
            alacarte_threshold,
        })
    }

    /// Returns the builtin schedule used in production.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// The ordered tier table.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Flat rates for a-la-carte products.
    pub fn alacarte(&self) -> AlaCarteRates {
        self.alacarte
    }

    /// The internet count a rep must exceed for non-internet payouts.
    pub fn alacarte_threshold(&self) -> u32 {
        self.alacarte_threshold
    }

    /// Checks the gating rule: non-internet products pay out only above
    /// the eligibility threshold.
    pub fn alacarte_eligible(&self, internet_count: u32) -> bool {
        internet_count > self.alacarte_threshold
    }

    /// Position of the tier containing the given internet count.
    ///
    /// Falls back to the lowest tier if no tier matches; with a validated
    /// schedule the scan always matches.
    pub fn tier_index(&self, internet_count: u32) -> usize {
        self.tiers
            .iter()
            .position(|t| t.contains(internet_count))
            .unwrap_or(0)
    }

    /// The rate tier active at the given internet count.
    pub fn tier_for(&self, internet_count: u32) -> &RateTier {
        // new() guarantees a non-empty tier list.
        &self.tiers[self.tier_index(internet_count)]
    }

    /// Formats the active tier's bounds ("5-9", "40+").
    pub fn tier_label(&self, internet_count: u32) -> String {
        self.tier_for(internet_count).bounds_label()
    }

    /// True when the count sits in the unbounded terminal tier.
    pub fn is_top_tier(&self, internet_count: u32) -> bool {
        self.tier_index(internet_count) == self.tiers.len() - 1
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<RawSchedule> for RateSchedule {
    type Error = ValidationError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        Self::new(raw.tiers, raw.alacarte, raw.alacarte_threshold)
    }
}

fn validate_tiers(tiers: &[RateTier]) -> Result<(), ValidationError> {
    if tiers.is_empty() {
        return Err(ValidationError::empty_field("tiers"));
    }

    if tiers[0].min != 0 {
        return Err(ValidationError::invalid_format(
            "tiers",
            "first tier must start at 0",
        ));
    }

    for (i, t) in tiers.iter().enumerate() {
        if !(0.0..=1.0).contains(&t.mrr) {
            return Err(ValidationError::out_of_range("mrr", 0.0, 1.0, t.mrr));
        }
        for (name, rate) in [
            ("internet", t.internet),
            ("mobile", t.mobile),
            ("voice", t.voice),
            ("video", t.video),
        ] {
            if rate < 0.0 {
                return Err(ValidationError::out_of_range(name, 0.0, f64::MAX, rate));
            }
        }

        let is_last = i == tiers.len() - 1;
        match (t.max, is_last) {
            (Some(max), false) => {
                if max < t.min {
                    return Err(ValidationError::invalid_format(
                        "tiers",
                        format!("tier '{}' has max below min", t.label),
                    ));
                }
                if tiers[i + 1].min != max + 1 {
                    return Err(ValidationError::invalid_format(
                        "tiers",
                        format!("gap or overlap after tier '{}'", t.label),
                    ));
                }
            }
            (None, false) => {
                return Err(ValidationError::invalid_format(
                    "tiers",
                    format!("unbounded tier '{}' is not last", t.label),
                ));
            }
            (Some(_), true) => {
                return Err(ValidationError::invalid_format(
                    "tiers",
                    "final tier must be unbounded",
                ));
            }
            (None, true) => {}
        }

        if i > 0 {
            let prev = &tiers[i - 1];
            let monotonic = t.internet >= prev.internet
                && t.mobile >= prev.mobile
                && t.voice >= prev.voice
                && t.video >= prev.video
                && t.mrr >= prev.mrr;
            if !monotonic {
                return Err(ValidationError::invalid_format(
                    "tiers",
                    format!("rates decrease entering tier '{}'", t.label),
                ));
            }
        }
    }

    Ok(())
}
