//! Order product flags - the engine's view of a sales order.
//!
//! Orders are owned by the order-management backend; the engine only sees
//! a normalized, fully-populated record. Normalization is the single place
//! where loosely-typed order payloads are coerced, so everything downstream
//! can assume clean numeric input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product attributes of one order, normalized for commission math.
///
/// `Default` is the empty order: no products, zero MRR.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderProducts {
    /// Internet service on the order.
    pub has_internet: bool,
    /// Mobile line count.
    pub has_mobile: u32,
    /// Voice line count.
    pub has_voice: u32,
    /// Video/TV subscription on the order.
    pub has_tv: bool,
    /// Wireless internet backup attachment.
    pub has_wib: bool,
    /// Gig-speed internet upgrade.
    pub has_gig: bool,
    /// SBC seat count.
    pub has_sbc: u32,
    /// MRR dollars attached to the order.
    pub monthly_total: f64,
}

impl OrderProducts {
    /// Normalizes an arbitrary order payload into a fully-populated record.
    ///
    /// Missing, null, or non-numeric fields become zero/false; booleans and
    /// numbers coerce by truthiness; negative or non-finite amounts clamp to
    /// zero. Never fails.
    pub fn from_value(value: &Value) -> Self {
        Self {
            has_internet: flag(value, "has_internet"),
            has_mobile: count(value, "has_mobile"),
            has_voice: count(value, "has_voice"),
            has_tv: flag(value, "has_tv"),
            has_wib: flag(value, "has_wib"),
            has_gig: flag(value, "has_gig"),
            has_sbc: count(value, "has_sbc"),
            monthly_total: amount(value, "monthly_total"),
        }
    }

    /// True when the order carries no commissionable products at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn flag(value: &Value, field: &str) -> bool {
    match value.get(field) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    }
}

fn count(value: &Value, field: &str) -> u32 {
    let n = match value.get(field) {
        Some(Value::Bool(true)) => 1.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() && n > 0.0 {
        n as u32
    } else {
        0
    }
}

fn amount(value: &Value, field: &str) -> f64 {
    let n = match value.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}
