//! Product categories reported by the earnings aggregation service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category appearing in monthly breakdown-by-product data.
///
/// The four tiered products (Internet, Mobile, Voice, Video) count toward
/// the rep's tier position and are paid at tier rates. WIB, Gig Internet,
/// and SBC are a-la-carte products with flat rates. MRR is the recurring
/// revenue line item carried alongside the unit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Internet,
    Mobile,
    Voice,
    Video,
    #[serde(rename = "WIB")]
    Wib,
    #[serde(rename = "Gig Internet")]
    GigInternet,
    #[serde(rename = "SBC")]
    Sbc,
    #[serde(rename = "MRR")]
    Mrr,
}

impl ProductCategory {
    /// Returns the display name for this category.
    ///
    /// Matches the product names used on the earnings API wire.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Internet => "Internet",
            ProductCategory::Mobile => "Mobile",
            ProductCategory::Voice => "Voice",
            ProductCategory::Video => "Video",
            ProductCategory::Wib => "WIB",
            ProductCategory::GigInternet => "Gig Internet",
            ProductCategory::Sbc => "SBC",
            ProductCategory::Mrr => "MRR",
        }
    }

    /// Returns true if units of this category are paid at tier rates.
    pub fn is_tiered(&self) -> bool {
        matches!(
            self,
            ProductCategory::Internet
                | ProductCategory::Mobile
                | ProductCategory::Voice
                | ProductCategory::Video
        )
    }

    /// Returns true if this category is paid at flat a-la-carte rates.
    pub fn is_alacarte(&self) -> bool {
        matches!(
            self,
            ProductCategory::Wib | ProductCategory::GigInternet | ProductCategory::Sbc
        )
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiered_products_are_the_four_psu_lines() {
        assert!(ProductCategory::Internet.is_tiered());
        assert!(ProductCategory::Mobile.is_tiered());
        assert!(ProductCategory::Voice.is_tiered());
        assert!(ProductCategory::Video.is_tiered());
        assert!(!ProductCategory::Wib.is_tiered());
        assert!(!ProductCategory::Mrr.is_tiered());
    }

    #[test]
    fn alacarte_products_are_wib_gig_sbc() {
        assert!(ProductCategory::Wib.is_alacarte());
        assert!(ProductCategory::GigInternet.is_alacarte());
        assert!(ProductCategory::Sbc.is_alacarte());
        assert!(!ProductCategory::Internet.is_alacarte());
        assert!(!ProductCategory::Mrr.is_alacarte());
    }

    #[test]
    fn serializes_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProductCategory::Internet).unwrap(),
            "\"Internet\""
        );
        assert_eq!(
            serde_json::to_string(&ProductCategory::Wib).unwrap(),
            "\"WIB\""
        );
        assert_eq!(
            serde_json::to_string(&ProductCategory::GigInternet).unwrap(),
            "\"Gig Internet\""
        );
    }

    #[test]
    fn deserializes_from_wire_names() {
        let product: ProductCategory = serde_json::from_str("\"MRR\"").unwrap();
        assert_eq!(product, ProductCategory::Mrr);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(format!("{}", ProductCategory::Sbc), "SBC");
    }
}
