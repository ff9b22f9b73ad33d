//! Tax domain - flat withholding-rate lookup for commission estimates.

pub mod rates;

pub use rates::{TaxTable, FEDERAL_SUPPLEMENTAL_RATE};
