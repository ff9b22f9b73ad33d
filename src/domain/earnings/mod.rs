//! Earnings domain - monthly breakdown rows and their reduction into
//! the inputs the commission engine consumes.

pub mod breakdown;

pub use breakdown::{
    internet_count, month_to_date_payout, reduce_totals, ProductBreakdown,
};
