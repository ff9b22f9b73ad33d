//! Commission query handlers.

mod estimate_order;
mod get_commission_outlook;

pub use estimate_order::{
    EstimateOrderCommissionHandler, EstimateOrderCommissionQuery, OrderCommissionEstimate,
};
pub use get_commission_outlook::{
    CommissionOutlook, GetCommissionOutlookHandler, GetCommissionOutlookQuery,
};
