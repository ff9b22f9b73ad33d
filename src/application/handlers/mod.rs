//! Query handlers.

pub mod commission;

pub use commission::{
    CommissionOutlook, EstimateOrderCommissionHandler, EstimateOrderCommissionQuery,
    GetCommissionOutlookHandler, GetCommissionOutlookQuery, OrderCommissionEstimate,
};
