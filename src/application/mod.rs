//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are the aggregation boundary: they fetch one breakdown per
//! query and derive every engine input from it, so the count and totals
//! the engine sees always describe the same snapshot.

pub mod handlers;

pub use handlers::{
    CommissionOutlook, EstimateOrderCommissionHandler, EstimateOrderCommissionQuery,
    GetCommissionOutlookHandler, GetCommissionOutlookQuery, OrderCommissionEstimate,
};
