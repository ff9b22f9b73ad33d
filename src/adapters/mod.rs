//! Adapters - Implementations of ports.
//!
//! Only in-process adapters live here; the production earnings adapter is
//! owned by the service that fronts the aggregation API.

pub mod earnings;
