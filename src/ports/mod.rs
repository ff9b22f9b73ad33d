//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EarningsReader` - monthly breakdown-by-product data from the
//!   earnings aggregation service

mod earnings_reader;

pub use earnings_reader::{EarningsError, EarningsReader};
