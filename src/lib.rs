//! SalesDash - Commission tiering and earnings projection core.
//!
//! This crate implements the domain behind the SalesDash rep dashboard:
//! commission tier resolution, per-order payout estimates, next-tier
//! projections, fiscal-month accounting periods, sales-goal tracking,
//! and withholding estimates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
