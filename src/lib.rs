//! Payroll and forecast calculation engine.
//!
//! This crate provides the calculation layer of a business-planning tool:
//! converting employee compensation inputs into per-period pay, superannuation,
//! PAYG withholding and monthly cost, and projecting a profit-and-loss summary
//! from revenue/profit targets, a cost baseline, a team roster and planned
//! investments. Australian payroll conventions (superannuation guarantee,
//! resident PAYG scale, July-June financial year) apply throughout.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
