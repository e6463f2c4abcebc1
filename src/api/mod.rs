//! HTTP API module for the payroll and forecast engine.
//!
//! This module provides the REST API endpoints for recomputing employee
//! records, aggregating monthly roster cost and projecting a forecast
//! profit-and-loss summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MonthlyCostRequest, ProjectionRequest, RecalculateRequest};
pub use response::{ApiError, EmployeeMonthlyCost, MonthlyCostResponse, RecalculateResponse};
pub use state::AppState;
