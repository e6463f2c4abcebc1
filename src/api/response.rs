//! Response types for the payroll and forecast engine API.
//!
//! This module defines the success payloads, the error response structures
//! and the error-to-status mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{EmployeeCompensation, MonthKey};

/// Response body for `POST /payroll/recalculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculateResponse {
    /// The employee record with re-derived fields.
    pub employee: EmployeeCompensation,
}

/// One employee's share of a monthly roster cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeMonthlyCost {
    /// The employee's name.
    pub name: String,
    /// The employee's cost for the month (zero when not active).
    pub cost: Decimal,
}

/// Response body for `POST /payroll/monthly-cost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCostResponse {
    /// The month that was costed.
    pub month: MonthKey,
    /// Per-employee monthly costs, in roster order.
    pub per_employee: Vec<EmployeeMonthlyCost>,
    /// The aggregate monthly cost of the roster.
    pub total: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TaxScheduleNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TAX_SCHEDULE_NOT_FOUND",
                    format!("No tax schedule in effect on date {}", date),
                    "The configured tax schedules all take effect after the requested date",
                ),
            },
            EngineError::InvalidSettings { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SETTINGS",
                    format!("Invalid payroll settings field '{}': {}", field, message),
                    "The payroll settings contain invalid information",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
