//! HTTP request handlers for the payroll and forecast engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{employee_monthly_cost, project, recalculate_employee};
use crate::error::{EngineError, EngineResult};
use crate::models::PayrollSettings;

use super::request::{MonthlyCostRequest, ProjectionRequest, RecalculateRequest};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeMonthlyCost, MonthlyCostResponse, RecalculateResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/recalculate", post(recalculate_handler))
        .route("/payroll/monthly-cost", post(monthly_cost_handler))
        .route("/forecast/project", post(projection_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error to an API error response.
fn engine_error_response(error: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Validates the shared payroll settings of a request.
fn validate_settings(settings: &PayrollSettings) -> EngineResult<()> {
    if settings.super_rate < Decimal::ZERO {
        return Err(EngineError::InvalidSettings {
            field: "super_rate".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}

/// Handler for POST /payroll/recalculate.
///
/// Re-derives an employee record's downstream fields after a basis-field
/// edit, treating the edited field as the source of truth.
async fn recalculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recalculate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_settings(&request.settings) {
        return engine_error_response(err, correlation_id);
    }

    let effective_date = request
        .effective_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let schedule = match state.config().schedule_for(effective_date) {
        Ok(schedule) => schedule,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let start_time = Instant::now();
    let mut employee = request.employee;
    recalculate_employee(
        &mut employee,
        &request.settings,
        schedule,
        request.changed_field,
    );

    info!(
        correlation_id = %correlation_id,
        employee = %employee.name,
        changed_field = ?request.changed_field,
        monthly_cost = %employee.monthly_cost,
        duration_us = start_time.elapsed().as_micros(),
        "Recalculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(RecalculateResponse { employee }),
    )
        .into_response()
}

/// Handler for POST /payroll/monthly-cost.
///
/// Aggregates the monthly cost of a roster for one month, prorating each
/// employee by their employment window.
async fn monthly_cost_handler(
    State(_state): State<AppState>,
    payload: Result<Json<MonthlyCostRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly-cost request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_settings(&request.settings) {
        return engine_error_response(err, correlation_id);
    }

    let per_employee: Vec<EmployeeMonthlyCost> = request
        .employees
        .iter()
        .map(|employee| EmployeeMonthlyCost {
            name: employee.name.clone(),
            cost: employee_monthly_cost(employee, request.month, &request.settings),
        })
        .collect();
    let total: Decimal = per_employee.iter().map(|e| e.cost).sum();

    info!(
        correlation_id = %correlation_id,
        employees = per_employee.len(),
        total = %total,
        "Monthly cost aggregated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(MonthlyCostResponse {
            month: request.month,
            per_employee,
            total,
        }),
    )
        .into_response()
}

/// Handler for POST /forecast/project.
///
/// Produces the projected income statement and budget tracking figures for
/// the forecast year.
async fn projection_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if request.assumptions.super_rate < Decimal::ZERO {
        let err = EngineError::InvalidSettings {
            field: "super_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        return engine_error_response(err, correlation_id);
    }

    let start_time = Instant::now();
    let projection = project(
        &request.targets,
        &request.baseline,
        &request.members,
        &request.planned_hires,
        &request.assumptions,
        &request.investments,
    );

    info!(
        correlation_id = %correlation_id,
        projected_profit = %projection.projected_profit,
        is_on_track = projection.is_on_track,
        duration_us = start_time.elapsed().as_micros(),
        "Projection completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(projection),
    )
        .into_response()
}
