//! HTTP request handlers for the timesheet engine API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_timesheet, get_break_entitlements};
use crate::config::{CompanySettings, validate_paid_rest_minutes};
use crate::error::EngineResult;
use crate::models::Shift;

use super::request::{EntitlementRequest, TimesheetRequest};
use super::response::{ApiError, ApiErrorResponse, EntitlementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", post(timesheet_handler))
        .route("/entitlements", post(entitlements_handler))
        .with_state(state)
}

/// Handler for POST /timesheet.
///
/// Builds a weekly timesheet from the posted shifts. Open shifts are
/// measured against the current time.
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match prepare_timesheet(&state, request) {
        Ok((employee_id, shifts, settings)) => {
            let now = Utc::now();
            match build_timesheet(&employee_id, &shifts, &settings, now) {
                Ok(report) => {
                    info!(
                        correlation_id = %correlation_id,
                        employee_id = %report.employee_id,
                        shifts_count = report.shifts.len(),
                        weeks_count = report.weeks.len(),
                        worked_minutes = %report.totals.worked_minutes,
                        warnings_count = report.warnings.len(),
                        duration_us = start_time.elapsed().as_micros(),
                        "Timesheet built successfully"
                    );
                    json_response(StatusCode::OK, report)
                }
                Err(err) => engine_error_response(err.into(), correlation_id),
            }
        }
        Err(err) => engine_error_response(err.into(), correlation_id),
    }
}

/// Handler for POST /entitlements.
///
/// Returns the statutory break entitlement for a number of hours.
async fn entitlements_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let paid_rest_minutes = match request.paid_rest_minutes {
        Some(minutes) => match validate_paid_rest_minutes(minutes) {
            Ok(minutes) => minutes,
            Err(err) => return engine_error_response(err.into(), correlation_id),
        },
        None => state.settings().paid_rest_minutes(),
    };

    let entitlement = get_break_entitlements(request.hours_worked, paid_rest_minutes);
    info!(
        correlation_id = %correlation_id,
        hours_worked = %request.hours_worked,
        paid_minutes = entitlement.paid_minutes,
        unpaid_minutes = entitlement.unpaid_minutes,
        "Entitlement calculated"
    );

    json_response(
        StatusCode::OK,
        EntitlementResponse {
            hours_worked: request.hours_worked,
            paid_rest_minutes,
            entitlement,
        },
    )
}

/// Resolves settings, then converts request shifts to domain shifts in the
/// company's time zone.
fn prepare_timesheet(
    state: &AppState,
    request: TimesheetRequest,
) -> EngineResult<(String, Vec<Shift>, CompanySettings)> {
    let settings = match request.settings {
        Some(file) => CompanySettings::try_from(file)?,
        None => state.settings().clone(),
    };

    let shifts = request
        .shifts
        .into_iter()
        .map(|shift| shift.into_shift(settings.timezone()))
        .collect::<EngineResult<Vec<_>>>()?;

    Ok((request.employee_id, shifts, settings))
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(api_error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        error = %api_error.error.message,
        "Request failed"
    );
    api_error.into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
