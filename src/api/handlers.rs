//! HTTP request handlers for the Leave Entitlement Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers own everything the engine does not: id generation, the current
//! date as the default reporting date, structural validation of incoming
//! JSON, and the load-modify-save cycle against the store.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::compute_leave_status;
use crate::error::EngineError;
use crate::models::LeaveRecord;
use crate::storage::Dataset;

use super::request::{EmployeeRequest, RecordRequest, StatusQuery, StatusRequest};
use super::response::{ApiError, ApiErrorResponse, ImportSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", post(status_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            put(update_employee_handler).delete(delete_employee_handler),
        )
        .route("/employees/:id/status", get(employee_status_handler))
        .route("/records", post(create_record_handler))
        .route("/records/:id", delete(delete_record_handler))
        .route("/export", get(export_handler))
        .route("/import", post(import_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to the API error envelope.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text contains the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn bad_request(error: ApiError) -> Response {
    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error(error: EngineError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /status.
///
/// Computes a leave status from the request payload alone; nothing is read
/// from or written to the store.
async fn status_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing status request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let status = compute_leave_status(&request.employee, &request.records, as_of, state.schedule());

    info!(
        correlation_id = %correlation_id,
        as_of = %as_of,
        remaining = %status.remaining,
        deficit = %status.deficit,
        "Status computed"
    );
    json_response(StatusCode::OK, status)
}

/// Handler for GET /employees/:id/status.
async fn employee_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (employee, records) = {
        let store = state.store();
        let employees = match store.load_employees() {
            Ok(employees) => employees,
            Err(err) => return engine_error(err),
        };
        let Some(employee) = employees.into_iter().find(|e| e.id == id) else {
            warn!(correlation_id = %correlation_id, employee_id = %id, "Employee not found");
            return engine_error(EngineError::EmployeeNotFound { id });
        };
        let records = match store.load_records() {
            Ok(records) => records,
            Err(err) => return engine_error(err),
        };
        (employee, records)
    };

    let records: Vec<LeaveRecord> = records
        .into_iter()
        .filter(|r| r.employee_id == employee.id)
        .collect();
    let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let status = compute_leave_status(&employee, &records, as_of, state.schedule());

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        records_count = records.len(),
        remaining = %status.remaining,
        "Status computed"
    );
    json_response(StatusCode::OK, status)
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    match state.store().load_employees() {
        Ok(employees) => json_response(StatusCode::OK, employees),
        Err(err) => engine_error(err),
    }
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let employee = request.into_employee(Uuid::new_v4().to_string());

    let store = state.store();
    let mut employees = match store.load_employees() {
        Ok(employees) => employees,
        Err(err) => return engine_error(err),
    };
    employees.push(employee.clone());
    if let Err(err) = store.save_employees(&employees) {
        return engine_error(err);
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Employee created"
    );
    json_response(StatusCode::CREATED, employee)
}

/// Handler for PUT /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let store = state.store();
    let mut employees = match store.load_employees() {
        Ok(employees) => employees,
        Err(err) => return engine_error(err),
    };
    let Some(slot) = employees.iter_mut().find(|e| e.id == id) else {
        warn!(correlation_id = %correlation_id, employee_id = %id, "Employee not found");
        return engine_error(EngineError::EmployeeNotFound { id });
    };
    let updated = request.into_employee(id.clone());
    *slot = updated.clone();
    if let Err(err) = store.save_employees(&employees) {
        return engine_error(err);
    }

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee updated");
    json_response(StatusCode::OK, updated)
}

/// Handler for DELETE /employees/:id.
///
/// Deleting an employee also drops all of their leave records.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let store = state.store();
    let mut employees = match store.load_employees() {
        Ok(employees) => employees,
        Err(err) => return engine_error(err),
    };
    if !employees.iter().any(|e| e.id == id) {
        warn!(correlation_id = %correlation_id, employee_id = %id, "Employee not found");
        return engine_error(EngineError::EmployeeNotFound { id });
    }
    employees.retain(|e| e.id != id);
    if let Err(err) = store.save_employees(&employees) {
        return engine_error(err);
    }

    let mut records = match store.load_records() {
        Ok(records) => records,
        Err(err) => return engine_error(err),
    };
    records.retain(|r| r.employee_id != id);
    if let Err(err) = store.save_records(&records) {
        return engine_error(err);
    }

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
    StatusCode::NO_CONTENT.into_response()
}

/// Handler for POST /records.
async fn create_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let store = state.store();
    let employees = match store.load_employees() {
        Ok(employees) => employees,
        Err(err) => return engine_error(err),
    };
    if !employees.iter().any(|e| e.id == request.employee_id) {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %request.employee_id,
            "Employee not found for new record"
        );
        return engine_error(EngineError::EmployeeNotFound {
            id: request.employee_id,
        });
    }

    let record = request.into_record(Uuid::new_v4().to_string());
    let mut records = match store.load_records() {
        Ok(records) => records,
        Err(err) => return engine_error(err),
    };
    records.push(record.clone());
    if let Err(err) = store.save_records(&records) {
        return engine_error(err);
    }

    info!(
        correlation_id = %correlation_id,
        record_id = %record.id,
        employee_id = %record.employee_id,
        "Record created"
    );
    json_response(StatusCode::CREATED, record)
}

/// Handler for DELETE /records/:id.
async fn delete_record_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let store = state.store();
    let mut records = match store.load_records() {
        Ok(records) => records,
        Err(err) => return engine_error(err),
    };
    if !records.iter().any(|r| r.id == id) {
        warn!(correlation_id = %correlation_id, record_id = %id, "Record not found");
        return engine_error(EngineError::RecordNotFound { id });
    }
    records.retain(|r| r.id != id);
    if let Err(err) = store.save_records(&records) {
        return engine_error(err);
    }

    info!(correlation_id = %correlation_id, record_id = %id, "Record deleted");
    StatusCode::NO_CONTENT.into_response()
}

/// Handler for GET /export.
async fn export_handler(State(state): State<AppState>) -> Response {
    match state.store().export() {
        Ok(dataset) => json_response(StatusCode::OK, dataset),
        Err(err) => engine_error(err),
    }
}

/// Handler for POST /import.
///
/// Replaces the entire store with the posted dataset. Structural
/// validation happens during JSON extraction, before anything is written.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<Dataset>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let dataset = match payload {
        Ok(Json(dataset)) => dataset,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    if let Err(err) = state.store().import(&dataset) {
        return engine_error(err);
    }

    info!(
        correlation_id = %correlation_id,
        employees = dataset.employees.len(),
        records = dataset.records.len(),
        "Dataset imported"
    );
    json_response(
        StatusCode::OK,
        ImportSummary {
            employees: dataset.employees.len(),
            records: dataset.records.len(),
        },
    )
}
