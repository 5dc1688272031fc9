//! Handlers for the `/customers` resource.
//!
//! Write handlers take the raw submitted record and run it through the
//! customer rule set before anything reaches the database.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crm_core::customer::{check_customer, validate_customer, CustomerInput};
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_core::validation::rules::FieldErrors;
use crm_db::models::customer::{Customer, CustomerListParams};
use crm_db::repositories::CustomerRepo;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, RecordBody};
use crate::middleware::access::CustomerWriter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a dry-run validation.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: FieldErrors,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Customer",
        id,
    })
}

fn accept(record: &Map<String, Value>) -> AppResult<CustomerInput> {
    validate_customer(record).map_err(|errors| {
        tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Customer rejected");
        AppError::Core(CoreError::InvalidFields(errors))
    })
}

/// GET /api/v1/customers
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CustomerListParams>,
) -> AppResult<Json<DataResponse<Vec<Customer>>>> {
    let customers = CustomerRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: customers }))
}

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    writer: CustomerWriter,
    RecordBody(record): RecordBody,
) -> AppResult<(StatusCode, Json<DataResponse<Customer>>)> {
    let input = accept(&record)?;
    let customer = CustomerRepo::create(&state.pool, &input).await?;

    tracing::info!(customer_id = customer.id, "Customer created");
    writer
        .notify(&state, "Customer created successfully.")
        .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: customer })))
}

/// POST /api/v1/customers/validate
///
/// Runs the rule set without persisting. Always 200; the report says
/// whether the record would be accepted.
pub async fn validate(
    _writer: CustomerWriter,
    RecordBody(record): RecordBody,
) -> Json<DataResponse<ValidationReport>> {
    let result = check_customer(&record);
    Json(DataResponse {
        data: ValidationReport {
            valid: result.is_valid,
            errors: result.field_errors(),
        },
    })
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: customer }))
}

/// PUT /api/v1/customers/{id}
///
/// Full replacement: the body must satisfy the same rules as a create.
pub async fn update(
    State(state): State<AppState>,
    writer: CustomerWriter,
    ApiPath(id): ApiPath<DbId>,
    RecordBody(record): RecordBody,
) -> AppResult<Json<DataResponse<Customer>>> {
    let input = accept(&record)?;
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(customer_id = id, "Customer updated");
    writer
        .notify(&state, "Customer updated successfully.")
        .await;

    Ok(Json(DataResponse { data: customer }))
}

/// DELETE /api/v1/customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    writer: CustomerWriter,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !CustomerRepo::soft_delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(customer_id = id, "Customer deleted");
    writer
        .notify(&state, "Customer deleted successfully.")
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/customers/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    writer: CustomerWriter,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::restore(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(customer_id = id, "Customer restored");
    writer
        .notify(&state, "Customer restored successfully.")
        .await;

    Ok(Json(DataResponse { data: customer }))
}
