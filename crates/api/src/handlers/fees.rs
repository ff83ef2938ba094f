//! Handlers for the fee record CRUD endpoints.
//!
//! Update and delete acknowledge success whether or not a row matched the
//! ID; the dashboard treats both as done. Misses are logged.

use axum::extract::State;
use axum::Json;
use feeledger_core::fee_record::{CreateFeeRecord, UpdateFeeRecord};
use feeledger_core::types::DbId;
use feeledger_db::models::fee_record::FeeRecord;
use feeledger_db::repositories::FeeRecordRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::FeeTypeParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Body of `PUT /api/updateStudent`: the target ID plus the fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub id: DbId,
    #[serde(flatten)]
    pub fields: UpdateFeeRecord,
}

/// GET /api/getStudents?feeType=
pub async fn get_students(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FeeTypeParams>,
) -> AppResult<Json<Vec<FeeRecord>>> {
    let records = FeeRecordRepo::list_by_type(&state.pool, &params.fee_type).await?;
    Ok(Json(records))
}

/// POST /api/addStudent
///
/// Returns the stored record including its new `id`.
pub async fn add_student(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFeeRecord>,
) -> AppResult<Json<FeeRecord>> {
    let input = input.validate_new()?;
    let record = FeeRecordRepo::create(&state.pool, &input).await?;

    tracing::info!(
        record_id = record.id,
        fee_type = %record.fee_type,
        student_no = %record.student_no,
        payment = %record.payment,
        "Fee record created",
    );

    Ok(Json(record))
}

/// PUT /api/updateStudent
pub async fn update_student(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateStudentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let fields = input.fields.validate_update()?;
    let matched = FeeRecordRepo::update(&state.pool, input.id, &fields).await?;

    if matched {
        tracing::info!(record_id = input.id, "Fee record updated");
    } else {
        tracing::warn!(record_id = input.id, "Update matched no fee record");
    }

    Ok(Json(MessageResponse::UPDATED))
}

/// DELETE /api/student/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = FeeRecordRepo::delete_by_id(&state.pool, id).await?;

    if deleted {
        tracing::info!(record_id = id, "Fee record deleted");
    } else {
        tracing::warn!(record_id = id, "Delete matched no fee record");
    }

    Ok(Json(MessageResponse::DELETED))
}

/// DELETE /api/resetStudents?feeType=
///
/// Irreversibly removes every record of the fee type.
pub async fn reset_students(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FeeTypeParams>,
) -> AppResult<Json<MessageResponse>> {
    let removed = FeeRecordRepo::delete_by_type(&state.pool, &params.fee_type).await?;

    tracing::info!(fee_type = %params.fee_type, removed, "Fee records reset");

    Ok(Json(MessageResponse::RESET))
}
