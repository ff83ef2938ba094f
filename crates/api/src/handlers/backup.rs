//! Backup download and restore.
//!
//! A backup is the plain JSON array of a fee type's records. Restoring wipes
//! that fee type and re-inserts every entry with a fresh ID; the IDs in the
//! file are never reused.

use axum::extract::State;
use axum::http::header::CONTENT_DISPOSITION;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use feeledger_core::error::CoreError;
use feeledger_core::fee_record::{CreateFeeRecord, NewFeeRecord};
use feeledger_db::repositories::FeeRecordRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::FeeTypeParams;
use crate::response::RestoreResponse;
use crate::state::AppState;

/// Download name for a backup taken on `date`, e.g. `monthly_fees_backup_2025-03-01.json`.
pub fn backup_file_name(fee_type: &str, date: NaiveDate) -> String {
    let prefix = if fee_type.is_empty() { "untagged" } else { fee_type };
    format!("{prefix}_fees_backup_{}.json", date.format("%Y-%m-%d"))
}

/// Validate every backup entry, reporting the first bad one by position.
pub fn validate_entries(entries: Vec<CreateFeeRecord>) -> Result<Vec<NewFeeRecord>, CoreError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            entry.validate_new().map_err(|CoreError::Validation(msg)| {
                CoreError::Validation(format!("backup entry {i}: {msg}"))
            })
        })
        .collect()
}

/// GET /api/backup?feeType=
pub async fn download_backup(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FeeTypeParams>,
) -> AppResult<impl IntoResponse> {
    let records = FeeRecordRepo::list_by_type(&state.pool, &params.fee_type).await?;
    let file_name = backup_file_name(&params.fee_type, Utc::now().date_naive());

    tracing::info!(
        fee_type = %params.fee_type,
        count = records.len(),
        "Backup downloaded",
    );

    let disposition = format!("attachment; filename=\"{file_name}\"");
    Ok(([(CONTENT_DISPOSITION, disposition)], Json(records)))
}

/// POST /api/restoreStudents?feeType=
///
/// Body: a JSON array of records as produced by the backup endpoint. The
/// whole file is validated before anything is deleted.
pub async fn restore_backup(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FeeTypeParams>,
    AppJson(entries): AppJson<Vec<CreateFeeRecord>>,
) -> AppResult<Json<RestoreResponse>> {
    let records = validate_entries(entries)?;

    let removed = FeeRecordRepo::delete_by_type(&state.pool, &params.fee_type).await?;
    let created = FeeRecordRepo::import(&state.pool, &params.fee_type, &records).await?;

    tracing::info!(
        fee_type = %params.fee_type,
        removed,
        restored = created.len(),
        "Backup restored",
    );

    Ok(Json(RestoreResponse {
        message: "Restored successfully",
        restored: created.len(),
    }))
}
