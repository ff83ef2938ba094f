//! Read-only aggregations for the dashboard and the export summary.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use feeledger_core::fee_record::FeeType;
use feeledger_core::stats::{self, DashboardStats, StudentTotal};
use feeledger_db::repositories::FeeRecordRepo;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::FeeTypeParams;
use crate::state::AppState;

/// GET /api/stats
///
/// Student count, per-type collections and month-over-month growth of
/// monthly fees, as of now.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let monthly = FeeRecordRepo::list_by_type(&state.pool, FeeType::Monthly.as_str()).await?;
    let yearly = FeeRecordRepo::list_by_type(&state.pool, FeeType::Yearly.as_str()).await?;

    Ok(Json(stats::dashboard_stats(&monthly, &yearly, Utc::now())))
}

/// GET /api/studentTotals?feeType=
pub async fn get_student_totals(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FeeTypeParams>,
) -> AppResult<Json<Vec<StudentTotal>>> {
    let records = FeeRecordRepo::list_by_type(&state.pool, &params.fee_type).await?;
    Ok(Json(stats::student_totals(&records)))
}
