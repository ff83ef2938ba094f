use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// ```text
/// GET /stats           -> get_stats
/// GET /studentTotals   -> get_student_totals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(reports::get_stats))
        .route("/studentTotals", get(reports::get_student_totals))
}
