use axum::routing::{get, post};
use axum::Router;

use crate::handlers::backup;
use crate::state::AppState;

/// ```text
/// GET  /backup            -> download_backup
/// POST /restoreStudents   -> restore_backup
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/backup", get(backup::download_backup))
        .route("/restoreStudents", post(backup::restore_backup))
}
