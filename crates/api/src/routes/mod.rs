pub mod backup;
pub mod fees;
pub mod health;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /getStudents?feeType=        list records of a fee type (GET)
/// /addStudent                  create a record (POST)
/// /updateStudent               partial update by body id (PUT)
/// /student/{id}                delete one record (DELETE)
/// /resetStudents?feeType=      delete all records of a fee type (DELETE)
///
/// /stats                       dashboard statistics (GET)
/// /studentTotals?feeType=      per-student sums (GET)
///
/// /backup?feeType=             download backup (GET)
/// /restoreStudents?feeType=    replace a fee type from a backup (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(fees::router())
        .merge(reports::router())
        .merge(backup::router())
}
