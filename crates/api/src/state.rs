/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the only shared resource; handlers keep no other state
/// between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: feeledger_db::DbPool,
}
