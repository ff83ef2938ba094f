//! Route definitions for fee record CRUD.
//!
//! Paths keep the names the dashboard already calls.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::fees;
use crate::state::AppState;

/// ```text
/// GET    /getStudents     -> get_students
/// POST   /addStudent      -> add_student
/// PUT    /updateStudent   -> update_student
/// DELETE /student/{id}    -> delete_student
/// DELETE /resetStudents   -> reset_students
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getStudents", get(fees::get_students))
        .route("/addStudent", post(fees::add_student))
        .route("/updateStudent", put(fees::update_student))
        .route("/student/{id}", delete(fees::delete_student))
        .route("/resetStudents", delete(fees::reset_students))
}
