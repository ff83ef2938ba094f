/// Domain-level failures raised before anything reaches the store.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing or a value does not fit its column.
    #[error("Validation failed: {0}")]
    Validation(String),
}
