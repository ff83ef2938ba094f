//! Response bodies shared by the mutation endpoints.

use serde::Serialize;

/// `{ "message": "..." }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const UPDATED: Self = Self {
        message: "Updated successfully",
    };
    pub const DELETED: Self = Self {
        message: "Deleted successfully",
    };
    pub const RESET: Self = Self {
        message: "Reset successfully",
    };
}

/// Result of a backup restore.
#[derive(Debug, Serialize)]
pub struct RestoreResponse {
    pub message: &'static str,
    /// Number of records inserted.
    pub restored: usize,
}
