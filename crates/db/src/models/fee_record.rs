//! Fee record row as stored in `fee_records`.

use feeledger_core::stats::FeeLine;
use feeledger_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `fee_records` table.
///
/// Serialized with camelCase keys; `payment` serializes as a string so no
/// precision is lost on the way to the browser.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    pub id: DbId,
    pub fee_type: String,
    pub student_no: String,
    pub student_name: String,
    pub receipt_no: Option<String>,
    pub payment: Decimal,
    pub description: Option<String>,
    pub extra_info: Option<String>,
    pub timestamp: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FeeLine for FeeRecord {
    fn student_no(&self) -> &str {
        &self.student_no
    }

    fn student_name(&self) -> &str {
        &self.student_name
    }

    fn payment(&self) -> Decimal {
        self.payment
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
