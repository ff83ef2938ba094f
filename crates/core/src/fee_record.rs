//! Fee record payloads and their validation.
//!
//! A fee record is one payment line item tied to a student. Incoming JSON is
//! deserialized into [`CreateFeeRecord`] / [`UpdateFeeRecord`] (everything
//! optional, so a missing field becomes a validation failure rather than a
//! parse failure) and then checked into the shapes the store accepts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fractional digits stored for `payment` (`NUMERIC(10,2)`).
pub const PAYMENT_SCALE: u32 = 2;

/// Digits left of the decimal point that fit in `NUMERIC(10,2)`.
pub const PAYMENT_INTEGER_DIGITS: u32 = 8;

// ---------------------------------------------------------------------------
// Fee type
// ---------------------------------------------------------------------------

/// The two fee partitions the dashboard works with.
///
/// The column itself is free text; this enum only names the values the
/// statistics and UI rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeType {
    Monthly,
    Yearly,
}

impl FeeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for FeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Raw insert payload as sent by clients (and as found in backup files).
///
/// Unknown keys such as a stale `id`, `createdAt` or the form's `payments`
/// array are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeeRecord {
    #[validate(length(max = 255, message = "feeType must be at most 255 characters"))]
    pub fee_type: Option<String>,
    #[validate(
        required(message = "studentNo is required"),
        length(max = 255, message = "studentNo must be at most 255 characters")
    )]
    pub student_no: Option<String>,
    #[validate(
        required(message = "studentName is required"),
        length(max = 255, message = "studentName must be at most 255 characters")
    )]
    pub student_name: Option<String>,
    /// Older backups wrote the student's name under `name`. Used only when
    /// `studentName` is absent or blank.
    pub name: Option<String>,
    #[validate(length(max = 255, message = "receiptNo must be at most 255 characters"))]
    pub receipt_no: Option<String>,
    #[validate(required(message = "payment is required"))]
    pub payment: Option<Decimal>,
    pub description: Option<String>,
    pub extra_info: Option<String>,
    pub timestamp: Option<Timestamp>,
}

/// A validated record ready to be inserted. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeeRecord {
    pub fee_type: String,
    pub student_no: String,
    pub student_name: String,
    pub receipt_no: Option<String>,
    pub payment: Decimal,
    pub description: Option<String>,
    pub extra_info: Option<String>,
    /// `None` lets the store stamp the insert time.
    pub timestamp: Option<Timestamp>,
}

impl CreateFeeRecord {
    /// Check required fields and payment precision.
    ///
    /// Blank `studentNo` / `studentName` count as missing. A missing
    /// `feeType` is stored as the empty string.
    pub fn validate_new(mut self) -> Result<NewFeeRecord, CoreError> {
        self.student_no = self.student_no.filter(|s| !s.trim().is_empty());
        let legacy_name = self.name.take().filter(|s| !s.trim().is_empty());
        self.student_name = self
            .student_name
            .filter(|s| !s.trim().is_empty())
            .or(legacy_name);
        self.validate().map_err(validation_error)?;

        let (Some(student_no), Some(student_name), Some(payment)) =
            (self.student_no, self.student_name, self.payment)
        else {
            return Err(CoreError::Validation(
                "studentNo, studentName and payment are required".to_string(),
            ));
        };

        Ok(NewFeeRecord {
            fee_type: self.fee_type.unwrap_or_default(),
            student_no,
            student_name,
            receipt_no: self.receipt_no,
            payment: normalize_payment(payment)?,
            description: self.description,
            extra_info: self.extra_info,
            timestamp: self.timestamp,
        })
    }
}

/// Partial update payload. Only the fields present are written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeeRecord {
    #[validate(length(max = 255, message = "feeType must be at most 255 characters"))]
    pub fee_type: Option<String>,
    #[validate(length(max = 255, message = "studentNo must be at most 255 characters"))]
    pub student_no: Option<String>,
    #[validate(length(max = 255, message = "studentName must be at most 255 characters"))]
    pub student_name: Option<String>,
    #[validate(length(max = 255, message = "receiptNo must be at most 255 characters"))]
    pub receipt_no: Option<String>,
    pub payment: Option<Decimal>,
    pub description: Option<String>,
    pub extra_info: Option<String>,
    pub timestamp: Option<Timestamp>,
}

impl UpdateFeeRecord {
    /// Reject blanked required fields and normalize the payment precision.
    pub fn validate_update(mut self) -> Result<Self, CoreError> {
        if self.student_no.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(CoreError::Validation(
                "studentNo must not be blank".to_string(),
            ));
        }
        if self.student_name.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(CoreError::Validation(
                "studentName must not be blank".to_string(),
            ));
        }
        self.validate().map_err(validation_error)?;
        self.payment = self.payment.map(normalize_payment).transpose()?;
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Payment precision
// ---------------------------------------------------------------------------

/// Round a payment to two fractional digits and check it fits `NUMERIC(10,2)`.
///
/// Midpoints round away from zero, matching PostgreSQL's numeric rounding.
pub fn normalize_payment(payment: Decimal) -> Result<Decimal, CoreError> {
    let mut rounded =
        payment.round_dp_with_strategy(PAYMENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let limit = Decimal::from(10_i64.pow(PAYMENT_INTEGER_DIGITS));
    if rounded.abs() >= limit {
        return Err(CoreError::Validation(format!(
            "payment {payment} exceeds {PAYMENT_INTEGER_DIGITS} integer digits"
        )));
    }
    rounded.rescale(PAYMENT_SCALE);
    Ok(rounded)
}

/// Flatten validator output into a single, stable message.
fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    CoreError::Validation(messages.join("; "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
