//! Repository for the `fee_records` table.
//!
//! Every operation is a single statement against one table. There are no
//! cross-row guarantees: bulk import inserts each record on its own.

use feeledger_core::fee_record::{NewFeeRecord, UpdateFeeRecord};
use feeledger_core::types::DbId;
use sqlx::PgPool;

use crate::models::fee_record::FeeRecord;

/// Column list for `fee_records` queries.
const COLUMNS: &str = "\
    id, fee_type, student_no, student_name, receipt_no, payment, \
    description, extra_info, \"timestamp\", created_at, updated_at";

/// Provides data access for fee records.
pub struct FeeRecordRepo;

impl FeeRecordRepo {
    /// List every record tagged with `fee_type`, in insertion order.
    ///
    /// The tag is matched literally: `""` only matches untagged rows.
    pub async fn list_by_type(
        pool: &PgPool,
        fee_type: &str,
    ) -> Result<Vec<FeeRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fee_records WHERE fee_type = $1 ORDER BY id");
        sqlx::query_as::<_, FeeRecord>(&query)
            .bind(fee_type)
            .fetch_all(pool)
            .await
    }

    /// Find a record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FeeRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fee_records WHERE id = $1");
        sqlx::query_as::<_, FeeRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a validated record and return it with its new ID.
    ///
    /// `timestamp` falls back to the insert time when not supplied.
    pub async fn create(pool: &PgPool, input: &NewFeeRecord) -> Result<FeeRecord, sqlx::Error> {
        Self::insert_as(pool, &input.fee_type, input).await
    }

    /// Insert each record independently under `fee_type`, assigning fresh IDs.
    ///
    /// Stops at the first failure; records inserted before it stay.
    pub async fn import(
        pool: &PgPool,
        fee_type: &str,
        inputs: &[NewFeeRecord],
    ) -> Result<Vec<FeeRecord>, sqlx::Error> {
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(Self::insert_as(pool, fee_type, input).await?);
        }
        Ok(created)
    }

    /// Partially update a record. Only the provided fields are changed.
    ///
    /// Returns `false` when no row has the given ID; nothing is written then.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeeRecord,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE fee_records SET \
                 fee_type = COALESCE($2, fee_type), \
                 student_no = COALESCE($3, student_no), \
                 student_name = COALESCE($4, student_name), \
                 receipt_no = COALESCE($5, receipt_no), \
                 payment = COALESCE($6, payment), \
                 description = COALESCE($7, description), \
                 extra_info = COALESCE($8, extra_info), \
                 \"timestamp\" = COALESCE($9, \"timestamp\") \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.fee_type)
        .bind(&input.student_no)
        .bind(&input.student_name)
        .bind(&input.receipt_no)
        .bind(input.payment)
        .bind(&input.description)
        .bind(&input.extra_info)
        .bind(input.timestamp)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a record by ID. Returns `true` if a row was deleted.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fee_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every record tagged with `fee_type`. Returns the number removed.
    pub async fn delete_by_type(pool: &PgPool, fee_type: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fee_records WHERE fee_type = $1")
            .bind(fee_type)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_as(
        pool: &PgPool,
        fee_type: &str,
        input: &NewFeeRecord,
    ) -> Result<FeeRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO fee_records \
                 (fee_type, student_no, student_name, receipt_no, payment, \
                  description, extra_info, \"timestamp\") \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeeRecord>(&query)
            .bind(fee_type)
            .bind(&input.student_no)
            .bind(&input.student_name)
            .bind(&input.receipt_no)
            .bind(input.payment)
            .bind(&input.description)
            .bind(&input.extra_info)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }
}
