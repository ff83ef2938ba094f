//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod fee_record_repo;

pub use fee_record_repo::FeeRecordRepo;
