//! Domain types, input validation and aggregation for the fee ledger.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on top of it.

pub mod error;
pub mod fee_record;
pub mod stats;
pub mod types;
