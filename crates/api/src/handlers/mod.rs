pub mod backup;
pub mod fees;
pub mod reports;
