//! Dashboard statistics and per-student totals.
//!
//! Totals are always derived from the individual payment rows; nothing here
//! is persisted. Growth is month over month on calendar months taken from
//! each record's `timestamp` (UTC).

use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::types::Timestamp;

/// Decimal places kept on the growth percentage.
pub const GROWTH_RATE_SCALE: u32 = 1;

/// Read access to the parts of a fee record the aggregations need.
pub trait FeeLine {
    fn student_no(&self) -> &str;
    fn student_name(&self) -> &str;
    fn payment(&self) -> Decimal;
    fn timestamp(&self) -> Timestamp;
}

/// A `(year, month)` pair, month in `1..=12`.
pub type CalendarMonth = (i32, u32);

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub monthly_collection: Decimal,
    pub yearly_collection: Decimal,
    /// Percentage change of monthly collections versus the previous month.
    pub growth_rate: Decimal,
}

/// Sum of one student's payments within a fee type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTotal {
    pub student_no: String,
    pub student_name: String,
    pub total_payment: Decimal,
}

/// Number of distinct `studentNo` values across all given records.
pub fn distinct_students<'a, L, I>(lines: I) -> usize
where
    L: FeeLine + 'a,
    I: IntoIterator<Item = &'a L>,
{
    lines
        .into_iter()
        .map(FeeLine::student_no)
        .collect::<HashSet<_>>()
        .len()
}

/// Sum of `payment` over all records.
pub fn total_payment<L: FeeLine>(lines: &[L]) -> Decimal {
    lines.iter().map(FeeLine::payment).sum()
}

pub fn month_of(ts: &Timestamp) -> CalendarMonth {
    (ts.year(), ts.month())
}

/// The calendar month before `month`; January wraps to December of the prior year.
pub fn previous_month((year, month): CalendarMonth) -> CalendarMonth {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Sum of `payment` over records whose timestamp falls in `month`.
pub fn month_total<L: FeeLine>(lines: &[L], month: CalendarMonth) -> Decimal {
    lines
        .iter()
        .filter(|l| month_of(&l.timestamp()) == month)
        .map(FeeLine::payment)
        .sum()
}

/// `(current - previous) / previous * 100`, rounded to one decimal place.
///
/// Returns zero when `previous` is zero, so "no prior data" and "no change"
/// look the same.
pub fn growth_rate(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    ((current - previous) / previous * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(GROWTH_RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the dashboard overview as of `now`.
///
/// Growth is measured on the monthly fee records only.
pub fn dashboard_stats<L: FeeLine>(monthly: &[L], yearly: &[L], now: Timestamp) -> DashboardStats {
    let current = month_of(&now);
    let current_total = month_total(monthly, current);
    let previous_total = month_total(monthly, previous_month(current));

    DashboardStats {
        total_students: distinct_students(monthly.iter().chain(yearly)),
        monthly_collection: total_payment(monthly),
        yearly_collection: total_payment(yearly),
        growth_rate: growth_rate(current_total, previous_total),
    }
}

/// Per-student payment sums, in order of each student's first record.
///
/// The name comes from the student's first record.
pub fn student_totals<L: FeeLine>(lines: &[L]) -> Vec<StudentTotal> {
    let mut totals: Vec<StudentTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for line in lines {
        let existing = index.get(line.student_no()).copied();
        match existing {
            Some(i) => totals[i].total_payment += line.payment(),
            None => {
                index.insert(line.student_no(), totals.len());
                totals.push(StudentTotal {
                    student_no: line.student_no().to_string(),
                    student_name: line.student_name().to_string(),
                    total_payment: line.payment(),
                });
            }
        }
    }

    totals
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
