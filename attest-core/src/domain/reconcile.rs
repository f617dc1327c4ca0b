//! Hour reconciliation: keeps the billable/non-billable pair summing to the
//! fixed total while one side is being edited.

use crate::domain::models::TimesheetEntry;

/// Absolute tolerance for hour comparisons. Hours are displayed with two
/// decimals, so anything below this is floating-point noise.
pub const HOURS_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourField {
    Billable,
    NonBillable,
}

/// Parse raw text from an hour cell.
///
/// Unparseable input becomes 0.0 rather than an error; the same goes for
/// non-finite values, which would poison every epsilon comparison
/// downstream.
pub fn parse_hours(input: &str) -> f64 {
    let parsed = input.trim().parse::<f64>().unwrap_or(0.0);
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

pub fn hours_consistent(billable: f64, non_billable: f64, total: f64) -> bool {
    (billable + non_billable - total).abs() <= HOURS_EPSILON
}

/// A distribution is submittable when the pair sums to the total and neither
/// bucket is negative. Rebalancing keeps the sum exact, so the negative
/// counterpart produced by an over-allocation is what trips this check.
pub fn distribution_valid(billable: f64, non_billable: f64, total: f64) -> bool {
    hours_consistent(billable, non_billable, total)
        && billable >= -HOURS_EPSILON
        && non_billable >= -HOURS_EPSILON
}

/// Apply an edit to one hour field and rebalance the other against the
/// entry's fixed total.
///
/// The counterpart field is not clamped: a negative value is how an
/// over-allocation is surfaced to the user. The entry is marked dirty
/// unconditionally; only a reload clears the flag. Selection and approval
/// status are never touched here.
pub fn apply_hour_edit(entry: &mut TimesheetEntry, field: HourField, new_value: f64) {
    match field {
        HourField::Billable => {
            entry.billable_hours = new_value;
            entry.non_billable_hours = entry.total_hours - new_value;
        }
        HourField::NonBillable => {
            entry.non_billable_hours = new_value;
            entry.billable_hours = entry.total_hours - new_value;
        }
    }

    entry.valid = distribution_valid(
        entry.billable_hours,
        entry.non_billable_hours,
        entry.total_hours,
    );
    entry.dirty = true;
}
