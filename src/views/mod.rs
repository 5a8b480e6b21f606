//! Aggregates derived from a snapshot of the expense collection.
//!
//! Everything here is a pure function of `(records, now)`. Record timestamps
//! are converted into `now`'s timezone before any calendar comparison, so the
//! caller decides whether months are local or UTC months.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Category, Expense};

/// Number of entries in the recent-transactions list.
pub(crate) const RECENT_LIMIT: usize = 5;
/// How far back, in calendar months, the recent-transactions list looks.
pub(crate) const RECENT_WINDOW_MONTHS: u32 = 2;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Sums amounts, pinning at `Decimal::MAX`/`MIN` instead of overflowing.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `part` as a whole-number percentage of `whole`, rounded half away from
/// zero. 0 when `whole` is zero or the ratio cannot be represented.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> u32 {
    if whole.is_zero() {
        return 0;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .or_else(|| {
            part.checked_div(whole)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        })
        .map(|pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|pct| pct.to_u32())
        .unwrap_or(0)
}

pub(crate) fn total(records: &[Expense]) -> Decimal {
    saturating_sum(records.iter().map(|e| e.amount))
}

/// Per-category sums for one calendar month. Always carries all four categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryBreakdown {
    sums: [(Category, Decimal); 4],
}

impl Default for CategoryBreakdown {
    fn default() -> Self {
        Self {
            sums: [
                (Category::Food, Decimal::ZERO),
                (Category::HomeRent, Decimal::ZERO),
                (Category::Studies, Decimal::ZERO),
                (Category::Miscellaneous, Decimal::ZERO),
            ],
        }
    }
}

impl CategoryBreakdown {
    pub(crate) fn get(&self, category: Category) -> Decimal {
        self.sums[category.index()].1
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.sums.iter().copied()
    }

    pub(crate) fn total(&self) -> Decimal {
        saturating_sum(self.sums.iter().map(|(_, amount)| *amount))
    }

    /// Whole-number percentage of the month total, 0 when nothing was spent.
    pub(crate) fn share(&self, category: Category) -> u32 {
        percent_of(self.get(category), self.total())
    }

    fn add(&mut self, category: Category, amount: Decimal) {
        let sum = &mut self.sums[category.index()].1;
        *sum = sum.saturating_add(amount);
    }
}

/// `(year, month)` of the calendar month `n` months before `now`'s month.
pub(crate) fn shift_month<Tz: TimeZone>(now: &DateTime<Tz>, months_back: u32) -> (i32, u32) {
    let index = now.year() * 12 + now.month0() as i32 - months_back as i32;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn in_month<Tz: TimeZone>(expense: &Expense, tz: &Tz, year: i32, month: u32) -> bool {
    let local = expense.date_in(tz);
    local.year() == year && local.month() == month
}

pub(crate) fn month_category_breakdown<Tz: TimeZone>(
    records: &[Expense],
    now: &DateTime<Tz>,
) -> CategoryBreakdown {
    let tz = now.timezone();
    let mut breakdown = CategoryBreakdown::default();
    for expense in records
        .iter()
        .filter(|e| in_month(e, &tz, now.year(), now.month()))
    {
        breakdown.add(expense.category, expense.amount);
    }
    breakdown
}

pub(crate) fn months_ago_total<Tz: TimeZone>(
    records: &[Expense],
    now: &DateTime<Tz>,
    months_back: u32,
) -> Decimal {
    let tz = now.timezone();
    let (year, month) = shift_month(now, months_back);
    saturating_sum(
        records
            .iter()
            .filter(|e| in_month(e, &tz, year, month))
            .map(|e| e.amount),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthTotal {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) total: Decimal,
}

impl MonthTotal {
    pub(crate) fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Totals for the current month and the `months - 1` before it, current first.
pub(crate) fn month_comparison<Tz: TimeZone>(
    records: &[Expense],
    now: &DateTime<Tz>,
    months: u32,
) -> Vec<MonthTotal> {
    (0..months)
        .map(|n| {
            let (year, month) = shift_month(now, n);
            MonthTotal {
                year,
                month,
                total: months_ago_total(records, now, n),
            }
        })
        .collect()
}

/// The most recent records no older than two calendar months, newest first.
pub(crate) fn recent_transactions<Tz: TimeZone>(
    records: &[Expense],
    now: &DateTime<Tz>,
) -> Vec<Expense> {
    let cutoff = now
        .clone()
        .checked_sub_months(Months::new(RECENT_WINDOW_MONTHS))
        .unwrap_or_else(|| now.clone())
        .with_timezone(&Utc);
    let mut recent: Vec<Expense> = records
        .iter()
        .filter(|e| e.date >= cutoff)
        .cloned()
        .collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_LIMIT);
    recent
}

/// Everything the dashboard shows, computed from one snapshot.
#[derive(Debug, Clone, Default)]
pub(crate) struct DashboardSummary {
    pub(crate) total: Decimal,
    pub(crate) count: usize,
    pub(crate) breakdown: CategoryBreakdown,
    pub(crate) months: Vec<MonthTotal>,
    pub(crate) recent: Vec<Expense>,
}

impl DashboardSummary {
    pub(crate) fn compute<Tz: TimeZone>(records: &[Expense], now: &DateTime<Tz>) -> Self {
        Self {
            total: total(records),
            count: records.len(),
            breakdown: month_category_breakdown(records, now),
            months: month_comparison(records, now, 3),
            recent: recent_transactions(records, now),
        }
    }
}
