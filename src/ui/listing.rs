use chrono::TimeZone;
use std::cmp::Ordering;

use crate::models::Expense;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortField {
    Date,
    Name,
    Amount,
    Category,
}

impl SortField {
    pub(crate) fn all() -> &'static [SortField] {
        &[Self::Date, Self::Name, Self::Amount, Self::Category]
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Some(Self::Date),
            "name" => Some(Self::Name),
            "amount" => Some(Self::Amount),
            "category" => Some(Self::Category),
            _ => None,
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Date => Self::Name,
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
        }
    }

    fn compare(self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Category => a
                .category
                .as_str()
                .to_lowercase()
                .cmp(&b.category.as_str().to_lowercase()),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => write!(f, "Date"),
            Self::Name => write!(f, "Name"),
            Self::Amount => write!(f, "Amount"),
            Self::Category => write!(f, "Category"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub(crate) fn flip(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub(crate) fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Search, date filter and ordering for the transactions table.
#[derive(Debug, Clone)]
pub(crate) struct TransactionQuery {
    pub(crate) search: String,
    pub(crate) date_filter: Option<String>,
    pub(crate) sort: SortField,
    pub(crate) direction: SortDirection,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            date_filter: None,
            sort: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl TransactionQuery {
    /// Same field flips the direction; a new field starts ascending.
    pub(crate) fn toggle_sort(&mut self, field: SortField) {
        if self.sort == field {
            self.direction = self.direction.flip();
        } else {
            self.sort = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Case-insensitive substring match on name, category or amount.
    pub(crate) fn matches_search(&self, expense: &Expense) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        expense.name.to_lowercase().contains(&term)
            || expense.category.as_str().to_lowercase().contains(&term)
            || expense.amount_text().contains(&term)
    }

    /// The timestamp, rendered in `tz` as `YYYY-MM-DDTHH:MM:SS`, must start
    /// with the filter.
    pub(crate) fn matches_date<Tz: TimeZone>(&self, expense: &Expense, tz: &Tz) -> bool
    where
        Tz::Offset: std::fmt::Display,
    {
        match &self.date_filter {
            Some(prefix) => expense
                .date_in(tz)
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string()
                .starts_with(prefix.as_str()),
            None => true,
        }
    }

    pub(crate) fn apply<Tz: TimeZone>(&self, records: &[Expense], tz: &Tz) -> Vec<Expense>
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut rows: Vec<Expense> = records
            .iter()
            .filter(|e| self.matches_search(e) && self.matches_date(e, tz))
            .cloned()
            .collect();
        let (field, direction) = (self.sort, self.direction);
        rows.sort_by(|a, b| match direction {
            SortDirection::Asc => field.compare(a, b),
            SortDirection::Desc => field.compare(b, a),
        });
        rows
    }
}
