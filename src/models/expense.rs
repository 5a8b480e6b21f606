use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// A single recorded expense. Records are never edited once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub date: DateTime<Utc>,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
}

/// The user-supplied part of an expense, before an id and timestamp exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
}

impl NewExpense {
    pub fn new(name: impl Into<String>, amount: Decimal, category: Category) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
        }
    }
}

impl Expense {
    pub fn from_new(new: NewExpense, date: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            name: new.name,
            amount: new.amount,
            category: new.category,
        }
    }

    /// The record's timestamp in the viewer's timezone.
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.date.with_timezone(tz)
    }

    /// Amount without trailing zeros, as shown in search matching ("150", "12.5").
    pub fn amount_text(&self) -> String {
        self.amount.normalize().to_string()
    }
}
