use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::models::{Category, Expense, NewExpense};
use crate::store::ExpenseStore;

/// How long the success message stays up after an expense is saved.
pub(crate) const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

pub(crate) const SUCCESS_MESSAGE: &str = "Expense added successfully!";

/// Largest accepted amount. Together with `MAX_AMOUNT_SCALE` this keeps every
/// amount exact as the f64 the slot stores.
pub(crate) const MAX_AMOUNT: i64 = 10_000_000_000_000;
pub(crate) const MAX_AMOUNT_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("Please enter a name for the expense")]
    EmptyName,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please select a category")]
    NoCategorySelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormStatus {
    Idle,
    Rejected(ValidationError),
    Accepted { since: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Name,
    Amount,
    Category,
}

impl FormField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Name,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
        }
    }
}

/// The add-expense form. Fields hold raw text exactly as typed.
#[derive(Debug, Clone)]
pub(crate) struct ExpenseForm {
    pub(crate) name: String,
    pub(crate) amount: String,
    pub(crate) category: String,
    pub(crate) focus: FormField,
    pub(crate) status: FormStatus,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            category: String::new(),
            focus: FormField::Name,
            status: FormStatus::Idle,
        }
    }
}

/// Parses an amount the way a numeric input would: plain or scientific
/// notation, surrounding whitespace ignored.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

fn amount_in_range(value: Decimal) -> bool {
    value > Decimal::ZERO
        && value <= Decimal::from(MAX_AMOUNT)
        && value.normalize().scale() <= MAX_AMOUNT_SCALE
}

/// First failing rule wins: name, then amount, then category.
pub(crate) fn validate(name: &str, amount: &str, category: &str) -> Result<NewExpense, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let amount = match parse_amount(amount) {
        Some(value) if amount_in_range(value) => value,
        _ => return Err(ValidationError::InvalidAmount),
    };
    let category = Category::parse(category).ok_or(ValidationError::NoCategorySelected)?;
    Ok(NewExpense::new(name, amount, category))
}

impl ExpenseForm {
    pub(crate) fn validate(&self) -> Result<NewExpense, ValidationError> {
        validate(&self.name, &self.amount, &self.category)
    }

    /// Validates and, on success, records the expense and clears the fields.
    /// A rejected submit keeps what the user typed.
    pub(crate) fn submit(&mut self, store: &mut ExpenseStore, now: Instant) -> Result<Option<Expense>> {
        self.status = FormStatus::Idle;
        match self.validate() {
            Ok(new) => {
                let expense = store.add(new)?;
                self.clear_fields();
                self.status = FormStatus::Accepted { since: now };
                Ok(Some(expense))
            }
            Err(reason) => {
                tracing::debug!(%reason, "expense rejected");
                self.status = FormStatus::Rejected(reason);
                Ok(None)
            }
        }
    }

    /// Drops the success message once it has been shown long enough.
    pub(crate) fn tick(&mut self, now: Instant) {
        if let FormStatus::Accepted { since } = self.status {
            if now.saturating_duration_since(since) >= SUCCESS_DISPLAY {
                self.status = FormStatus::Idle;
            }
        }
    }

    /// Inline message for the current status, if any.
    pub(crate) fn message(&self) -> Option<String> {
        match self.status {
            FormStatus::Idle => None,
            FormStatus::Rejected(reason) => Some(reason.to_string()),
            FormStatus::Accepted { .. } => Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    pub(crate) fn selected_category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// Cycles the category picker. An unselected picker starts at the first
    /// (forward) or last (backward) category.
    pub(crate) fn cycle_category(&mut self, forward: bool) {
        let all = Category::all();
        let next = match self.selected_category() {
            Some(current) if forward => all[(current.index() + 1) % all.len()],
            Some(current) => all[(current.index() + all.len() - 1) % all.len()],
            None if forward => all[0],
            None => all[all.len() - 1],
        };
        self.category = next.as_str().to_string();
    }

    pub(crate) fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Amount => self.amount.push(c),
            FormField::Category => {}
        }
    }

    pub(crate) fn pop_char(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Category => self.category.clear(),
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.amount.clear();
        self.category.clear();
        self.focus = FormField::Name;
    }
}
