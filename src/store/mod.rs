//! The record store: sole owner of the expense collection and its slot.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::db::Database;
use crate::models::{Expense, NewExpense};

/// Name of the slot holding the serialized collection.
pub(crate) const EXPENSES_SLOT: &str = "expenses";

/// Owns the canonical expense list. All mutation goes through `add` and
/// `delete`, each of which rewrites the full snapshot to the slot.
pub(crate) struct ExpenseStore {
    db: Database,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Loads the collection from the slot. A missing or unreadable slot
    /// value starts an empty collection.
    pub(crate) fn open(db: Database) -> Result<Self> {
        let expenses = match db.read_slot(EXPENSES_SLOT)? {
            Some(raw) => match decode(&raw) {
                Ok(expenses) => expenses,
                Err(e) => {
                    tracing::warn!(error = %e, "stored expenses are malformed, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        tracing::info!(count = expenses.len(), "expense store loaded");
        Ok(Self { db, expenses })
    }

    pub(crate) fn add(&mut self, new: NewExpense) -> Result<Expense> {
        self.add_at(new, Utc::now())
    }

    pub(crate) fn add_at(&mut self, new: NewExpense, date: DateTime<Utc>) -> Result<Expense> {
        let expense = Expense::from_new(new, date);
        tracing::info!(id = %expense.id, name = %expense.name, amount = %expense.amount, "expense added");
        self.expenses.push(expense.clone());
        self.persist()?;
        Ok(expense)
    }

    /// Removes the record with `id`. Returns whether anything was removed;
    /// an unknown id leaves the collection untouched.
    pub(crate) fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        let removed = self.expenses.len() != before;
        if removed {
            tracing::info!(%id, "expense deleted");
        } else {
            tracing::debug!(%id, "delete of unknown expense ignored");
        }
        self.persist()?;
        Ok(removed)
    }

    /// The collection in insertion order.
    pub(crate) fn snapshot(&self) -> &[Expense] {
        &self.expenses
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.expenses.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub(crate) fn last_saved(&self) -> Result<Option<String>> {
        self.db.slot_updated_at(EXPENSES_SLOT)
    }

    fn persist(&self) -> Result<()> {
        let raw = encode(&self.expenses)?;
        self.db.write_slot(EXPENSES_SLOT, &raw)?;
        tracing::debug!(count = self.expenses.len(), bytes = raw.len(), "expenses persisted");
        Ok(())
    }
}

/// Serializes a collection into the slot format: a JSON array of records.
pub(crate) fn encode(expenses: &[Expense]) -> Result<String> {
    serde_json::to_string(expenses).context("Failed to serialize expenses")
}

pub(crate) fn decode(raw: &str) -> Result<Vec<Expense>> {
    serde_json::from_str(raw).context("Failed to parse stored expenses")
}

#[cfg(test)]
mod tests;
