use anyhow::Result;
use chrono::{Datelike, Local};
use std::time::Instant;

use crate::models::Expense;
use crate::store::ExpenseStore;
use crate::views::DashboardSummary;

use super::calendar::CalendarMonth;
use super::form::ExpenseForm;
use super::listing::TransactionQuery;
use super::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    AddExpense,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::AddExpense, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::AddExpense => write!(f, "Add Expense"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Form => write!(f, "FORM"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,

    // Dashboard
    pub(crate) summary: DashboardSummary,
    pub(crate) calendar: CalendarMonth,
    pub(crate) calendar_cursor: u32,

    // Transactions
    pub(crate) query: TransactionQuery,
    pub(crate) transactions: Vec<Expense>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Add expense
    pub(crate) form: ExpenseForm,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(currency: impl Into<String>) -> Self {
        let today = Local::now().date_naive();
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency: currency.into(),

            summary: DashboardSummary::default(),
            calendar: CalendarMonth::containing(today),
            calendar_cursor: today.day(),

            query: TransactionQuery::default(),
            transactions: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,

            form: ExpenseForm::default(),

            visible_rows: 20,
        }
    }

    pub(crate) fn refresh_dashboard(&mut self, store: &ExpenseStore) {
        let now = Local::now();
        self.summary = DashboardSummary::compute(store.snapshot(), &now);
        let today = now.date_naive();
        if self.calendar.today != today {
            self.calendar = CalendarMonth::containing(today);
            self.calendar_cursor = today.day();
        }
    }

    pub(crate) fn refresh_transactions(&mut self, store: &ExpenseStore) {
        self.transactions = self.query.apply(store.snapshot(), &Local);
        if self.transaction_index >= self.transactions.len() {
            self.transaction_index = self.transactions.len().saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    pub(crate) fn refresh_all(&mut self, store: &ExpenseStore) {
        self.refresh_dashboard(store);
        self.refresh_transactions(store);
    }

    pub(crate) fn route(&self) -> Route {
        match self.screen {
            Screen::Dashboard => Route::Dashboard,
            Screen::AddExpense => Route::AddExpense,
            Screen::Transactions => Route::Transactions {
                date: self.query.date_filter.clone(),
            },
        }
    }

    /// Moves to a route. The transactions route replaces the date filter.
    pub(crate) fn navigate(&mut self, route: Route, store: &ExpenseStore) {
        tracing::debug!(path = %route.path(), "navigate");
        match route {
            Route::Dashboard => {
                self.screen = Screen::Dashboard;
                self.input_mode = InputMode::Normal;
                self.refresh_dashboard(store);
            }
            Route::AddExpense => {
                self.screen = Screen::AddExpense;
                self.input_mode = InputMode::Form;
            }
            Route::Transactions { date } => {
                self.screen = Screen::Transactions;
                self.input_mode = InputMode::Normal;
                self.query.date_filter = date;
                self.transaction_index = 0;
                self.transaction_scroll = 0;
                self.refresh_transactions(store);
            }
        }
    }

    pub(crate) fn switch_screen(&mut self, screen: Screen, store: &ExpenseStore) {
        let route = match screen {
            Screen::Dashboard => Route::Dashboard,
            Screen::AddExpense => Route::AddExpense,
            Screen::Transactions => Route::Transactions { date: None },
        };
        self.navigate(route, store);
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Expense> {
        self.transactions.get(self.transaction_index)
    }

    /// Deletes the highlighted row right away.
    pub(crate) fn delete_selected(&mut self, store: &mut ExpenseStore) -> Result<()> {
        let Some(expense) = self.selected_transaction().cloned() else {
            self.set_status("No transaction selected");
            return Ok(());
        };
        store.delete(&expense.id)?;
        self.refresh_all(store);
        self.set_status(format!("Deleted: {}", expense.name));
        Ok(())
    }

    pub(crate) fn submit_form(&mut self, store: &mut ExpenseStore, now: Instant) -> Result<()> {
        if self.form.submit(store, now)?.is_some() {
            self.refresh_all(store);
        }
        Ok(())
    }

    /// Opens the transactions screen for the calendar cursor's day.
    pub(crate) fn select_calendar_day(&mut self, store: &ExpenseStore) {
        match self.calendar.select(self.calendar_cursor) {
            Some(date) => self.navigate(Route::Transactions { date: Some(date) }, store),
            None => self.set_status("Future dates cannot be selected"),
        }
    }

    /// Moves the calendar cursor by `delta` days, staying inside the month.
    pub(crate) fn move_calendar_cursor(&mut self, delta: i32) {
        let target = self.calendar_cursor as i32 + delta;
        if target >= 1 && target <= self.calendar.days as i32 {
            self.calendar_cursor = target as u32;
        }
    }

    /// Time-driven housekeeping, called between key events.
    pub(crate) fn tick(&mut self, now: Instant, store: &ExpenseStore) {
        self.form.tick(now);
        if self.calendar.today != Local::now().date_naive() {
            self.refresh_dashboard(store);
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
