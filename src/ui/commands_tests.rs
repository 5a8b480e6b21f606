#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, Screen};
use super::commands::{handle_command, COMMANDS};
use super::listing::{SortDirection, SortField};
use crate::db::Database;
use crate::models::{Category, NewExpense};
use crate::store::ExpenseStore;

fn setup() -> (App, ExpenseStore) {
    let mut store = ExpenseStore::open(Database::open_in_memory().unwrap()).unwrap();
    store
        .add(NewExpense::new("Coffee", dec!(150), Category::Food))
        .unwrap();
    store
        .add(NewExpense::new("Books", dec!(450), Category::Studies))
        .unwrap();
    let mut app = App::new("Rs.");
    app.refresh_all(&store);
    (app, store)
}

#[test]
fn test_every_command_has_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), "{name} has no description");
    }
}

#[test]
fn test_quit() {
    let (mut app, mut store) = setup();
    handle_command("q", &mut app, &mut store).unwrap();
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests_closest() {
    let (mut app, mut store) = setup();
    handle_command("transactoins", &mut app, &mut store).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :transactoins. Did you mean :transactions?"
    );
}

#[test]
fn test_screen_commands() {
    let (mut app, mut store) = setup();
    handle_command("add", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::AddExpense);
    handle_command("t", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Transactions);
    handle_command("dashboard", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Dashboard);
}

#[test]
fn test_go_parses_route() {
    let (mut app, mut store) = setup();
    handle_command("go /transactions?date=1999-01", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Transactions);
    assert_eq!(app.query.date_filter.as_deref(), Some("1999-01"));
    assert!(app.transactions.is_empty());

    handle_command("go /nowhere", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Dashboard);
}

#[test]
fn test_date_and_clear_date() {
    let (mut app, mut store) = setup();
    handle_command("date 1999", &mut app, &mut store).unwrap();
    assert!(app.transactions.is_empty());

    handle_command("clear-date", &mut app, &mut store).unwrap();
    assert_eq!(app.query.date_filter, None);
    assert_eq!(app.transactions.len(), 2);
}

#[test]
fn test_date_without_args_shows_usage() {
    let (mut app, mut store) = setup();
    handle_command("date", &mut app, &mut store).unwrap();
    assert!(app.status_message.starts_with("Usage: :date"));
    assert_eq!(app.screen, Screen::Dashboard);
}

#[test]
fn test_search_filters_rows() {
    let (mut app, mut store) = setup();
    handle_command("search coff", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Transactions);
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.transactions[0].name, "Coffee");

    handle_command("s", &mut app, &mut store).unwrap();
    assert_eq!(app.transactions.len(), 2);
    assert_eq!(app.status_message, "Search cleared");
}

#[test]
fn test_sort_toggles() {
    let (mut app, mut store) = setup();
    handle_command("sort amount", &mut app, &mut store).unwrap();
    assert_eq!(app.query.sort, SortField::Amount);
    assert_eq!(app.query.direction, SortDirection::Asc);
    assert_eq!(app.transactions[0].name, "Coffee");

    handle_command("sort amount", &mut app, &mut store).unwrap();
    assert_eq!(app.query.direction, SortDirection::Desc);
    assert_eq!(app.transactions[0].name, "Books");
}

#[test]
fn test_sort_unknown_field() {
    let (mut app, mut store) = setup();
    handle_command("sort price", &mut app, &mut store).unwrap();
    assert_eq!(
        app.status_message,
        "Usage: :sort <field>. Fields: date, name, amount, category"
    );
    assert_eq!(app.query.sort, SortField::Date);
}

#[test]
fn test_delete_requires_transactions_screen() {
    let (mut app, mut store) = setup();
    handle_command("delete", &mut app, &mut store).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(
        app.status_message,
        "Navigate to Transactions and select one first"
    );
}

#[test]
fn test_delete_selected_row() {
    let (mut app, mut store) = setup();
    handle_command("t", &mut app, &mut store).unwrap();
    handle_command("delete", &mut app, &mut store).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(app.transactions.len(), 1);
}

#[test]
fn test_help_opens_overlay() {
    let (mut app, mut store) = setup();
    handle_command("help", &mut app, &mut store).unwrap();
    assert!(app.show_help);
}
