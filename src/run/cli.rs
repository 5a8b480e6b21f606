use anyhow::{Context, Result};
use chrono::{Datelike, Local};

use crate::models::Expense;
use crate::store::ExpenseStore;
use crate::ui::form;
use crate::ui::listing::{SortDirection, SortField, TransactionQuery};
use crate::ui::route::Route;
use crate::ui::util::{format_amount, progress_bar, truncate};
use crate::views::{month_name, DashboardSummary};

pub(crate) fn as_cli(args: &[String], store: &mut ExpenseStore, currency: &str) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], store, currency),
        "list" | "ls" => cli_list(&args[2..], store, currency),
        "delete" | "rm" => cli_delete(&args[2..], store),
        "summary" | "s" => cli_summary(store, currency),
        "tui" => {
            let route = start_route(&args[2..]);
            super::as_tui(store, currency, route)
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expenzor {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Expenzor - personal expense tracker");
    println!();
    println!("Usage: expenzor [command]");
    println!();
    println!("Commands:");
    println!("  (none)                            Launch interactive TUI");
    println!("  add <name> <amount> <category>    Record an expense");
    println!("                                    Categories: Food, Home Rent, Studies, Miscellaneous");
    println!("  list                              List expenses, newest first");
    println!("    --date <prefix>                 Only dates starting with prefix (e.g. 2026-10)");
    println!("    --search <term>                 Match name, category or amount");
    println!("    --sort <field>                  date, name, amount or category (ascending)");
    println!("    --desc                          Sort descending");
    println!("  delete <id>                       Delete an expense by id");
    println!("  summary                           Print the dashboard summary");
    println!("  tui [--route <path>]              Launch the TUI at a path (e.g. /add-expense)");
    println!("  --help, -h                        Show this help");
    println!("  --version, -V                     Show version");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

pub(crate) fn start_route(args: &[String]) -> Route {
    flag_value(args, "--route")
        .map(Route::parse)
        .unwrap_or(Route::Dashboard)
}

/// Builds the listing query from `list` flags. Without `--sort` the listing
/// is newest first.
pub(crate) fn list_query(args: &[String]) -> Result<TransactionQuery> {
    let mut query = TransactionQuery {
        search: flag_value(args, "--search").unwrap_or_default().to_string(),
        date_filter: flag_value(args, "--date").map(str::to_string),
        ..TransactionQuery::default()
    };
    let desc = args.iter().any(|a| a == "--desc");
    if let Some(name) = flag_value(args, "--sort") {
        query.sort = SortField::parse(name)
            .with_context(|| format!("Unknown sort field: {name}"))?;
        query.direction = SortDirection::Asc;
    }
    if desc {
        query.direction = SortDirection::Desc;
    }
    Ok(query)
}

pub(crate) fn cli_add(args: &[String], store: &mut ExpenseStore, currency: &str) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: expenzor add <name> <amount> <category>");
    }
    let category = args[2..].join(" ");
    let new = form::validate(&args[0], &args[1], &category)?;
    let expense = store.add(new)?;
    println!(
        "Added {} {} ({}) id={}",
        expense.name,
        format_amount(expense.amount, currency),
        expense.category,
        expense.id
    );
    Ok(())
}

fn cli_list(args: &[String], store: &ExpenseStore, currency: &str) -> Result<()> {
    let query = list_query(args)?;
    if store.is_empty() {
        println!("No expenses recorded yet. Add one with: expenzor add <name> <amount> <category>");
        return Ok(());
    }
    let rows = query.apply(store.snapshot(), &Local);
    if rows.is_empty() {
        println!("No transactions found");
        return Ok(());
    }

    println!(
        "{:<17} {:<24} {:>14}  {:<14} ID",
        "Date", "Name", "Amount", "Category"
    );
    println!("{}", "─".repeat(110));
    for expense in &rows {
        print_row(expense, currency);
    }
    println!("{}", "─".repeat(110));
    println!("{} transaction{}", rows.len(), if rows.len() == 1 { "" } else { "s" });
    Ok(())
}

fn print_row(expense: &Expense, currency: &str) {
    println!(
        "{:<17} {:<24} {:>14}  {:<14} {}",
        expense.date_in(&Local).format("%Y-%m-%d %H:%M").to_string(),
        truncate(&expense.name, 24),
        format_amount(expense.amount, currency),
        expense.category.as_str(),
        expense.id
    );
}

pub(crate) fn cli_delete(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let id = args.first().context("Usage: expenzor delete <id>")?;
    let name = store.get(id).map(|e| e.name.clone());
    if store.delete(id)? {
        println!("Deleted {} ({id})", name.unwrap_or_default());
    } else {
        println!("No expense with id {id}");
    }
    Ok(())
}

fn cli_summary(store: &ExpenseStore, currency: &str) -> Result<()> {
    let now = Local::now();
    let summary = DashboardSummary::compute(store.snapshot(), &now);

    println!("Expenzor - {} {}", month_name(now.month()), now.year());
    println!("{}", "─".repeat(52));
    println!("  Total spent:  {}", format_amount(summary.total, currency));
    println!("  Expenses:     {}", summary.count);
    if let Some(saved) = store.last_saved()? {
        println!("  Last saved:   {saved}");
    }

    println!();
    println!("This month by category:");
    for (category, amount) in summary.breakdown.iter() {
        let share = summary.breakdown.share(category);
        println!(
            "  {:<14} {} {share:>3}%  {}",
            category.as_str(),
            progress_bar(share, 16),
            format_amount(amount, currency)
        );
    }

    println!();
    println!("Monthly comparison:");
    for month in &summary.months {
        println!(
            "  {:<16} {}",
            month.label(),
            format_amount(month.total, currency)
        );
    }

    println!();
    if summary.recent.is_empty() {
        println!("No recent transactions");
    } else {
        println!("Recent transactions:");
        for expense in &summary.recent {
            print_row(expense, currency);
        }
    }

    Ok(())
}
