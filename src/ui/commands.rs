use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use super::listing::SortField;
use super::route::Route;
use crate::store::ExpenseStore;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut ExpenseStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Expenzor", cmd_quit, r);
    register_command!("quit", "Quit Expenzor", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("a", "Go to Add Expense", cmd_add, r);
    register_command!("add", "Go to Add Expense", cmd_add, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!(
        "go",
        "Open a path (e.g. :go /transactions?date=2026-10-03)",
        cmd_go,
        r
    );
    register_command!(
        "date",
        "Filter transactions by date prefix (e.g. :date 2026-10)",
        cmd_date,
        r
    );
    register_command!("clear-date", "Clear the date filter", cmd_clear_date, r);
    register_command!(
        "search",
        "Search transactions (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s coffee)", cmd_search, r);
    register_command!(
        "sort",
        "Sort transactions (e.g. :sort amount)",
        cmd_sort,
        r
    );
    register_command!("delete", "Delete selected transaction", cmd_delete, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut ExpenseStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.switch_screen(Screen::Dashboard, store);
    Ok(())
}

fn cmd_add(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.switch_screen(Screen::AddExpense, store);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.switch_screen(Screen::Transactions, store);
    Ok(())
}

fn cmd_go(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :go <path>. Paths: /, /add-expense, /transactions?date=YYYY-MM-DD");
        return Ok(());
    }
    let route = Route::parse(args);
    let path = route.path();
    app.navigate(route, store);
    app.set_status(format!("Opened {path}"));
    Ok(())
}

fn cmd_date(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :date <prefix>. Example: :date 2026-10-03");
        return Ok(());
    }
    app.navigate(
        Route::Transactions {
            date: Some(args.to_string()),
        },
        store,
    );
    app.set_status(format!("Showing transactions for {args}"));
    Ok(())
}

fn cmd_clear_date(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.navigate(Route::Transactions { date: None }, store);
    app.set_status("Date filter cleared");
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.query.search = args.to_string();
    app.screen = Screen::Transactions;
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.refresh_transactions(store);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_sort(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    let Some(field) = SortField::parse(args) else {
        let names: Vec<String> = SortField::all()
            .iter()
            .map(|f| f.to_string().to_lowercase())
            .collect();
        app.set_status(format!("Usage: :sort <field>. Fields: {}", names.join(", ")));
        return Ok(());
    };
    app.query.toggle_sort(field);
    app.screen = Screen::Transactions;
    app.refresh_transactions(store);
    app.set_status(format!(
        "Sorted by {} {}",
        app.query.sort,
        app.query.direction.arrow()
    ));
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions || app.transactions.is_empty() {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    }
    app.delete_selected(store)
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
