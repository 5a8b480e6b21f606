mod config;
mod db;
mod logging;
mod models;
mod run;
mod store;
mod ui;
mod views;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;
    logging::init(&config.log_path(), &config.settings.log_filter)?;
    tracing::debug!(config = %config.config_path().display(), "settings loaded");

    let db = db::Database::open(&config.db_path())?;
    let mut store = store::ExpenseStore::open(db)?;
    let currency = config.settings.currency_symbol.as_str();

    match args.len() {
        1 => run::as_tui(&mut store, currency, ui::route::Route::Dashboard),
        2.. => run::as_cli(&args, &mut store, currency),
        _ => {
            eprintln!("Usage: expenzor [command]");
            Ok(())
        }
    }
}
