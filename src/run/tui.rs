use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::store::ExpenseStore;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::form::FormField;
use crate::ui::listing::SortField;
use crate::ui::route::Route;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// How long to wait for a key before running time-based updates.
const TICK_RATE: Duration = Duration::from_millis(250);

pub(crate) fn as_tui(store: &mut ExpenseStore, currency: &str, start: Route) -> Result<()> {
    let mut app = App::new(currency);
    app.refresh_all(store);
    app.navigate(start, store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(route = %app.route().path(), expenses = store.len(), "tui started");
    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("tui stopped: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut ExpenseStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, borders and the table header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        let event = if event::poll(TICK_RATE)? {
            Some(event::read()?)
        } else {
            None
        };
        step(app, store, event, Instant::now());
    }
    Ok(())
}

/// One pass of the event loop: the event, if any, then time-based updates.
/// Ticks on every pass, whether or not a key arrived.
pub(crate) fn step(app: &mut App, store: &mut ExpenseStore, event: Option<Event>, now: Instant) {
    if let Some(Event::Key(key)) = event {
        handle_key(key, app, store, now);
    }
    app.tick(now, store);
}

fn handle_key(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }
    let handled = match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app, store),
        InputMode::Command => handle_command_input(key, app, store),
        InputMode::Search => handle_search_input(key, app, store),
        InputMode::Form => handle_form_input(key, app, store, now),
    };
    // Storage failures surface in the status bar instead of ending the session.
    if let Err(e) = handled {
        tracing::error!("{e:#}");
        app.set_status(format!("Error: {e:#}"));
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            if app.screen != Screen::Transactions {
                app.switch_screen(Screen::Transactions, store);
            }
            app.input_mode = InputMode::Search;
            app.query.search.clear();
            app.refresh_transactions(store);
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('1') => app.switch_screen(Screen::Dashboard, store),
        KeyCode::Char('2') => app.switch_screen(Screen::AddExpense, store),
        KeyCode::Char('3') => app.switch_screen(Screen::Transactions, store),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            app.switch_screen(screens[next], store);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            app.switch_screen(screens[prev], store);
        }
        KeyCode::Esc => app.set_status(""),
        _ => match app.screen {
            Screen::Dashboard => handle_dashboard_key(key, app, store),
            Screen::AddExpense => {
                if key.code == KeyCode::Enter {
                    app.input_mode = InputMode::Form;
                }
            }
            Screen::Transactions => handle_transactions_key(key, app, store)?,
        },
    }
    Ok(())
}

fn handle_dashboard_key(key: event::KeyEvent, app: &mut App, store: &ExpenseStore) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.move_calendar_cursor(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_calendar_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_calendar_cursor(-7),
        KeyCode::Char('j') | KeyCode::Down => app.move_calendar_cursor(7),
        KeyCode::Enter => app.select_calendar_day(store),
        _ => {}
    }
}

fn handle_transactions_key(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut ExpenseStore,
) -> Result<()> {
    let page = app.visible_rows.max(1);
    let len = app.transactions.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_down(&mut app.transaction_index, &mut app.transaction_scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('g') => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('G') => {
            scroll_to_bottom(&mut app.transaction_index, &mut app.transaction_scroll, len, page);
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page / 2 {
                scroll_down(&mut app.transaction_index, &mut app.transaction_scroll, len, page);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page / 2 {
                scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
            }
        }
        KeyCode::Char('s') => {
            let next = app.query.sort.next();
            sort_by(app, store, next);
        }
        KeyCode::Char('S') => {
            let current = app.query.sort;
            sort_by(app, store, current);
        }
        KeyCode::Char('d') => sort_by(app, store, SortField::Date),
        KeyCode::Char('n') => sort_by(app, store, SortField::Name),
        KeyCode::Char('a') => sort_by(app, store, SortField::Amount),
        KeyCode::Char('c') => sort_by(app, store, SortField::Category),
        KeyCode::Char('x') => {
            commands::handle_command("clear-date", app, store)?;
        }
        KeyCode::Char('D') => app.delete_selected(store)?,
        _ => {}
    }
    Ok(())
}

fn sort_by(app: &mut App, store: &ExpenseStore, field: SortField) {
    app.query.toggle_sort(field);
    app.refresh_transactions(store);
    app.set_status(format!(
        "Sorted by {} {}",
        app.query.sort,
        app.query.direction.arrow()
    ));
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.query.search.clear();
            app.refresh_transactions(store);
        }
        KeyCode::Backspace => {
            app.query.search.pop();
            app.transaction_index = 0;
            app.transaction_scroll = 0;
            app.refresh_transactions(store);
        }
        KeyCode::Char(c) => {
            app.query.search.push(c);
            app.transaction_index = 0;
            app.transaction_scroll = 0;
            app.refresh_transactions(store);
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut ExpenseStore,
    now: Instant,
) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus = app.form.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus = app.form.focus.prev();
        }
        KeyCode::Left if app.form.focus == FormField::Category => {
            app.form.cycle_category(false);
        }
        KeyCode::Right if app.form.focus == FormField::Category => {
            app.form.cycle_category(true);
        }
        KeyCode::Enter => {
            app.submit_form(store, now)?;
        }
        KeyCode::Backspace => {
            app.form.pop_char();
        }
        KeyCode::Char(' ') if app.form.focus == FormField::Category => {
            app.form.cycle_category(true);
        }
        KeyCode::Char(c) => {
            app.form.push_char(c);
        }
        _ => {}
    }
    Ok(())
}
