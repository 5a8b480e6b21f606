use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::Category;
use crate::ui::app::App;
use crate::ui::calendar::DayState;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, truncate};
use crate::views::{month_name, percent_of};

const BAR_WIDTH: usize = 16;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Total money
            Constraint::Length(10), // Calendar
            Constraint::Min(5),     // Recent transactions
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Current month
            Constraint::Min(5),    // Month comparison
        ])
        .split(columns[1]);

    render_total_card(f, left[0], app);
    render_calendar(f, left[1], app);
    render_recent(f, left[2], app);
    render_breakdown(f, right[0], app);
    render_comparison(f, right[1], app);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_total_card(f: &mut Frame, area: Rect, app: &App) {
    let count = app.summary.count;
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(app.summary.total, &app.currency),
            Style::default()
                .fg(theme::GREEN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{count} expense{}", if count == 1 { "" } else { "s" }),
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(panel("Total Money Spent"));

    f.render_widget(text, area);
}

fn render_calendar(f: &mut Frame, area: Rect, app: &App) {
    let cal = &app.calendar;
    let mut lines = vec![Line::from(Span::styled(
        " Su  Mo  Tu  We  Th  Fr  Sa",
        theme::dim_style(),
    ))];

    for week in cal.weeks() {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| match cell {
                Some(day) => {
                    let style = if *day == app.calendar_cursor {
                        theme::selected_style().add_modifier(Modifier::BOLD)
                    } else {
                        match cal.day_state(*day) {
                            DayState::Today => Style::default()
                                .fg(theme::ACCENT)
                                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                            DayState::Past => theme::normal_style(),
                            DayState::Future => Style::default().fg(theme::OVERLAY),
                        }
                    };
                    Span::styled(format!(" {day:>2} "), style)
                }
                None => Span::raw("    "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let calendar = Paragraph::new(lines).block(panel(&cal.title()));
    f.render_widget(calendar, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let block = panel("Recent Transactions");
    if app.summary.recent.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No recent transactions", theme::dim_style())),
            Line::from(Span::styled(
                "Press 2 or :add to record one",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(34).max(8);
    let lines: Vec<Line> = app
        .summary
        .recent
        .iter()
        .map(|expense| {
            let date = expense.date_in(&Local).format("%d %b");
            Line::from(vec![
                Span::styled(format!(" {date}  "), theme::dim_style()),
                Span::styled(
                    format!("{:<name_width$}", truncate(&expense.name, name_width)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!(" {:<14}", expense.category.as_str()),
                    theme::category_style(expense.category),
                ),
                Span::styled(
                    format_amount(expense.amount, &app.currency),
                    theme::amount_style(),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let breakdown = &app.summary.breakdown;
    let month_total = breakdown.total();
    let title = format!("{} Expenditure", month_name(app.calendar.month));

    let mut lines: Vec<Line> = Category::all()
        .iter()
        .map(|&category| {
            let share = breakdown.share(category);
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", category.as_str()),
                    theme::category_style(category),
                ),
                Span::styled(
                    progress_bar(share, BAR_WIDTH),
                    theme::category_style(category),
                ),
                Span::styled(format!(" {share:>3}%  "), theme::dim_style()),
                Span::styled(
                    format_amount(breakdown.get(category), &app.currency),
                    theme::normal_style(),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" This month: ", theme::dim_style()),
        Span::styled(
            format_amount(month_total, &app.currency),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));

    f.render_widget(Paragraph::new(lines).block(panel(&title)), area);
}

fn render_comparison(f: &mut Frame, area: Rect, app: &App) {
    let months = &app.summary.months;
    let max = months
        .iter()
        .map(|m| m.total)
        .max()
        .unwrap_or(Decimal::ZERO);

    let lines: Vec<Line> = months
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let pct = percent_of(month.total, max);
            let label_style = if i == 0 {
                theme::title_style()
            } else {
                theme::normal_style()
            };
            Line::from(vec![
                Span::styled(format!(" {:<16}", month.label()), label_style),
                Span::styled(
                    progress_bar(pct, BAR_WIDTH),
                    Style::default().fg(theme::YELLOW),
                ),
                Span::styled("  ", theme::dim_style()),
                Span::styled(
                    format_amount(month.total, &app.currency),
                    theme::normal_style(),
                ),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(panel("Monthly Comparison")),
        area,
    );
}
