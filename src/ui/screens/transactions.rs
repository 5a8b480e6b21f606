use chrono::Local;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::listing::SortField;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = title(app);

    if app.transactions.is_empty() {
        let hint = if !app.query.search.is_empty() || app.query.date_filter.is_some() {
            "Press Esc to clear the search or x to clear the date"
        } else {
            "Add one with 2 or :add"
        };
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions found", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(hint, theme::dim_style())),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = SortField::all().iter().map(|field| {
        let label = if *field == app.query.sort {
            format!("{field} {}", app.query.direction.arrow())
        } else {
            field.to_string()
        };
        Cell::from(label).style(theme::header_style())
    });
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let date = expense.date_in(&Local).format("%d/%m/%y %H:%M");
            let category_cell = if i == app.transaction_index {
                Cell::from(expense.category.as_str())
            } else {
                Cell::from(Span::styled(
                    expense.category.as_str(),
                    theme::category_style(expense.category),
                ))
            };

            Row::new(vec![
                Cell::from(format!("  {date}")),
                Cell::from(truncate(&expense.name, 40)),
                Cell::from(format_amount(expense.amount, &app.currency)),
                category_cell,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

fn title(app: &App) -> String {
    let mut title = format!(" Transactions ({}) ", app.transactions.len());
    if let Some(date) = &app.query.date_filter {
        title.push_str(&format!("date: {date} "));
    }
    if !app.query.search.is_empty() {
        title.push_str(&format!("search: '{}' ", app.query.search));
    }
    title
}
