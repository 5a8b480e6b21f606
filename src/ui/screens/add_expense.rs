use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::ui::app::{App, InputMode};
use crate::ui::form::{FormField, FormStatus};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.min(64);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let form_area = Rect::new(x, area.y, width, area.height.min(16));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Add New Expense ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(form_area);
    f.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Category
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let editing = app.input_mode == InputMode::Form;
    let form = &app.form;

    render_text_field(
        f,
        rows[0],
        "Expense Name",
        &form.name,
        "e.g. Groceries",
        editing && form.focus == FormField::Name,
    );
    render_text_field(
        f,
        rows[1],
        &format!("Amount ({})", app.currency),
        &form.amount,
        "0.00",
        editing && form.focus == FormField::Amount,
    );
    render_category_picker(f, rows[2], app, editing && form.focus == FormField::Category);

    let message = match form.status {
        FormStatus::Idle => Line::from(""),
        FormStatus::Rejected(_) => Line::from(Span::styled(
            form.message().unwrap_or_default(),
            theme::error_style(),
        )),
        FormStatus::Accepted { .. } => Line::from(Span::styled(
            form.message().unwrap_or_default(),
            theme::success_style(),
        )),
    };
    f.render_widget(Paragraph::new(message).centered(), rows[3]);

    let hints = if editing {
        "Tab/Up/Down field | Left/Right category | Enter add | Esc leave"
    } else {
        "Enter to edit the form"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, theme::dim_style()))).centered(),
        rows[5],
    );
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let border = if focused { theme::ACCENT } else { theme::OVERLAY };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {label} "), theme::dim_style()))
}

fn render_text_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let block = field_block(label, focused);
    let inner = block.inner(area);
    let content = if value.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(theme::OVERLAY),
        ))
    } else {
        Line::from(Span::styled(value.to_string(), theme::normal_style()))
    };
    f.render_widget(Paragraph::new(content).block(block), area);

    if focused {
        let offset = value.chars().count() as u16;
        f.set_cursor_position((inner.x + offset.min(inner.width.saturating_sub(1)), inner.y));
    }
}

fn render_category_picker(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let selected = app.form.selected_category();
    let mut spans = Vec::new();
    if selected.is_none() {
        spans.push(Span::styled(
            "Select category  ",
            Style::default().fg(theme::OVERLAY),
        ));
    }
    for category in Category::all() {
        let style = if Some(*category) == selected {
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::category_color(*category))
                .add_modifier(Modifier::BOLD)
        } else {
            theme::category_style(*category)
        };
        spans.push(Span::styled(format!(" {category} "), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block("Category", focused)),
        area,
    );
}
