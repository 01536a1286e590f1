//! Allocation form view
//!
//! Header, budget field, the income and expense lists, and the footer with
//! the remaining balance.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{EntryKind, Standing};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::AmountInput;

/// Color for a standing
pub fn standing_color(standing: Standing) -> Color {
    match standing {
        Standing::Surplus => Color::Green,
        Standing::Deficit => Color::Red,
        Standing::Balanced => Color::Blue,
    }
}

/// Render the title header
pub fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "ALOKASI",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Magenta)),
    );
    frame.render_widget(header, area);
}

/// Render the budget field
pub fn render_budget(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Budget && !app.session.is_open();
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        AmountInput::new()
            .label("ANGGARAN")
            .content(app.budget_input.as_str())
            .placeholder("0")
            .focused(is_focused)
            .right_aligned(true),
        inner,
    );
}

/// Render the key hints under the budget field
pub fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.ledger.is_budget_set() {
        Line::from(vec![
            Span::styled("[+]", Style::default().fg(Color::Green)),
            Span::raw(" Pemasukan  "),
            Span::styled("[-]", Style::default().fg(Color::Red)),
            Span::raw(" Pengeluaran  "),
            Span::styled("[d]", Style::default().fg(Color::Magenta)),
            Span::raw(" Hapus  "),
            Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
            Span::raw(" Pindah  "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw(" Keluar"),
        ])
    } else {
        Line::from(Span::styled(
            "Ketik anggaran untuk mulai",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(hints), area);
}

/// Render one entry column; only the frame is drawn until a budget is entered
pub fn render_entry_list(frame: &mut Frame, app: &App, kind: EntryKind, area: Rect) {
    if !app.ledger.is_budget_set() {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let is_focused = app.focused_panel.kind() == Some(kind) && !app.session.is_open();
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let accent = match kind {
        EntryKind::Income => Color::Green,
        EntryKind::Expense => Color::Red,
    };

    let total = app.money_format.format(app.ledger.total(kind));
    let block = Block::default()
        .title(format!(" {} ", kind.heading()))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(format!(" {} ", total)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let entries = app.ledger.entries(kind);
    if entries.is_empty() {
        let text = Paragraph::new("Belum ada")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.label.clone()),
                Cell::from(
                    Line::from(app.money_format.format(entry.amount)).alignment(Alignment::Right),
                )
                .style(Style::default().fg(accent)),
            ])
        })
        .collect();

    let widths = [Constraint::Min(10), Constraint::Length(16)];

    let mut table = Table::new(rows, widths).block(block);
    if is_focused {
        table = table
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
    }

    let mut state = TableState::default();
    state.select(Some(app.selected_index(kind)));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the footer; empty until a budget is entered
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if !app.ledger.is_budget_set() {
        frame.render_widget(block, area);
        return;
    }

    let remaining = app.ledger.compute_remaining();
    let standing = app.ledger.standing();
    let color = standing_color(standing);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", standing.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                app.money_format.format(remaining),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(standing.headline(), Style::default().fg(color))),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block.border_style(Style::default().fg(color))),
        area,
    );
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    // totals are hidden along with the lists while no budget is set
    if app.ledger.is_budget_set() {
        spans.push(Span::styled(
            format!(" {} ", app.money_format.format(app.ledger.total(EntryKind::Income))),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw("│"));
        spans.push(Span::styled(
            format!(" {} ", app.money_format.format(app.ledger.total(EntryKind::Expense))),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::raw("│"));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
        area,
    );
}
