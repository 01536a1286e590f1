//! Entry dialog
//!
//! The add-entry form for either column. It edits the session's draft and
//! only touches the ledger on confirm.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ledger::DraftField;
use crate::models::EntryKind;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::AmountInput;

/// Handle a key while the form is open; returns true when consumed
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.cancel_draft();
        }
        KeyCode::Enter => {
            app.confirm_draft();
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if let Some(draft) = app.session.draft_mut() {
                draft.next_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(draft) = app.session.draft_mut() {
                draft.backspace();
            }
            app.draft_error = None;
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(draft) = app.session.draft_mut() {
                draft.clear_field();
            }
        }
        KeyCode::Char(c) => {
            if let Some(draft) = app.session.draft_mut() {
                draft.insert_char(c);
            }
            app.draft_error = None;
        }
        _ => return false,
    }
    true
}

/// Render the entry dialog
pub fn render(frame: &mut Frame, app: &App) {
    let (Some(kind), Some(draft)) = (app.session.kind(), app.session.draft()) else {
        return;
    };

    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let (title, accent) = match kind {
        EntryKind::Income => (" Tambah Pemasukan ", Color::Green),
        EntryKind::Expense => (" Tambah Pengeluaran ", Color::Red),
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        AmountInput::new()
            .label("Label ")
            .content(draft.label.as_str())
            .placeholder("Keterangan")
            .focused(draft.focused == DraftField::Label),
        chunks[0],
    );
    frame.render_widget(
        AmountInput::new()
            .label("Jumlah")
            .content(draft.amount_input.as_str())
            .placeholder("0")
            .focused(draft.focused == DraftField::Amount)
            .right_aligned(true),
        chunks[2],
    );

    if let Some(ref error) = app.draft_error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Simpan  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Batal  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Pindah"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}
