//! TUI Views module
//!
//! The allocation form and the draft dialog drawn over it.

pub mod form;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::FormLayout;
use crate::models::EntryKind;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = FormLayout::new(frame.area());

    form::render_header(frame, layout.header);
    form::render_budget(frame, app, layout.budget);
    form::render_hints(frame, app, layout.hints);
    form::render_entry_list(frame, app, EntryKind::Income, layout.incomes);
    form::render_entry_list(frame, app, EntryKind::Expense, layout.expenses);
    form::render_footer(frame, app, layout.footer);
    form::render_status_bar(frame, app, layout.status_bar);

    if app.session.is_open() {
        dialogs::entry::render(frame, app);
    }
}
