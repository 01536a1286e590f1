//! Layout definitions for the TUI
//!
//! The form is a single column: header, budget field, hints, the two entry
//! lists side by side, the standing footer and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the allocation form
pub struct FormLayout {
    /// Title header
    pub header: Rect,
    /// Budget input
    pub budget: Rect,
    /// Key hints
    pub hints: Rect,
    /// Income list
    pub incomes: Rect,
    /// Expense list
    pub expenses: Rect,
    /// Remaining balance and headline
    pub footer: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl FormLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Budget
                Constraint::Length(1), // Hints
                Constraint::Min(5),    // Lists
                Constraint::Length(4), // Footer
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[3]);

        Self {
            header: vertical[0],
            budget: vertical[1],
            hints: vertical[2],
            incomes: lists[0],
            expenses: lists[1],
            footer: vertical[4],
            status_bar: vertical[5],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
