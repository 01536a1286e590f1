//! Terminal User Interface module
//!
//! An interactive allocation form built on ratatui: type a budget, add
//! income and expense rows, and watch the remaining balance update.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
