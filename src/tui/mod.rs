//! Terminal User Interface module
//!
//! The journal window: a table of trades with Sort, Add and Quit actions,
//! an Add Trade dialog, and a help overlay.

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
