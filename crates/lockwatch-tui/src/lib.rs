//! TUI components for lockwatch
//!
//! This crate provides the terminal user interface for lockwatch,
//! including state management, keybindings, event handling, and the
//! home screen's section renderers.

pub mod app;
pub mod config;
pub mod tui;
pub mod ui;

pub use app::{Action, AppState, UiState};
pub use config::{KeyBinding, KeyBindings, KeyContext};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{HelpOverlay, StatusBar, home_hints};
pub use ui::screens::HomeScreen;
pub use ui::{Layout, Theme};
