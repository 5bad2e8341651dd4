use tokio::sync::mpsc;

use lockwatch_types::{
    ActivityRecord, DeviceInfo, Section, SettingsInfo, compose_home_sections,
};

use super::Action;

/// UI-specific transient state
#[derive(Default)]
pub struct UiState {
    /// Is help overlay visible?
    pub help_visible: bool,

    /// Error message to display (if any)
    pub error_message: Option<String>,

    /// Scroll position in the activity log
    pub activity_scroll: usize,
}

/// Application state
pub struct AppState {
    /// Lock state as supplied at startup
    pub device: DeviceInfo,

    /// Credential counters as supplied at startup
    pub settings: SettingsInfo,

    /// Activity log entries, display order
    pub records: Vec<ActivityRecord>,

    /// Composed home screen sections, immutable for the run
    pub sections: Vec<Section>,

    /// Transient UI state
    pub ui_state: UiState,

    /// Should the application exit?
    pub should_quit: bool,

    /// Channel for sending actions back into the event loop
    pub action_tx: mpsc::UnboundedSender<Action>,
}

impl AppState {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        device: DeviceInfo,
        settings: SettingsInfo,
        records: Vec<ActivityRecord>,
    ) -> Self {
        let sections = compose_home_sections(&device, &settings, &records);
        Self {
            device,
            settings,
            records,
            sections,
            ui_state: UiState::default(),
            should_quit: false,
            action_tx,
        }
    }

    /// Show an error message in the status bar
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui_state.error_message = Some(message.into());
    }

    /// Dismiss the current error message
    pub fn dismiss_error(&mut self) {
        self.ui_state.error_message = None;
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.ui_state.activity_scroll = self.ui_state.activity_scroll.saturating_sub(n);
    }

    /// Scroll down without capping; the renderer clamps to the actual
    /// record count for the current viewport.
    pub fn scroll_down(&mut self, n: usize) {
        self.ui_state.activity_scroll = self.ui_state.activity_scroll.saturating_add(n);
    }

    pub fn scroll_to_top(&mut self) {
        self.ui_state.activity_scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.ui_state.activity_scroll = usize::MAX;
    }
}
