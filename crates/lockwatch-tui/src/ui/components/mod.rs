mod activity_log;
mod contact_footer;
mod device_bar;
mod help_overlay;
mod quick_actions;
mod settings_grid;
mod status_bar;

pub use activity_log::ActivityLog;
pub use contact_footer::ContactFooter;
pub use device_bar::DeviceBar;
pub use help_overlay::HelpOverlay;
pub use quick_actions::QuickActions;
pub use settings_grid::SettingsGrid;
pub use status_bar::{StatusBar, home_hints};
