//! Shared types for lockwatch
//!
//! This crate contains the data structures that describe a smart lock's
//! state, the display rules derived from them, and the composer that
//! assembles the home screen's section list.

use ratatui::style::Color;
use serde::Deserialize;

/// Placeholder shown when no device name is known
pub const NO_DEVICE_PLACEHOLDER: &str = "no device";

/// Label shown when the battery voltage has not been reported
pub const BATTERY_UNKNOWN_LABEL: &str = "unknown";

/// Full-scale voltage for the battery fill bar
pub const BATTERY_MAX_VOLTS: f64 = 5.0;

/// Voltage above which the battery is considered healthy
pub const BATTERY_HEALTHY_VOLTS: f64 = 3.0;

// ============================================================================
// Device Types
// ============================================================================

/// Current state of the paired lock
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DeviceInfo {
    pub device_name: String,
    /// Battery voltage in volts; 0.0 means "not reported"
    pub battery_level: f64,
    pub locked: bool,
}

impl DeviceInfo {
    pub fn new(device_name: impl Into<String>, battery_level: f64, locked: bool) -> Self {
        Self {
            device_name: device_name.into(),
            battery_level,
            locked,
        }
    }

    /// Device name, or the placeholder when none is set
    pub fn display_name(&self) -> &str {
        if self.device_name.is_empty() {
            NO_DEVICE_PLACEHOLDER
        } else {
            &self.device_name
        }
    }

    /// Whether a battery reading is available at all
    pub fn battery_known(&self) -> bool {
        self.battery_level > 0.0
    }

    /// Display text for the voltage, e.g. "4.2V", or "unknown"
    pub fn battery_label(&self) -> String {
        if self.battery_known() {
            format!("{}V", self.battery_level)
        } else {
            BATTERY_UNKNOWN_LABEL.to_string()
        }
    }

    /// Fill percentage for the battery bar, scaled against 5.0 V
    pub fn battery_percent(&self) -> u16 {
        if !self.battery_known() {
            return 0;
        }
        let ratio = self.battery_level.min(BATTERY_MAX_VOLTS) / BATTERY_MAX_VOLTS;
        (ratio * 100.0).round() as u16
    }

    /// Above the 3 V threshold?
    pub fn battery_healthy(&self) -> bool {
        self.battery_level > BATTERY_HEALTHY_VOLTS
    }

    /// Display color for the voltage text and fill bar
    pub fn battery_color(&self) -> Color {
        if self.battery_healthy() {
            Color::Green
        } else {
            Color::Red
        }
    }

    /// Lock state label
    pub fn lock_label(&self) -> &'static str {
        if self.locked { "locked" } else { "unlocked" }
    }

    /// Display color tied to the lock state label
    pub fn lock_color(&self) -> Color {
        if self.locked { Color::Green } else { Color::Red }
    }
}

/// Credential counters shown on the settings shortcuts
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
pub struct SettingsInfo {
    pub password_count: u32,
    /// Days since the newest password was set
    pub password_age_days: u32,
    pub fingerprint_count: u32,
    pub nfc_card_count: u32,
}

impl SettingsInfo {
    pub fn password_summary(&self) -> String {
        format!(
            "{} active · set {} days ago",
            self.password_count, self.password_age_days
        )
    }

    pub fn fingerprint_summary(&self) -> String {
        format!("{} enrolled", self.fingerprint_count)
    }

    pub fn nfc_summary(&self) -> String {
        format!("{} cards registered", self.nfc_card_count)
    }
}

/// A single entry in the lock's activity log
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActivityRecord {
    pub record_time: String,
    pub record_text: String,
    pub success: bool,
}

impl ActivityRecord {
    pub fn new(
        record_time: impl Into<String>,
        record_text: impl Into<String>,
        success: bool,
    ) -> Self {
        Self {
            record_time: record_time.into(),
            record_text: record_text.into(),
            success,
        }
    }

    pub fn outcome_label(&self) -> &'static str {
        if self.success { "success" } else { "failure" }
    }

    pub fn outcome_color(&self) -> Color {
        if self.success { Color::Green } else { Color::Red }
    }
}

// ============================================================================
// Home Screen Sections
// ============================================================================

/// Display kind of a home screen section, carrying its payload.
///
/// Marked non-exhaustive so that renderers keep a wildcard arm: a kind
/// they do not recognize renders nothing rather than failing.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SectionKind {
    DeviceBar(DeviceInfo),
    QuickActions,
    SettingsGrid(SettingsInfo),
    ActivityLog(Vec<ActivityRecord>),
    ContactFooter,
}

/// A section descriptor: an identifying label (never rendered) plus the
/// kind tag that selects the rendering routine.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
}

impl Section {
    pub fn new(title: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }
}

/// Assemble the home screen's section list in its fixed order:
/// device status, primary actions, settings grid, activity log,
/// contact footer.
pub fn compose_home_sections(
    device: &DeviceInfo,
    settings: &SettingsInfo,
    records: &[ActivityRecord],
) -> Vec<Section> {
    vec![
        Section::new("device-bar", SectionKind::DeviceBar(device.clone())),
        Section::new("quick-actions", SectionKind::QuickActions),
        Section::new("settings-grid", SectionKind::SettingsGrid(settings.clone())),
        Section::new("activity-log", SectionKind::ActivityLog(records.to_vec())),
        Section::new("contact-footer", SectionKind::ContactFooter),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_placeholder() {
        let device = DeviceInfo::new("", 4.2, true);
        assert_eq!(device.display_name(), NO_DEVICE_PLACEHOLDER);

        let device = DeviceInfo::new("Lock-A", 4.2, true);
        assert_eq!(device.display_name(), "Lock-A");
    }

    #[test]
    fn test_battery_label() {
        let device = DeviceInfo::new("Lock-A", 4.2, true);
        assert_eq!(device.battery_label(), "4.2V");

        let device = DeviceInfo::new("Lock-A", 0.0, true);
        assert_eq!(device.battery_label(), BATTERY_UNKNOWN_LABEL);
    }

    #[test]
    fn test_battery_percent() {
        let device = DeviceInfo::new("Lock-A", 4.2, true);
        assert_eq!(device.battery_percent(), 84);

        // Clamped at full scale
        let device = DeviceInfo::new("Lock-A", 6.0, true);
        assert_eq!(device.battery_percent(), 100);

        // Unreported voltage draws an empty bar
        let device = DeviceInfo::new("Lock-A", 0.0, true);
        assert_eq!(device.battery_percent(), 0);
    }

    #[test]
    fn test_battery_health_threshold() {
        let device = DeviceInfo::new("Lock-A", 3.1, true);
        assert!(device.battery_healthy());
        assert_eq!(device.battery_color(), Color::Green);

        // Exactly at the threshold counts as low
        let device = DeviceInfo::new("Lock-A", 3.0, true);
        assert!(!device.battery_healthy());
        assert_eq!(device.battery_color(), Color::Red);

        let device = DeviceInfo::new("Lock-A", 0.0, true);
        assert!(!device.battery_healthy());
    }

    #[test]
    fn test_lock_labels() {
        let device = DeviceInfo::new("Lock-A", 4.2, true);
        assert_eq!(device.lock_label(), "locked");
        assert_eq!(device.lock_color(), Color::Green);

        let device = DeviceInfo::new("Lock-A", 4.2, false);
        assert_eq!(device.lock_label(), "unlocked");
        assert_eq!(device.lock_color(), Color::Red);
    }

    #[test]
    fn test_settings_summaries_with_zero_counts() {
        let settings = SettingsInfo::default();
        assert_eq!(settings.password_summary(), "0 active · set 0 days ago");
        assert_eq!(settings.fingerprint_summary(), "0 enrolled");
        assert_eq!(settings.nfc_summary(), "0 cards registered");
    }

    #[test]
    fn test_record_outcome() {
        let record = ActivityRecord::new("2022-12-14 22:31:12", "fingerprint unlock", true);
        assert_eq!(record.outcome_label(), "success");
        assert_eq!(record.outcome_color(), Color::Green);

        let record = ActivityRecord::new("2022-12-14 22:31:12", "keypad unlock", false);
        assert_eq!(record.outcome_label(), "failure");
        assert_eq!(record.outcome_color(), Color::Red);
    }

    #[test]
    fn test_compose_order_is_fixed() {
        let device = DeviceInfo::new("Lock-A", 4.2, true);
        let settings = SettingsInfo::default();
        let records = vec![ActivityRecord::new("t", "auto lock", true)];

        let sections = compose_home_sections(&device, &settings, &records);
        assert_eq!(sections.len(), 5);
        assert!(matches!(sections[0].kind, SectionKind::DeviceBar(_)));
        assert!(matches!(sections[1].kind, SectionKind::QuickActions));
        assert!(matches!(sections[2].kind, SectionKind::SettingsGrid(_)));
        assert!(matches!(sections[3].kind, SectionKind::ActivityLog(_)));
        assert!(matches!(sections[4].kind, SectionKind::ContactFooter));
    }

    #[test]
    fn test_compose_preserves_record_order() {
        let device = DeviceInfo::new("Lock-A", 4.2, true);
        let settings = SettingsInfo::default();
        let records = vec![
            ActivityRecord::new("t1", "first", true),
            ActivityRecord::new("t2", "second", false),
        ];

        let sections = compose_home_sections(&device, &settings, &records);
        match &sections[3].kind {
            SectionKind::ActivityLog(rs) => {
                assert_eq!(rs.len(), 2);
                assert_eq!(rs[0].record_text, "first");
                assert_eq!(rs[1].record_text, "second");
            }
            other => panic!("expected activity log, got {:?}", other),
        }
    }

    #[test]
    fn test_compose_with_empty_records() {
        let device = DeviceInfo::new("", 0.0, false);
        let settings = SettingsInfo::default();

        let sections = compose_home_sections(&device, &settings, &[]);
        assert_eq!(sections.len(), 5);
        match &sections[3].kind {
            SectionKind::ActivityLog(rs) => assert!(rs.is_empty()),
            other => panic!("expected activity log, got {:?}", other),
        }
    }
}
