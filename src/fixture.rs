//! Built-in sample data and TOML fixture loading.
//!
//! A real product would populate these structures from a device link;
//! here they come from a built-in snapshot or a user-supplied TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use lockwatch_types::{ActivityRecord, DeviceInfo, SettingsInfo};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything the home screen needs for one run
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    pub device: DeviceInfo,
    pub settings: SettingsInfo,
    #[serde(default)]
    pub records: Vec<ActivityRecord>,
}

/// Load a snapshot from a TOML file
pub fn load(path: &Path) -> Result<Snapshot, FixtureError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: display.clone(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| FixtureError::Parse {
        path: display,
        source,
    })
}

/// Built-in sample snapshot used when no fixture file is given
pub fn sample() -> Snapshot {
    Snapshot {
        device: DeviceInfo::new("SmartLocker V1", 4.2, true),
        settings: SettingsInfo {
            password_count: 2,
            password_age_days: 3,
            fingerprint_count: 1,
            nfc_card_count: 2,
        },
        records: vec![
            ActivityRecord::new("2022-12-14 22:31:12", "fingerprint unlock", true),
            ActivityRecord::new("2022-12-14 14:32:53", "auto lock", true),
            ActivityRecord::new("2022-12-14 14:32:11", "keypad unlock", true),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_snapshot() {
        let snapshot = sample();
        assert_eq!(snapshot.device.device_name, "SmartLocker V1");
        assert!(snapshot.device.locked);
        assert_eq!(snapshot.records.len(), 3);
    }

    #[test]
    fn test_parse_fixture_toml() {
        let text = r#"
            [device]
            device_name = "Lock-A"
            battery_level = 4.2
            locked = true

            [settings]
            password_count = 2
            password_age_days = 3
            fingerprint_count = 1
            nfc_card_count = 2

            [[records]]
            record_time = "2022-12-14 22:31:12"
            record_text = "fingerprint unlock"
            success = true
        "#;

        let snapshot: Snapshot = toml::from_str(text).unwrap();
        assert_eq!(snapshot.device.device_name, "Lock-A");
        assert_eq!(snapshot.settings.nfc_card_count, 2);
        assert_eq!(snapshot.records.len(), 1);
        assert!(snapshot.records[0].success);
    }

    #[test]
    fn test_records_default_to_empty() {
        let text = r#"
            [device]
            device_name = ""
            battery_level = 0.0
            locked = false

            [settings]
            password_count = 0
            password_age_days = 0
            fingerprint_count = 0
            nfc_card_count = 0
        "#;

        let snapshot: Snapshot = toml::from_str(text).unwrap();
        assert!(snapshot.records.is_empty());
    }
}
