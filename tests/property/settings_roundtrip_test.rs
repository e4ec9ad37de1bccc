//! Property-based tests for AppSettings persistence.
//!
//! These tests verify that AppSettings can be serialized to JSON and read back
//! without data loss, both in memory and through the SettingsEngine on disk.

use hotroute::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use hotroute::types::settings::{
    AppSettings, DisplaySettings, ExportSettings, ImportSettings, WindowSettings,
};
use proptest::prelude::*;
use tempfile::TempDir;

// --- Arbitrary strategies for all settings sub-types ---

fn arb_window_settings() -> impl Strategy<Value = WindowSettings> {
    ("[A-Za-z][A-Za-z0-9 ]{0,20}", 200u32..=4000, 200u32..=4000, 100u32..=1000, 100u32..=1000).prop_map(
        |(title, width, height, min_width, min_height)| WindowSettings {
            title,
            width,
            height,
            min_width,
            min_height,
        },
    )
}

fn arb_display_settings() -> impl Strategy<Value = DisplaySettings> {
    (1u64..=600, 100u64..=60_000).prop_map(|(reveal_timeout_secs, notification_timeout_ms)| {
        DisplaySettings {
            reveal_timeout_secs,
            notification_timeout_ms,
        }
    })
}

fn arb_app_settings() -> impl Strategy<Value = AppSettings> {
    (
        arb_window_settings(),
        arb_display_settings(),
        any::<bool>(),
        proptest::option::of("/[a-z0-9_/]{1,30}"),
        proptest::option::of("https://[a-z]{3,12}\\.(com|org|dev)"),
        prop_oneof![Just("info"), Just("debug"), Just("warn"), Just("hotroute=trace")],
    )
        .prop_map(
            |(window, display, dedupe_within_batch, directory, help_url, log_filter)| AppSettings {
                window,
                display,
                import: ImportSettings { dedupe_within_batch },
                export: ExportSettings { directory },
                help_url,
                log_filter: log_filter.to_string(),
            },
        )
}

// **Settings serialization round-trip**
//
// *For any* valid `AppSettings`, serializing to JSON then deserializing
// SHALL produce an equivalent struct.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_serialization_roundtrip(settings in arb_app_settings()) {
        let json = serde_json::to_string(&settings)
            .expect("Serialization to JSON should succeed for any valid AppSettings");

        let deserialized: AppSettings = serde_json::from_str(&json)
            .expect("Deserialization from JSON should succeed for valid JSON");

        prop_assert_eq!(deserialized, settings, "Deserialized AppSettings must equal the original");
    }

    #[test]
    fn settings_set_value_survives_reload(timeout in 1u64..=600, dedupe in any::<bool>()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.set_value("display.reveal_timeout_secs", serde_json::json!(timeout)).unwrap();
        engine.set_value("import.dedupe_within_batch", serde_json::json!(dedupe)).unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        let settings = reloaded.load().unwrap();
        prop_assert_eq!(settings.display.reveal_timeout_secs, timeout);
        prop_assert_eq!(settings.import.dedupe_within_batch, dedupe);
    }
}
