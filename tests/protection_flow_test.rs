//! End-to-end walk through the passcode flow and the settings slot,
//! mirroring how the dashboard drives both stores in one session.

use rentflow::config::{AppSettings, SettingsStore};
use rentflow::protection::{ProtectionGate, Verification};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    DeleteTenant(u32),
    SaveSettings,
}

#[test]
fn test_protected_delete_after_failed_attempt() {
    let mut gate: ProtectionGate<Action> = ProtectionGate::new("1234");

    // Operator clicks delete: the action is parked, a challenge opens
    assert_eq!(gate.guard(Action::DeleteTenant(7)), None);
    assert!(gate.challenge_open());

    // First attempt is wrong: error shown, nothing released
    assert_eq!(gate.verify("0000"), Verification::Mismatch);
    assert!(!gate.is_unlocked());
    assert!(gate.challenge_open());

    // Second attempt is right: the parked delete is released exactly once
    match gate.verify("1234") {
        Verification::Unlocked(released) => {
            assert_eq!(released, Some(Action::DeleteTenant(7)))
        }
        Verification::Mismatch => panic!("correct passcode was rejected"),
    }
    assert!(gate.is_unlocked());
    assert!(!gate.challenge_open());

    // Rest of the session: protected actions run without a challenge
    assert_eq!(gate.guard(Action::SaveSettings), Some(Action::SaveSettings));
}

#[test]
fn test_dismissed_challenge_drops_the_action() {
    let mut gate: ProtectionGate<Action> = ProtectionGate::new("1234");

    gate.guard(Action::DeleteTenant(1));
    gate.dismiss();
    assert!(!gate.is_unlocked());

    // Unlocking later must not run the abandoned delete
    assert_eq!(gate.verify("1234"), Verification::Unlocked(None));
}

#[test]
fn test_settings_survive_a_session_restart() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("app_settings.json");

    // Session one: operator renames the app and a tab, save is persisted
    {
        let mut store = SettingsStore::open(&slot);
        let mut next = store.settings().clone();
        next.app_name = "Sunrise Flats".to_string();
        next.tab_names.whatsapp = "Messages".to_string();
        store.write(next);
    }

    // Session two: a fresh store over the same slot sees the saved record
    let store = SettingsStore::open(&slot);
    assert_eq!(store.settings().app_name, "Sunrise Flats");
    assert_eq!(store.settings().tab_names.whatsapp, "Messages");
    assert_eq!(store.settings().tab_names.overview, "Overview");
}

#[test]
fn test_corrupt_slot_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("app_settings.json");
    std::fs::write(&slot, "definitely { not json").unwrap();

    let store = SettingsStore::open(&slot);
    assert_eq!(*store.settings(), AppSettings::default());
    assert_eq!(store.settings().app_name, "RentFlow");
    assert_eq!(
        store.settings().footer_name,
        "© 2024 RentFlow. All Rights Reserved."
    );
}
