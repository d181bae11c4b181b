//! Integration tests for medtrack-core
//!
//! These tests run the services against the real JSON file store in a
//! temporary directory.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use tempfile::TempDir;

use medtrack_core::adapters::json_file::JsonFileStore;
use medtrack_core::config::Config;
use medtrack_core::domain::{REQUIRED_FIELDS_MESSAGE, SESSION_KEY};
use medtrack_core::ports::KeyValueStore;
use medtrack_core::services::{MedicationService, Navigation};
use medtrack_core::{Error, Medication, MedtrackContext, Route, SessionPolicy};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a context rooted in a fresh temp directory
fn create_test_context(temp_dir: &TempDir) -> MedtrackContext {
    MedtrackContext::new(temp_dir.path()).expect("Failed to create context")
}

fn med(name: &str, dosage: &str, frequency: &str) -> Medication {
    Medication::new(name, dosage, frequency).unwrap()
}

// ============================================================================
// Medication list scenarios
// ============================================================================

#[test]
fn test_first_medication_for_new_user() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_test_context(&temp_dir);
    ctx.session_service.login("a@x.com").unwrap();

    let mut view = ctx.medications_view().unwrap();
    assert!(view.medications().is_empty());

    view.add("Aspirin", "100mg", "Daily").unwrap();
    assert_eq!(view.medications(), &[med("Aspirin", "100mg", "Daily")]);
    assert!(view.form.is_clear());

    let raw = ctx.store.get_item("medications_a@x.com").unwrap().unwrap();
    assert_eq!(raw, r#"[{"name":"Aspirin","dosage":"100mg","frequency":"Daily"}]"#);

    // A fresh context over the same directory sees the same list
    let reopened = create_test_context(&temp_dir);
    let view = reopened.medications_view().unwrap();
    assert_eq!(view.medications(), &[med("Aspirin", "100mg", "Daily")]);
}

#[test]
fn test_incomplete_submit_does_not_touch_storage() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_test_context(&temp_dir);
    ctx.session_service.login("a@x.com").unwrap();

    let mut view = ctx.medications_view().unwrap();
    let err = view.add("", "100mg", "Daily").unwrap_err();

    assert!(matches!(err, Error::Validation(ref msg) if msg == REQUIRED_FIELDS_MESSAGE));
    assert!(view.medications().is_empty());
    assert!(ctx.store.get_item("medications_a@x.com").unwrap().is_none());
}

#[test]
fn test_opening_the_view_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_test_context(&temp_dir);
    ctx.session_service.login("a@x.com").unwrap();

    let _view = ctx.medications_view().unwrap();
    assert_eq!(ctx.store.keys().unwrap(), vec![SESSION_KEY.to_string()]);
}

#[test]
fn test_save_then_load_preserves_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(&temp_dir.path().join("store.json")).unwrap());
    let service = MedicationService::new(store);

    let list = vec![
        med("Aspirin", "100mg", "Daily"),
        med("Metformin", "500mg", "Twice a day"),
        med("Aspirin", "100mg", "Daily"),
        med("Ibuprofen 💊", "200 mg", "As needed"),
    ];
    service.save("a@x.com", &list).unwrap();
    assert_eq!(service.load("a@x.com").unwrap(), list);

    // Saving replaces, it never merges
    service.save("a@x.com", &list[..1]).unwrap();
    assert_eq!(service.load("a@x.com").unwrap(), list[..1].to_vec());
}

#[test]
fn test_users_do_not_see_each_other() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_test_context(&temp_dir);

    ctx.session_service.login("a@x.com").unwrap();
    ctx.medications_view().unwrap().add("Aspirin", "100mg", "Daily").unwrap();

    ctx.session_service.login("b@x.com").unwrap();
    let mut view = ctx.medications_view().unwrap();
    assert!(view.medications().is_empty());
    view.add("Metformin", "500mg", "Daily").unwrap();

    let service = &ctx.medication_service;
    assert_eq!(service.load("a@x.com").unwrap(), vec![med("Aspirin", "100mg", "Daily")]);
    assert_eq!(service.load("b@x.com").unwrap(), vec![med("Metformin", "500mg", "Daily")]);
}

#[test]
fn test_corrupt_list_is_recovered_on_next_add() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_test_context(&temp_dir);
    ctx.session_service.login("a@x.com").unwrap();
    ctx.store.set_item("medications_a@x.com", "{oops").unwrap();

    let mut view = ctx.medications_view().unwrap();
    assert!(view.medications().is_empty());
    view.add("Aspirin", "100mg", "Daily").unwrap();

    assert_eq!(
        ctx.medication_service.load_strict("a@x.com").unwrap(),
        vec![med("Aspirin", "100mg", "Daily")]
    );
}

// ============================================================================
// Session guard and routing
// ============================================================================

#[test]
fn test_medications_view_requires_login() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_test_context(&temp_dir);

    assert!(matches!(ctx.medications_view(), Err(Error::Unauthorized)));
    assert_eq!(
        ctx.router.navigate("/medications").unwrap(),
        Navigation::Redirect { from: Route::Medications, to: Route::Login }
    );

    ctx.session_service.login("a@x.com").unwrap();
    assert_eq!(
        ctx.router.navigate("/medications").unwrap(),
        Navigation::Render { route: Route::Medications }
    );

    ctx.session_service.logout().unwrap();
    assert_eq!(ctx.router.navigate("/dashboard").unwrap().target(), Route::Login);
}

#[test]
fn test_presence_policy_lets_malformed_session_through_the_guard_only() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_test_context(&temp_dir);
    ctx.store.set_item(SESSION_KEY, "not a session").unwrap();

    // The guard only checks presence...
    assert_eq!(ctx.router.navigate("/dashboard").unwrap().target(), Route::Dashboard);
    // ...but there is no email to scope medications by
    assert!(matches!(ctx.medications_view(), Err(Error::Unauthorized)));
}

#[test]
fn test_strict_policy_from_settings_rejects_malformed_session() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("settings.json"),
        r#"{"app":{"sessionPolicy":"strict"}}"#,
    )
    .unwrap();

    let mut config = Config::load(temp_dir.path()).unwrap();
    // Pin the policy in case MEDTRACK_SESSION_POLICY is set in the environment
    config.session_policy = SessionPolicy::Strict;
    let store = Arc::new(JsonFileStore::new(&config.store_path(temp_dir.path())).unwrap());
    let ctx = MedtrackContext::with_store(config, store);

    ctx.store.set_item(SESSION_KEY, r#"{"name":"no email"}"#).unwrap();
    assert_eq!(ctx.router.navigate("/medications").unwrap().target(), Route::Login);

    ctx.session_service.login("a@x.com").unwrap();
    assert_eq!(ctx.router.navigate("/medications").unwrap().target(), Route::Medications);
}

#[test]
fn test_custom_store_file_from_settings() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("settings.json"),
        r#"{"app":{"storeFile":"custom.json"}}"#,
    )
    .unwrap();

    let ctx = create_test_context(&temp_dir);
    ctx.session_service.login("a@x.com").unwrap();

    assert!(temp_dir.path().join("custom.json").exists());
    assert!(!temp_dir.path().join("local_storage.json").exists());
}
