use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_get_existing_var() {
    std::env::set_var("SHELF_TEST_ENV_VAR", "test_value");
    assert_eq!(
        EnvVar::get("SHELF_TEST_ENV_VAR"),
        Some("test_value".to_string())
    );
    std::env::remove_var("SHELF_TEST_ENV_VAR");
}

#[test]
#[serial]
fn test_get_empty_var() {
    std::env::set_var("SHELF_TEST_EMPTY_VAR", "");
    assert_eq!(EnvVar::get("SHELF_TEST_EMPTY_VAR"), None);
    std::env::remove_var("SHELF_TEST_EMPTY_VAR");
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("NONEXISTENT_VAR_12345"), None);
}

#[test]
#[serial]
fn test_shelf_home_prefers_override() {
    std::env::set_var(SHELF_HOME, "/tmp/shelf-home");
    assert_eq!(
        EnvVar::shelf_home().unwrap(),
        PathBuf::from("/tmp/shelf-home")
    );
    std::env::remove_var(SHELF_HOME);
}

#[test]
#[serial]
fn test_shelf_home_falls_back_to_home() {
    std::env::remove_var(SHELF_HOME);
    let original = std::env::var("HOME").ok();
    std::env::set_var("HOME", "/tmp/someone");
    assert_eq!(
        EnvVar::shelf_home().unwrap(),
        PathBuf::from("/tmp/someone/.shelf")
    );
    match original {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }
}
