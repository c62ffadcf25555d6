use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_BASE_URL));
    assert_that!(config.api.prefix.as_str(), eq(crate::DEFAULT_API_PREFIX));
    assert_that!(config.api.mock_enabled, eq(false));
    assert_that!(config.locale.as_str(), eq(crate::DEFAULT_LOCALE));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              locale = "de"

              [api]
              base_url = "https://usage.example.com"
              mock_enabled = true

              [entry]
              authenticated_path = "/home"
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq("https://usage.example.com"));
    assert_that!(config.api.mock_enabled, eq(true));
    assert_that!(config.api.prefix.as_str(), eq(crate::DEFAULT_API_PREFIX));
    assert_that!(config.entry.authenticated_path.as_str(), eq("/home"));
    assert_that!(config.locale.as_str(), eq("de"));
}

#[test]
#[serial]
fn given_base_url_env_var_when_load_then_override_used_verbatim() {
    // Given
    let _temp = setup_config_dir();
    let _env = EnvGuard::set("UA_API_BASE_URL", "https://staging.example.com:8443");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://staging.example.com:8443")
    );
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "https://from-toml.example.com"
          "#,
    )
    .unwrap();
    let _env = EnvGuard::set("UA_API_BASE_URL", "https://from-env.example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://from-env.example.com")
    );
}

#[test]
#[serial]
fn given_mock_env_var_when_load_then_mock_enabled() {
    // Given
    let _temp = setup_config_dir();
    let _env = EnvGuard::set("UA_MOCK_ENABLED", "1");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.mock_enabled, eq(true));
}

// =========================================================================
// Error Path Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result.is_err(), eq(true));
    let message = result.unwrap_err().to_string();
    assert_that!(message.contains("TOML parse error"), eq(true));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("does-not-exist-yet");
    let _env = EnvGuard::set("UA_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}
