//! Configuration loading tests.

use std::env;

use comercial_api::config::{Config, SecuritySettings, DEFAULT_ALLOWED_ORIGIN};

#[test]
fn security_settings_default_to_placeholder_origin_and_plain_http() {
    let settings = SecuritySettings::default();

    assert_eq!(settings.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
    assert!(!settings.enforce_https);
}

#[test]
fn from_env_reads_security_overrides() {
    env::set_var("ALLOWED_ORIGIN", "https://shop.example.org");
    env::set_var("ENFORCE_HTTPS", "true");

    let config = Config::from_env();

    assert_eq!(config.security.allowed_origin, "https://shop.example.org");
    assert!(config.security.enforce_https);

    env::remove_var("ALLOWED_ORIGIN");
    env::remove_var("ENFORCE_HTTPS");
}

#[test]
fn debug_output_redacts_the_database_url() {
    let config = Config::from_env();

    assert!(!format!("{config:?}").contains(&config.database_url));
}
