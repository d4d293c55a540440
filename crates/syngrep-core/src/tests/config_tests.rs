//! Tests for [`EngineConfig`].

use crate::EngineConfig;

#[test]
fn default_config_is_bounded() {
    let config = EngineConfig::default();
    assert_eq!(config.max_steps(), 100_000);
}

#[test]
fn explicit_config_overrides_limit() {
    let config = EngineConfig::new(64);
    assert_eq!(config.max_steps(), 64);
}
