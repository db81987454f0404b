use std::path::PathBuf;

use audito_config::{AuditoConfig, LOCAL_CONFIG_FILE};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn prefixed_env_maps_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("AUDITO_SERVER__PORT", "5050");
        jail.set_env("AUDITO_AUTH__JWT_SECRET", "env-secret");
        jail.set_env("AUDITO_STORAGE__DATA_DIR", "/tmp/audito-data");

        let config = AuditoConfig::load().expect("config loads");
        assert_eq!(config.server.port, 5050);
        assert_eq!(config.auth.jwt_secret, "env-secret");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/audito-data"));
        Ok(())
    });
}

#[test]
fn legacy_unprefixed_env_is_honored() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("PORT", "4100");
        jail.set_env("JWT_SECRET", "legacy-secret");
        jail.set_env("DATA_DIR", "/srv/data");
        jail.set_env("FRONTEND_URL", "http://localhost:5173");

        let config = AuditoConfig::load().expect("config loads");
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.auth.jwt_secret, "legacy-secret");
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.server.frontend_url, "http://localhost:5173");
        Ok(())
    });
}

#[test]
fn legacy_env_beats_prefixed_env_and_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(LOCAL_CONFIG_FILE, "[server]\nport = 7000\n")?;
        jail.set_env("AUDITO_SERVER__PORT", "7100");
        jail.set_env("PORT", "7200");

        let config = AuditoConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7200);
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(LOCAL_CONFIG_FILE, "[server]\nport = 7000\n")?;
        jail.set_env("AUDITO_SERVER__PORT", "7100");

        let config = AuditoConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7100);
        Ok(())
    });
}

#[test]
fn zero_port_from_env_can_be_overridden_before_validation() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("PORT", "0");

        let mut config = AuditoConfig::load().expect("config loads");
        assert!(config.validate().is_err());

        config.server.port = 8080;
        assert!(config.validate().is_ok());
        Ok(())
    });
}
