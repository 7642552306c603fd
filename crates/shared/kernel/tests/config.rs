use lcomp_kernel::config::{ConfigError, load_config};
use lcomp_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn toml_file_is_resolved_without_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("server.toml"),
        r#"
[server]
port = 9090

[security.jwt]
secret = "from-file"
ttl_seconds = 120

[logging]
level = "debug"
"#,
    )?;

    let config: ApiConfig = load_config(Some(dir.path().join("server")))?;
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.security.jwt.secret, "from-file");
    assert_eq!(config.security.jwt.ttl_seconds, 120);
    assert_eq!(config.security.jwt.issuer, "lcomp");
    assert_eq!(config.logging.level, "debug");
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let result = load_config::<ApiConfig>(Some(dir.path().join("absent")));

    let err = result.expect_err("missing config must fail");
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn type_mismatch_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.toml"), "[server]\nport = \"not-a-number\"\n").unwrap();

    let err = load_config::<ApiConfig>(Some(dir.path().join("bad.toml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
}
