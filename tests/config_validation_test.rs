use album_catalog::config::{AppConfig, LogFormat};
use std::io::Write;

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml"))
        .expect("missing file should not be an error");

    assert_eq!(config.server.host, "localhost");
    assert_eq!(config.server.port, 8080);
    assert!(config.catalog.seed);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("albums.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[server]
host = "0.0.0.0"
port = 9090

[logging]
level = ""
format = "json"

[catalog]
seed = false
"#
    )
    .unwrap();

    let config = AppConfig::load_from(&path).expect("config file should parse");

    assert_eq!(config.listen_addr().unwrap(), "0.0.0.0:9090");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
    assert!(!config.catalog.seed);
}

#[test]
fn invalid_port_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("albums.toml");
    std::fs::write(&path, "[server]\nport = \"not-a-port\"\n").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}
