use folio_app::config::{self, CommandSpec, FolioConfig, LogFormat};

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = FolioConfig {
        share: Some(CommandSpec {
            program: "xdg-open".to_string(),
            args: Vec::new(),
        }),
        log_format: LogFormat::Json,
        ..FolioConfig::default()
    };
    config::save_config_at(&path, &config).unwrap();

    let loaded = config::load_config_at(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    config::save_config_at(&path, &FolioConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn v0_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "data_dir": "/var/folio/data",
            "output_dir": "/var/folio/out",
            "renderer": "weasyprint"
        }"#,
    )
    .unwrap();

    let loaded = config::load_config_at(&path).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(
        loaded.renderer,
        CommandSpec {
            program: "weasyprint".to_string(),
            args: Vec::new(),
        }
    );
    assert_eq!(loaded.share, None);
    assert_eq!(loaded.log_filter, "info");
    assert_eq!(loaded.log_format, LogFormat::Pretty);
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"config_version": 9, "data_dir": "/d", "output_dir": "/o", "renderer": {"program": "x"}}"#,
    )
    .unwrap();

    let err = config::load_config_at(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(config::load_config_at(&dir.path().join("absent.json")).is_err());
}
