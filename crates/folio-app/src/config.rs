use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use folio_export::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.folio.app";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding the key-value slots (saved documents).
    pub data_dir: PathBuf,
    /// Directory exported HTML and PDF files are written to.
    pub output_dir: PathBuf,
    /// HTML-to-PDF program. Added as an object in v1; v0 stored only the
    /// program name.
    pub renderer: CommandSpec,
    /// Opener used to share exported files. `None` = sharing unavailable.
    #[serde(default)]
    pub share: Option<CommandSpec>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub styles: DocumentStyles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR);
        let output_dir = dirs::document_dir()
            .map(|d| d.join("Folio"))
            .unwrap_or_else(|| data_dir.join("exports"));

        Self {
            config_version: CURRENT_VERSION,
            data_dir,
            output_dir,
            renderer: CommandSpec {
                program: "wkhtmltopdf".to_string(),
                args: vec!["--quiet".to_string()],
            },
            share: None,
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            styles: DocumentStyles::default(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<FolioConfig> {
    load_config_at(&config_path()?)
}

/// Load the saved config, or the defaults when none has been saved yet.
pub fn load_or_default() -> eyre::Result<FolioConfig> {
    if has_config() {
        load_config()
    } else {
        Ok(FolioConfig::default())
    }
}

pub fn load_config_at(path: &Path) -> eyre::Result<FolioConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: FolioConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Folio."
        ));
    }

    // v0 → v1: renderer was a bare program name
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(serde_json::Value::String(program)) = obj.get("renderer").cloned() {
            obj.insert(
                "renderer".to_string(),
                serde_json::json!({ "program": program, "args": [] }),
            );
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (renderer command object)");
    }

    Ok(json)
}

pub fn save_config_at(path: &Path, config: &FolioConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
