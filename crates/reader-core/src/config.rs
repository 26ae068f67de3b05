//! Platform directories and the optional `config.toml`.
//!
//! Resolution order: defaults, then the config file, then environment
//! variables, then command-line overrides.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "rapidreader";
pub const APPLICATION: &str = "rapidreader";

pub const CONFIG_FILE: &str = "config.toml";
pub const LIBRARY_FILE: &str = "library.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "rapidreader.log";

pub const CONFIG_ENV: &str = "RAPIDREADER_CONFIG";
pub const LIBRARY_ENV: &str = "RAPIDREADER_LIBRARY";
pub const LOG_ENV: &str = "RAPIDREADER_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

pub fn config_root() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().to_path_buf())
}

pub fn data_root() -> Option<PathBuf> {
    project_dirs().map(|p| p.data_dir().to_path_buf())
}

pub fn default_config_path() -> Option<PathBuf> {
    config_root().map(|dir| dir.join(CONFIG_FILE))
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub library_path: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved locations and log settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub library_path: PathBuf,
    pub settings_path: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let config_dir = config_root().unwrap_or_else(|| PathBuf::from("."));
        let data_dir = data_root().unwrap_or_else(|| config_dir.clone());
        Self {
            library_path: data_dir.join(LIBRARY_FILE),
            settings_path: config_dir.join(SETTINGS_FILE),
            log_file: data_dir.join(LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Reads `path`. A missing file is `Ok(None)`; unreadable or malformed files
/// are errors.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Explicit path first, then `RAPIDREADER_CONFIG`, then the platform default.
pub fn load_config_with_precedence(
    explicit: Option<&Path>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(Path::new(&env_path));
    }
    match default_config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(None),
    }
}

pub fn merge_config(file: Option<ConfigFile>) -> AppConfig {
    let mut config = AppConfig::default();
    let Some(file) = file else {
        return config;
    };
    if let Some(path) = file.library_path {
        config.library_path = path;
    }
    if let Some(path) = file.settings_path {
        config.settings_path = path;
    }
    if let Some(path) = file.log_file {
        config.log_file = path;
    }
    if let Some(level) = file.log_level {
        config.log_level = level;
    }
    config
}

pub fn apply_env_overrides(config: AppConfig) -> AppConfig {
    apply_env_with(config, |key| std::env::var(key).ok())
}

fn apply_env_with<F>(mut config: AppConfig, get: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = get(LIBRARY_ENV).filter(|v| !v.is_empty()) {
        config.library_path = PathBuf::from(path);
    }
    if let Some(path) = get(LOG_ENV).filter(|v| !v.is_empty()) {
        config.log_file = PathBuf::from(path);
    }
    config
}

pub fn apply_cli_overrides(
    mut config: AppConfig,
    library_path: Option<PathBuf>,
    settings_path: Option<PathBuf>,
) -> AppConfig {
    if let Some(path) = library_path {
        config.library_path = path;
    }
    if let Some(path) = settings_path {
        config.settings_path = path;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_config_file(&dir.path().join("config.toml")).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn parses_known_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "library_path = \"/tmp/lib.json\"\nlog_level = \"debug\"\n",
        )
        .expect("write");
        let file = load_config_file(&path).expect("load").expect("present");
        assert_eq!(file.library_path, Some(PathBuf::from("/tmp/lib.json")));
        assert_eq!(file.log_level.as_deref(), Some("debug"));
        assert!(file.settings_path.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "colour = \"red\"\n").expect("write");
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn later_layers_win() {
        let file = ConfigFile {
            library_path: Some(PathBuf::from("file.json")),
            settings_path: Some(PathBuf::from("file-settings.json")),
            log_file: Some(PathBuf::from("file.log")),
            log_level: None,
        };
        let merged = merge_config(Some(file));
        assert_eq!(merged.library_path, PathBuf::from("file.json"));
        assert_eq!(merged.log_level, DEFAULT_LOG_LEVEL);

        let with_env = apply_env_with(merged, |key| match key {
            LIBRARY_ENV => Some("env.json".to_string()),
            _ => None,
        });
        assert_eq!(with_env.library_path, PathBuf::from("env.json"));
        assert_eq!(with_env.log_file, PathBuf::from("file.log"));

        let resolved = apply_cli_overrides(with_env, Some(PathBuf::from("cli.json")), None);
        assert_eq!(resolved.library_path, PathBuf::from("cli.json"));
        assert_eq!(resolved.settings_path, PathBuf::from("file-settings.json"));
    }

    #[test]
    fn defaults_use_expected_file_names() {
        let config = merge_config(None);
        assert!(config.library_path.ends_with(LIBRARY_FILE));
        assert!(config.settings_path.ends_with(SETTINGS_FILE));
        assert!(config.log_file.ends_with(LOG_FILE));
    }
}
