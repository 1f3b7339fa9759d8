//! Read `config.toml` from an explicit path or `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::LoadError;

fn xdg_config_path(app_name: &str) -> Result<Option<PathBuf>, LoadError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| LoadError::ConfigPath("no user config directory".to_string()))?;
    let path = config_dir.join(app_name).join("config.toml");
    if path.exists() {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

/// `[limits]` table.
#[derive(Deserialize, Default, Debug)]
pub(crate) struct LimitsSection {
    pub api_url: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub refresh_timeout_secs: Option<u64>,
}

#[derive(Deserialize, Default, Debug)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub limits: LimitsSection,
    /// Instance type → raw `"adapters,ipv4,ipv6"` string.
    #[serde(default)]
    pub instance_limits: HashMap<String, String>,
}

fn read_config_file(path: &Path) -> Result<ConfigFile, LoadError> {
    let content = std::fs::read_to_string(path).map_err(LoadError::Read)?;
    Ok(toml::from_str(&content)?)
}

/// Loads the XDG config file for `app_name`. Missing file returns the empty config.
pub(crate) fn load_xdg(app_name: &str) -> Result<ConfigFile, LoadError> {
    match xdg_config_path(app_name)? {
        Some(path) => read_config_file(&path),
        None => Ok(ConfigFile::default()),
    }
}

/// Loads `path` if given (it must exist), else the XDG config file.
pub(crate) fn load(app_name: &str, path: Option<&Path>) -> Result<ConfigFile, LoadError> {
    match path {
        Some(path) => read_config_file(path),
        None => load_xdg(app_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[env]
RUST_LOG = "debug"

[limits]
api_url = "https://limits.example.com/types"
refresh_interval_secs = 600

[instance_limits]
"m5.large" = "4,15,15"
"custom.xl" = " 8 , 30 , 30 "
"#,
        )
        .unwrap();

        let config = load("unused", Some(&path)).unwrap();
        assert_eq!(config.env.get("RUST_LOG"), Some(&"debug".to_string()));
        assert_eq!(
            config.limits.api_url.as_deref(),
            Some("https://limits.example.com/types")
        );
        assert_eq!(config.limits.refresh_interval_secs, Some(600));
        assert_eq!(config.limits.refresh_timeout_secs, None);
        assert_eq!(
            config.instance_limits.get("custom.xl"),
            Some(&" 8 , 30 , 30 ".to_string())
        );
    }

    #[test]
    fn empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = load("unused", Some(&path)).unwrap();
        assert!(config.env.is_empty());
        assert!(config.instance_limits.is_empty());
        assert!(config.limits.api_url.is_none());
    }

    #[test]
    fn missing_explicit_path_is_read_error() {
        let result = load("unused", Some(Path::new("/nonexistent/eni-limits/config.toml")));
        assert!(matches!(result, Err(LoadError::Read(_))));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[\n").unwrap();

        assert!(matches!(
            load("unused", Some(&path)),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn non_string_limit_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[instance_limits]\n\"m5.large\" = 4\n").unwrap();

        assert!(matches!(
            load("unused", Some(&path)),
            Err(LoadError::Parse(_))
        ));
    }
}
