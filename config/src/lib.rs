//! Load configuration for eni-limits from `config.toml` and a project `.env`.
//!
//! * [`load_and_apply`] fills the process environment with priority
//!   **existing env > .env > XDG `[env]`**.
//! * [`load_limits_config`] reads user-defined instance limits and refresh settings.
//!
//! ```toml
//! [limits]
//! api_url = "https://limits.example.com/instance-types"
//! refresh_interval_secs = 3600
//! refresh_timeout_secs = 30
//!
//! [instance_limits]
//! "m5.large" = "4,15,15"
//! ```

mod xdg_toml;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Overrides `[limits] api_url`.
pub const ENV_API_URL: &str = "ENI_LIMITS_API_URL";
/// Overrides `[limits] refresh_interval_secs`.
pub const ENV_REFRESH_INTERVAL_SECS: &str = "ENI_LIMITS_REFRESH_INTERVAL_SECS";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("config path: {0}")]
    ConfigPath(String),
    #[error("read config: {0}")]
    Read(std::io::Error),
    #[error("parse config toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(#[from] dotenv::Error),
    #[error("invalid {key}={value:?}: expected whole seconds")]
    InvalidEnv { key: &'static str, value: String },
}

/// Settings for the limits registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitsConfig {
    /// Catalog endpoint for authoritative refresh. `None` disables API refresh.
    pub api_url: Option<String>,
    pub refresh_interval: Option<Duration>,
    pub refresh_timeout: Option<Duration>,
    /// Instance type → raw limit string, handed unparsed to the registry.
    pub instance_limits: HashMap<String, String>,
}

/// Reads limits settings from `path`, or from `$XDG_CONFIG_HOME/<app_name>/config.toml`
/// when `path` is `None` (a missing XDG file yields defaults). Environment variables
/// [`ENV_API_URL`] and [`ENV_REFRESH_INTERVAL_SECS`] take precedence over the file.
pub fn load_limits_config(app_name: &str, path: Option<&Path>) -> Result<LimitsConfig, LoadError> {
    let file = xdg_toml::load(app_name, path)?;
    let mut config = LimitsConfig {
        api_url: file.limits.api_url,
        refresh_interval: file.limits.refresh_interval_secs.map(Duration::from_secs),
        refresh_timeout: file.limits.refresh_timeout_secs.map(Duration::from_secs),
        instance_limits: file.instance_limits,
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut LimitsConfig, lookup: F) -> Result<(), LoadError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.is_empty()) {
        config.api_url = Some(url);
    }
    if let Some(value) = lookup(ENV_REFRESH_INTERVAL_SECS) {
        let secs = value.trim().parse::<u64>().map_err(|_| LoadError::InvalidEnv {
            key: ENV_REFRESH_INTERVAL_SECS,
            value: value.clone(),
        })?;
        config.refresh_interval = Some(Duration::from_secs(secs));
    }
    Ok(())
}

fn load_dotenv_map(override_dir: Option<&Path>) -> Result<HashMap<String, String>, LoadError> {
    let dir = match override_dir.map(Path::to_path_buf).or_else(|| std::env::current_dir().ok()) {
        Some(d) => d,
        None => return Ok(HashMap::new()),
    };
    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let mut out = HashMap::new();
    for item in dotenv::from_path_iter(&path)? {
        let (key, value) = item?;
        out.insert(key, value);
    }
    Ok(out)
}

/// Loads XDG `config.toml` `[env]` and optional project `.env`, then sets environment
/// variables only for keys that are **not** already set.
///
/// * `app_name`: used for the XDG path `~/.config/<app_name>/config.toml`.
/// * `override_dir`: if `Some`, look for `.env` there instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg_toml::load_xdg(app_name)?.env;
    let dotenv_map = load_dotenv_map(override_dir)?;

    let mut keys: HashSet<&String> = xdg_map.keys().collect();
    keys.extend(dotenv_map.keys());

    for key in keys {
        if std::env::var(key).is_ok() {
            continue;
        }
        if let Some(v) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, v);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn existing_env_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "ENI_CONFIG_TEST_EXISTING=from_dotenv\n").unwrap();
        env::set_var("ENI_CONFIG_TEST_EXISTING", "from_env");

        let _ = load_and_apply("eni-limits-nonexistent-app-xyz", Some(dir.path()));

        assert_eq!(
            env::var("ENI_CONFIG_TEST_EXISTING").as_deref(),
            Ok("from_env")
        );
        env::remove_var("ENI_CONFIG_TEST_EXISTING");
    }

    #[test]
    fn dotenv_applied_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "# comment\nENI_CONFIG_TEST_DOTENV=\"from_dotenv\"\n",
        )
        .unwrap();
        env::remove_var("ENI_CONFIG_TEST_DOTENV");

        load_and_apply("eni-limits-nonexistent-app-xyz", Some(dir.path())).unwrap();
        let val = env::var("ENI_CONFIG_TEST_DOTENV").unwrap();
        env::remove_var("ENI_CONFIG_TEST_DOTENV");

        assert_eq!(val, "from_dotenv");
    }

    #[test]
    fn missing_dotenv_and_xdg_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_and_apply("eni-limits-nonexistent-app-xyz", Some(dir.path())).is_ok());
    }

    #[test]
    fn xdg_config_used_without_explicit_path() {
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join("eni-limits-xdg-test");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[instance_limits]\n\"m5.large\" = \"1,2,3\"\n",
        )
        .unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        let result = xdg_toml::load_xdg("eni-limits-xdg-test");
        match prev_xdg {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        let file = result.unwrap();
        assert_eq!(
            file.instance_limits.get("m5.large"),
            Some(&"1,2,3".to_string())
        );
    }

    #[test]
    fn limits_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("limits.toml");
        std::fs::write(
            &path,
            "[limits]\nrefresh_interval_secs = 60\nrefresh_timeout_secs = 5\n\n[instance_limits]\n\"c5.large\" = \"3,10,10\"\n",
        )
        .unwrap();

        let config = load_limits_config("unused", Some(&path)).unwrap();
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(60)));
        assert_eq!(config.refresh_timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            config.instance_limits.get("c5.large"),
            Some(&"3,10,10".to_string())
        );
    }

    #[test]
    fn env_overrides_take_precedence() {
        let mut config = LimitsConfig {
            api_url: Some("https://from-file".to_string()),
            refresh_interval: Some(Duration::from_secs(60)),
            ..Default::default()
        };
        apply_env_overrides(
            &mut config,
            lookup_from(&[
                (ENV_API_URL, "https://from-env"),
                (ENV_REFRESH_INTERVAL_SECS, " 120 "),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_url.as_deref(), Some("https://from-env"));
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(120)));
    }

    #[test]
    fn empty_env_url_is_ignored() {
        let mut config = LimitsConfig {
            api_url: Some("https://from-file".to_string()),
            ..Default::default()
        };
        apply_env_overrides(&mut config, lookup_from(&[(ENV_API_URL, "")])).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://from-file"));
    }

    #[test]
    fn invalid_interval_env_is_error() {
        let mut config = LimitsConfig::default();
        let result = apply_env_overrides(
            &mut config,
            lookup_from(&[(ENV_REFRESH_INTERVAL_SECS, "soon")]),
        );
        assert!(matches!(
            result,
            Err(LoadError::InvalidEnv { key: ENV_REFRESH_INTERVAL_SECS, .. })
        ));
    }
}
