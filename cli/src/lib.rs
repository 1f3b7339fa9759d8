//! Library side of the `eni-limits` CLI: builds a registry from config and flags,
//! optionally refreshes it from the provider API, and formats entries for output.

use std::sync::Arc;
use std::time::Duration;

use eni_limits::{
    parse_mapping_pair, FetchError, HttpInstanceTypeSource, InstanceLimits, InstanceTypeSource,
    LimitParseError, LimitsError, LimitsRefresher, LimitsRegistry,
};
use thiserror::Error;

/// Refresh timeout when neither config nor flags set one.
pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(30);
/// Time between refreshes in `watch` when the config does not set one.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3600);

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] config::LoadError),
    #[error(transparent)]
    Mapping(#[from] LimitParseError),
    #[error(transparent)]
    Limits(#[from] LimitsError),
    #[error(transparent)]
    Source(#[from] FetchError),
    #[error("API refresh needs a URL (--api-url, [limits] api_url or {})", config::ENV_API_URL)]
    MissingApiUrl,
    #[error("not found: {}", .0.join(", "))]
    NotFound(Vec<String>),
}

/// Where overrides come from, in application order: config file, then flags.
#[derive(Debug, Default, Clone)]
pub struct RegistryOptions {
    /// `TYPE=ADAPTERS,IPV4,IPV6` mappings from the command line.
    pub instance_limits: Vec<String>,
    /// Overrides the configured API URL.
    pub api_url: Option<String>,
    /// Run one authoritative refresh before answering.
    pub refresh: bool,
}

/// Applies configured then command-line mappings to `registry`. A later mapping for the
/// same instance type wins.
pub fn apply_overrides(
    registry: &LimitsRegistry,
    config: &config::LimitsConfig,
    options: &RegistryOptions,
) -> Result<(), CliError> {
    registry.update_from_user_defined_mappings(&config.instance_limits)?;

    let pairs = options
        .instance_limits
        .iter()
        .map(|arg| parse_mapping_pair(arg))
        .collect::<Result<Vec<_>, _>>()?;
    registry.update_from_mappings(pairs)?;
    Ok(())
}

/// HTTP catalog source for the URL from flags, else from config.
pub fn api_source(
    config: &config::LimitsConfig,
    options: &RegistryOptions,
) -> Result<Arc<dyn InstanceTypeSource>, CliError> {
    let url = options
        .api_url
        .as_deref()
        .or(config.api_url.as_deref())
        .ok_or(CliError::MissingApiUrl)?;
    Ok(Arc::new(HttpInstanceTypeSource::new(url)?))
}

/// Refresher using the configured interval and timeout, or the defaults.
pub fn build_refresher(
    registry: Arc<LimitsRegistry>,
    source: Arc<dyn InstanceTypeSource>,
    config: &config::LimitsConfig,
) -> LimitsRefresher {
    LimitsRefresher::new(
        registry,
        source,
        config.refresh_interval.unwrap_or(DEFAULT_REFRESH_INTERVAL),
    )
    .with_timeout(config.refresh_timeout.unwrap_or(DEFAULT_REFRESH_TIMEOUT))
}

/// Builds the registry for one CLI invocation.
pub async fn prepare_registry(
    config: &config::LimitsConfig,
    options: &RegistryOptions,
) -> Result<Arc<LimitsRegistry>, CliError> {
    let registry = Arc::new(LimitsRegistry::new());
    apply_overrides(&registry, config, options)?;

    if options.refresh {
        let source = api_source(config, options)?;
        let updated = build_refresher(registry.clone(), source, config)
            .refresh_once()
            .await?;
        tracing::info!(updated, "refreshed instance limits from provider API");
    }
    Ok(registry)
}

/// Looks up each instance type, splitting hits from misses. Order of hits follows the input.
pub fn lookup_all(
    registry: &LimitsRegistry,
    instance_types: &[String],
) -> (Vec<(String, InstanceLimits)>, Vec<String>) {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for instance_type in instance_types {
        match registry.get(instance_type) {
            Some(limits) => found.push((instance_type.clone(), limits)),
            None => missing.push(instance_type.clone()),
        }
    }
    (found, missing)
}

/// `Err(NotFound)` listing `missing` when it is non-empty.
pub fn ensure_all_found(missing: Vec<String>) -> Result<(), CliError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CliError::NotFound(missing))
    }
}

/// Plain-text table, one row per entry.
pub fn format_table<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a InstanceLimits)>,
{
    let mut out = format!(
        "{:<20} {:>8} {:>6} {:>6}  {}\n",
        "INSTANCE TYPE", "ADAPTERS", "IPV4", "IPV6", "HYPERVISOR"
    );
    for (instance_type, limits) in entries {
        out.push_str(&format!(
            "{:<20} {:>8} {:>6} {:>6}  {}\n",
            instance_type,
            limits.adapters,
            limits.ipv4,
            limits.ipv6,
            if limits.hypervisor_type.is_empty() {
                "-"
            } else {
                limits.hypervisor_type.as_str()
            }
        ));
    }
    out
}
