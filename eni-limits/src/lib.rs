//! # eni-limits
//!
//! Network interface provisioning limits per compute instance type: how many adapters
//! an instance can attach and how many IPv4/IPv6 addresses each adapter can hold.
//! IP address management consults it to size allocations for a given machine type.
//!
//! ## Update paths
//!
//! - **Static seed**: the registry populates itself from [`STATIC_LIMITS`] on first use.
//! - **User-defined mappings**: [`LimitsRegistry::update_from_user_defined_mappings`] merges
//!   `"adapters,ipv4,ipv6"` strings from configuration ([`parse_limit_string`]).
//! - **Provider API**: [`LimitsRegistry::update_from_api`] merges the catalog returned by an
//!   [`InstanceTypeSource`] (e.g. [`HttpInstanceTypeSource`]); [`LimitsRefresher`] repeats it
//!   on an interval.
//!
//! Updates only add or overwrite; entries are never removed.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use eni_limits::LimitsRegistry;
//!
//! let registry = LimitsRegistry::new();
//! let mut overrides = HashMap::new();
//! overrides.insert("m5.large".to_string(), "4,15,15".to_string());
//! registry.update_from_user_defined_mappings(&overrides)?;
//!
//! if let Some(limits) = registry.get("m5.large") {
//!     println!("{} adapters x {} IPv4", limits.adapters, limits.ipv4);
//! }
//! # Ok::<(), eni_limits::LimitsError>(())
//! ```

mod error;
mod limits;
mod parse;
mod refresher;
mod registry;
mod source;
mod static_limits;

pub use error::{FetchError, LimitParseError, LimitsError};
pub use limits::InstanceLimits;
pub use parse::{parse_limit_string, parse_mapping_pair};
pub use refresher::LimitsRefresher;
pub use registry::LimitsRegistry;
pub use source::{
    HttpClient, HttpInstanceTypeSource, InstanceTypeInfo, InstanceTypeSource, NetworkInfo,
    ReqwestHttpClient, StaticInstanceTypeSource,
};
pub use static_limits::{static_limits, STATIC_LIMITS};

/// When running `cargo test -p eni-limits`, initializes tracing from `RUST_LOG` so that
/// unit tests in `src/**` can print logs with `--nocapture`.
#[cfg(test)]
mod test_logging {
    use ctor::ctor;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::Layer;

    #[ctor]
    fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(filter),
            )
            .try_init();
    }
}
