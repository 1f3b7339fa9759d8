//! Instance limits: adapter count, per-adapter address counts and hypervisor class.

use serde::{Deserialize, Serialize};

/// Network interface limits of one instance type.
///
/// Entries are replaced wholesale on update; the registry never edits a single field.
/// The default value is the zero entry returned for unknown instance types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceLimits {
    /// Maximum number of attachable network adapters.
    pub adapters: u32,
    /// Maximum IPv4 addresses per adapter.
    pub ipv4: u32,
    /// Maximum IPv6 addresses per adapter.
    pub ipv6: u32,
    /// Virtualization class, e.g. `"nitro"` or `"xen"`. Empty for bare metal or when unknown.
    #[serde(default)]
    pub hypervisor_type: String,
}

impl InstanceLimits {
    /// Create limits with an empty hypervisor type.
    pub fn new(adapters: u32, ipv4: u32, ipv6: u32) -> Self {
        Self {
            adapters,
            ipv4,
            ipv6,
            hypervisor_type: String::new(),
        }
    }

    /// Set the hypervisor type.
    pub fn with_hypervisor(mut self, hypervisor_type: impl Into<String>) -> Self {
        self.hypervisor_type = hypervisor_type.into();
        self
    }

    /// Total IPv4 addresses across all adapters.
    pub fn max_ipv4_addresses(&self) -> u32 {
        self.adapters.saturating_mul(self.ipv4)
    }

    /// Total IPv6 addresses across all adapters.
    pub fn max_ipv6_addresses(&self) -> u32 {
        self.adapters.saturating_mul(self.ipv6)
    }
}
