//! Limits registry: instance type → [`InstanceLimits`], seeded once and merged on update.
//!
//! All entry points pass through a one-time population gate before touching the map.
//! A single readers-writer lock guards the map: lookups share it, and each update
//! batch holds it exclusively from its first write to its last, so readers never
//! observe a half-applied batch.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::{Lazy, OnceCell};

use crate::error::LimitsError;
use crate::limits::InstanceLimits;
use crate::parse::parse_limit_string;
use crate::source::{InstanceTypeInfo, InstanceTypeSource};
use crate::static_limits::static_limits;

type Seed = Box<dyn Fn() -> HashMap<String, InstanceLimits> + Send + Sync>;

static GLOBAL: Lazy<LimitsRegistry> = Lazy::new(LimitsRegistry::new);

/// In-memory registry of per-instance-type network limits.
///
/// Usually created once by the process entry point and shared by reference
/// (or `Arc`); [`LimitsRegistry::global`] serves callers that cannot have it injected.
pub struct LimitsRegistry {
    seed: Seed,
    limits: OnceCell<RwLock<HashMap<String, InstanceLimits>>>,
}

impl LimitsRegistry {
    /// Create a registry seeded from the built-in table on first use.
    pub fn new() -> Self {
        Self::with_seed(static_limits)
    }

    /// Create a registry seeded from `seed` on first use. `seed` runs at most once.
    pub fn with_seed<F>(seed: F) -> Self
    where
        F: Fn() -> HashMap<String, InstanceLimits> + Send + Sync + 'static,
    {
        Self {
            seed: Box::new(seed),
            limits: OnceCell::new(),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static LimitsRegistry {
        &GLOBAL
    }

    /// Runs the seed exactly once; concurrent first callers block until it completes.
    fn limits(&self) -> &RwLock<HashMap<String, InstanceLimits>> {
        self.limits.get_or_init(|| {
            let seeded = (self.seed)();
            tracing::debug!(entries = seeded.len(), "populated instance limits");
            RwLock::new(seeded)
        })
    }

    // Every write is a single whole-value insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, InstanceLimits>> {
        self.limits().read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, InstanceLimits>> {
        self.limits().write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Limits of `instance_type`, or `None` if the registry does not know it.
    pub fn get(&self, instance_type: &str) -> Option<InstanceLimits> {
        self.read().get(instance_type).cloned()
    }

    /// Limits of `instance_type` and whether it was found. A miss yields the zero entry,
    /// which must not be used as real data.
    pub fn get_or_default(&self, instance_type: &str) -> (InstanceLimits, bool) {
        match self.get(instance_type) {
            Some(limits) => (limits, true),
            None => (InstanceLimits::default(), false),
        }
    }

    /// Whether `instance_type` has an entry.
    pub fn contains(&self, instance_type: &str) -> bool {
        self.read().contains_key(instance_type)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Sorted copy of every entry, taken under one read lock.
    pub fn snapshot(&self) -> BTreeMap<String, InstanceLimits> {
        self.read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Adds or overwrites entries from `instance type → "adapters,ipv4,ipv6"` mappings.
    ///
    /// Stops at the first unparsable value and returns its error. Entries applied before
    /// it in the same call stay applied.
    pub fn update_from_user_defined_mappings(
        &self,
        mappings: &HashMap<String, String>,
    ) -> Result<(), LimitsError> {
        self.update_from_mappings(mappings)
    }

    /// Ordered form of [`update_from_user_defined_mappings`](Self::update_from_user_defined_mappings):
    /// for a key repeated in `mappings` the later value wins.
    pub fn update_from_mappings<I, K, V>(&self, mappings: I) -> Result<(), LimitsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut limits = self.write();
        let mut applied = 0usize;
        for (instance_type, value) in mappings {
            let instance_type = instance_type.as_ref();
            let parsed =
                parse_limit_string(value.as_ref()).map_err(|source| LimitsError::Parse {
                    instance_type: instance_type.to_string(),
                    source,
                })?;
            limits.insert(instance_type.to_string(), parsed);
            applied += 1;
        }
        tracing::debug!(applied, "applied user-defined instance limits");
        Ok(())
    }

    /// Fetches the catalog from `source` and overwrites the entries it returns.
    ///
    /// The fetch runs before any lock is taken. On fetch failure nothing is written.
    /// Instance types absent from the catalog keep their current entries. Returns the
    /// number of entries written.
    pub async fn update_from_api(
        &self,
        source: &dyn InstanceTypeSource,
    ) -> Result<usize, LimitsError> {
        let instance_types = source.instance_types().await?;
        Ok(self.apply_instance_types(&instance_types))
    }

    /// Merges already-fetched catalog entries in one exclusive batch.
    pub fn apply_instance_types(&self, instance_types: &[InstanceTypeInfo]) -> usize {
        let mut limits = self.write();
        for info in instance_types {
            limits.insert(info.instance_type.clone(), info.limits());
        }
        tracing::debug!(
            updated = instance_types.len(),
            total = limits.len(),
            "merged instance limits from provider catalog"
        );
        instance_types.len()
    }
}

impl Default for LimitsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{FetchError, LimitParseError};
    use crate::source::{NetworkInfo, StaticInstanceTypeSource};

    struct FailingSource;

    #[async_trait]
    impl InstanceTypeSource for FailingSource {
        async fn instance_types(&self) -> Result<Vec<InstanceTypeInfo>, FetchError> {
            Err(FetchError::Http("503 Service Unavailable".to_string()))
        }
    }

    fn info(instance_type: &str, adapters: u32, ipv4: u32, ipv6: u32, hv: &str) -> InstanceTypeInfo {
        InstanceTypeInfo {
            instance_type: instance_type.to_string(),
            network_info: Some(NetworkInfo {
                maximum_network_interfaces: Some(adapters),
                ipv4_addresses_per_interface: Some(ipv4),
                ipv6_addresses_per_interface: Some(ipv6),
            }),
            hypervisor: Some(hv.to_string()),
        }
    }

    fn mappings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn seed_runs_lazily_and_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let registry = LimitsRegistry::with_seed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            static_limits()
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(registry.get("t2.micro").is_some());
        registry
            .update_from_user_defined_mappings(&mappings(&[("x.custom", "1,1,1")]))
            .unwrap();
        registry.apply_instance_types(&[]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn user_mapping_is_readable_after_write() {
        let registry = LimitsRegistry::new();
        registry
            .update_from_user_defined_mappings(&mappings(&[("m5.large", "1,2,3")]))
            .unwrap();
        assert_eq!(
            registry.get_or_default("m5.large"),
            (InstanceLimits::new(1, 2, 3), true)
        );
    }

    #[test]
    fn override_replaces_whole_entry() {
        let registry = LimitsRegistry::new();
        registry
            .update_from_user_defined_mappings(&mappings(&[("c5.large", "3,10,10")]))
            .unwrap();
        registry
            .update_from_user_defined_mappings(&mappings(&[("c5.large", "2,4,0")]))
            .unwrap();
        assert_eq!(registry.get("c5.large"), Some(InstanceLimits::new(2, 4, 0)));
    }

    #[test]
    fn override_drops_static_hypervisor() {
        let registry = LimitsRegistry::new();
        assert_eq!(registry.get("a1.large").unwrap().hypervisor_type, "nitro");
        registry
            .update_from_mappings([("a1.large", "3,10,10")])
            .unwrap();
        assert_eq!(registry.get("a1.large").unwrap().hypervisor_type, "");
    }

    #[test]
    fn later_duplicate_in_batch_wins() {
        let registry = LimitsRegistry::with_seed(HashMap::new);
        registry
            .update_from_mappings([("z.custom", "1,1,1"), ("z.custom", "2,2,2")])
            .unwrap();
        assert_eq!(registry.get("z.custom"), Some(InstanceLimits::new(2, 2, 2)));
    }

    #[test]
    fn parse_failure_aborts_without_rollback() {
        let registry = LimitsRegistry::with_seed(HashMap::new);
        let err = registry
            .update_from_mappings([("a.one", "1,1,1"), ("b.bad", "1,x,1"), ("c.three", "3,3,3")])
            .unwrap_err();
        match err {
            LimitsError::Parse {
                instance_type,
                source: LimitParseError::InvalidInteger { field, .. },
            } => {
                assert_eq!(instance_type, "b.bad");
                assert_eq!(field, "ipv4");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert_eq!(registry.get("a.one"), Some(InstanceLimits::new(1, 1, 1)));
        assert!(!registry.contains("b.bad"));
        assert!(!registry.contains("c.three"));
    }

    #[test]
    fn format_error_is_reported() {
        let registry = LimitsRegistry::new();
        let err = registry
            .update_from_user_defined_mappings(&mappings(&[("m5.large", "4,15")]))
            .unwrap_err();
        assert!(matches!(
            err,
            LimitsError::Parse {
                source: LimitParseError::InvalidFormat { .. },
                ..
            }
        ));
        assert_eq!(
            registry.get("m5.large"),
            Some(InstanceLimits::new(3, 10, 10).with_hypervisor("nitro"))
        );
    }

    #[test]
    fn unknown_type_is_zero_and_not_found() {
        let registry = LimitsRegistry::new();
        assert_eq!(registry.get("nonexistent-type"), None);
        assert_eq!(
            registry.get_or_default("nonexistent-type"),
            (InstanceLimits::default(), false)
        );
    }

    #[test]
    fn keys_are_case_sensitive() {
        let registry = LimitsRegistry::new();
        assert!(registry.contains("m5.large"));
        assert!(!registry.contains("M5.LARGE"));
    }

    #[tokio::test]
    async fn refresh_overwrites_returned_types_only() {
        let registry = LimitsRegistry::new();
        let before = registry.get("t2.micro").unwrap();
        let source = StaticInstanceTypeSource::new(vec![
            info("m5.large", 9, 9, 9, "nitro"),
            info("new.type", 2, 5, 5, "nitro"),
        ]);

        let written = registry.update_from_api(&source).await.unwrap();

        assert_eq!(written, 2);
        assert_eq!(registry.get("t2.micro"), Some(before));
        assert_eq!(
            registry.get("m5.large"),
            Some(InstanceLimits::new(9, 9, 9).with_hypervisor("nitro"))
        );
        assert_eq!(
            registry.get("new.type"),
            Some(InstanceLimits::new(2, 5, 5).with_hypervisor("nitro"))
        );
    }

    #[tokio::test]
    async fn refresh_defaults_unset_fields() {
        let registry = LimitsRegistry::new();
        let source = StaticInstanceTypeSource::new(vec![InstanceTypeInfo {
            instance_type: "m5.large".to_string(),
            network_info: None,
            hypervisor: None,
        }]);
        registry.update_from_api(&source).await.unwrap();
        assert_eq!(registry.get("m5.large"), Some(InstanceLimits::default()));
    }

    #[tokio::test]
    async fn fetch_error_leaves_registry_unchanged() {
        let registry = LimitsRegistry::new();
        registry.update_from_mappings([("m5.large", "1,2,3")]).unwrap();
        let before = registry.snapshot();

        let err = registry.update_from_api(&FailingSource).await.unwrap_err();

        assert!(matches!(err, LimitsError::Fetch(FetchError::Http(_))));
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn global_registry_is_seeded() {
        let registry = LimitsRegistry::global();
        assert!(registry.len() >= crate::static_limits::STATIC_LIMITS.len());
        assert!(registry.contains("c5.large"));
        assert!(std::ptr::eq(registry, LimitsRegistry::global()));
    }
}
