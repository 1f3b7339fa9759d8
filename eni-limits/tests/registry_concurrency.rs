//! Concurrency properties of `LimitsRegistry`: one-time population under contention,
//! no torn entries, and whole-batch visibility of updates.

mod init_logging;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use eni_limits::{
    static_limits, InstanceLimits, InstanceTypeInfo, LimitsRegistry, NetworkInfo,
};

const THREADS: usize = 16;
const GENERATIONS: u32 = 300;

fn catalog_entry(instance_type: &str, generation: u32) -> InstanceTypeInfo {
    InstanceTypeInfo {
        instance_type: instance_type.to_string(),
        network_info: Some(NetworkInfo {
            maximum_network_interfaces: Some(generation),
            ipv4_addresses_per_interface: Some(generation),
            ipv6_addresses_per_interface: Some(generation),
        }),
        hypervisor: Some(format!("gen-{}", generation)),
    }
}

fn assert_consistent(limits: &InstanceLimits) {
    assert_eq!(limits.adapters, limits.ipv4, "torn entry: {:?}", limits);
    assert_eq!(limits.adapters, limits.ipv6, "torn entry: {:?}", limits);
    if let Some(generation) = limits.hypervisor_type.strip_prefix("gen-") {
        assert_eq!(
            generation.parse::<u32>().unwrap(),
            limits.adapters,
            "cross-generation entry: {:?}",
            limits
        );
    }
}

#[test]
fn concurrent_first_touch_populates_once() {
    let populations = Arc::new(AtomicUsize::new(0));
    let counter = populations.clone();
    let registry = LimitsRegistry::with_seed(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        static_limits()
    });
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for i in 0..THREADS {
            let registry = &registry;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                match i % 3 {
                    0 => {
                        registry.get("t2.micro");
                    }
                    1 => {
                        let mut m = HashMap::new();
                        m.insert(format!("custom.{}", i), "1,2,3".to_string());
                        registry.update_from_user_defined_mappings(&m).unwrap();
                    }
                    _ => {
                        registry.apply_instance_types(&[catalog_entry(&format!("api.{}", i), 4)]);
                    }
                }
            });
        }
    });

    assert_eq!(populations.load(Ordering::SeqCst), 1);
    for (instance_type, limits) in static_limits() {
        assert_eq!(registry.get(&instance_type), Some(limits));
    }
}

#[test]
fn lookups_never_observe_torn_entries() {
    let registry = LimitsRegistry::new();
    registry
        .update_from_mappings([("m5.large", "0,0,0")])
        .unwrap();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    let limits = registry.get("m5.large").unwrap();
                    assert_consistent(&limits);
                }
            });
        }

        for generation in 1..=GENERATIONS {
            if generation % 2 == 0 {
                let value = format!("{g},{g},{g}", g = generation);
                registry
                    .update_from_mappings([("m5.large", value.as_str())])
                    .unwrap();
            } else {
                registry.apply_instance_types(&[catalog_entry("m5.large", generation)]);
            }
        }
        done.store(true, Ordering::Release);
    });

    assert_eq!(
        registry.get("m5.large"),
        Some(InstanceLimits::new(GENERATIONS, GENERATIONS, GENERATIONS))
    );
}

#[test]
fn batches_are_visible_all_at_once() {
    let registry = LimitsRegistry::with_seed(HashMap::new);
    registry.apply_instance_types(&[catalog_entry("a.batch", 0), catalog_entry("b.batch", 0)]);
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..THREADS / 2 {
            s.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    let snapshot = registry.snapshot();
                    assert_eq!(snapshot.get("a.batch"), snapshot.get("b.batch"));
                }
            });
        }

        for generation in 1..=GENERATIONS {
            registry.apply_instance_types(&[
                catalog_entry("a.batch", generation),
                catalog_entry("b.batch", generation),
            ]);
        }
        done.store(true, Ordering::Release);
    });
}
