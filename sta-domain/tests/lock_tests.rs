use sta_domain::LockRegistry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn guard_is_released_on_drop() {
    let registry = LockRegistry::new();
    drop(registry.guard("key"));
    // Re-acquiring immediately must not deadlock.
    drop(registry.guard("key"));
    assert_eq!(registry.key_count(), 1);
}

#[test]
fn distinct_keys_do_not_block_each_other() {
    let registry = LockRegistry::new();
    let _a = registry.guard("unit:a");
    let _b = registry.guard("unit:b");
    assert_eq!(registry.key_count(), 2);
}

#[test]
fn same_key_serializes_across_threads() {
    let registry = Arc::new(LockRegistry::new());
    let in_section = Arc::new(AtomicUsize::new(0));
    let max_seen = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = registry.clone();
        let in_section = in_section.clone();
        let max_seen = max_seen.clone();
        handles.push(thread::spawn(move || {
            let _guard = registry.guard("shared");
            let now = in_section.fetch_add(1, Ordering::SeqCst) + 1;
            max_seen.fetch_max(now, Ordering::SeqCst);
            thread::yield_now();
            in_section.fetch_sub(1, Ordering::SeqCst);
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(max_seen.load(Ordering::SeqCst), 1);
}
