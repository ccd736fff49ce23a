//! Basic cell and reference-slot usage example

use orbit::{AtomicCell, AtomicReference, CasKind, LoadOrder, RmwOrder, StoreOrder};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("Ordered Atomic Cell Usage Example");
    println!("=================================");

    // Plain counters use the relaxed family defaults.
    let counter = AtomicCell::new(0_u64);
    counter.increment();
    counter.fetch_add(10);
    println!("Counter after increments: {}", counter.load());

    // Explicit orders for publication patterns.
    let ready = AtomicCell::new(false);
    ready.store_with(true, StoreOrder::Release);
    println!("Ready: {}", ready.load_with(LoadOrder::Acquire));

    // A weak-CAS retry loop, written out by hand.
    let cell = AtomicCell::new(40_u64);
    let mut current = cell.load();
    loop {
        let next = current + 2;
        if cell.compare_and_swap_with(&mut current, next, CasKind::Weak, RmwOrder::AcqRel) {
            break;
        }
    }
    println!("CAS loop result: {}", cell.load());

    // Lock-free one-time initialization of a shared reference.
    println!("\nAtomicReference (single-winner initialization):");
    let shared: AtomicReference<String> = AtomicReference::empty();
    let shared = &shared;

    thread::scope(|s| {
        for id in 0..4 {
            s.spawn(move || {
                let candidate = Arc::new(format!("configuration from thread {id}"));
                match shared.swap_if_none(candidate) {
                    Ok(()) => println!("  thread {id} won the initialization race"),
                    Err(_rejected) => println!("  thread {id} lost; candidate returned"),
                }
            });
        }
    });

    let resident = shared.take().expect("one thread initialized the slot");
    println!("Resident value: {resident}");
}
