use orbit::{AtomicCell, AtomicPtrCell, CasKind, LoadOrder, RmwOrder, StoreOrder};
use std::ptr;
use std::thread;

macro_rules! round_trip {
    ($name:ident, $ty:ty, $value:expr) => {
        #[test]
        fn $name() {
            let cell = AtomicCell::new(<$ty>::default());
            cell.store($value);
            assert_eq!(cell.load(), $value);
            assert_eq!(cell.swap(<$ty>::default()), $value);
            assert_eq!(cell.load(), <$ty>::default());
        }
    };
}

round_trip!(round_trip_bool, bool, true);
round_trip!(round_trip_i8, i8, -5);
round_trip!(round_trip_i16, i16, -300);
round_trip!(round_trip_i32, i32, -70_000);
round_trip!(round_trip_i64, i64, -5_000_000_000);
round_trip!(round_trip_isize, isize, -9);
round_trip!(round_trip_u8, u8, 200);
round_trip!(round_trip_u16, u16, 60_000);
round_trip!(round_trip_u32, u32, 4_000_000_000);
round_trip!(round_trip_u64, u64, 0xDEAD_BEEF_DEAD_BEEF);
round_trip!(round_trip_usize, usize, usize::MAX / 3);

#[test]
fn store_load_across_all_orders() {
    let cell = AtomicCell::new(0_u64);
    let stores = [StoreOrder::Relaxed, StoreOrder::Release, StoreOrder::SeqCst];
    let loads = [LoadOrder::Relaxed, LoadOrder::Acquire, LoadOrder::SeqCst];
    let mut value = 0;
    for store in stores {
        for load in loads {
            value += 1;
            cell.store_with(value, store);
            assert_eq!(cell.load_with(load), value);
        }
    }
}

#[test]
fn fetch_ops_return_prior_value() {
    let cell = AtomicCell::new(10_u32);
    assert_eq!(cell.fetch_add(5), 10);
    assert_eq!(cell.fetch_sub(3), 15);
    assert_eq!(cell.load(), 12);

    assert_eq!(cell.fetch_or(0b01), 12);
    assert_eq!(cell.fetch_xor(0b10), 13);
    assert_eq!(cell.fetch_and(0b111), 15);
    assert_eq!(cell.load(), 0b111);
}

#[test]
fn increment_decrement_are_by_one() {
    let cell = AtomicCell::new(-1_i64);
    assert_eq!(cell.increment(), -1);
    assert_eq!(cell.increment_with(RmwOrder::AcqRel), 0);
    assert_eq!(cell.decrement(), 1);
    assert_eq!(cell.load(), 0);
}

#[test]
fn bool_bitwise_ops() {
    let flag = AtomicCell::new(false);
    assert!(!flag.fetch_or(true));
    assert!(flag.load());
    assert!(flag.fetch_xor(true));
    assert!(!flag.load());
    flag.store(true);
    assert!(flag.fetch_and(false));
    assert!(!flag.load());
}

#[test]
fn cas_strong_success_leaves_expected_untouched() {
    let cell = AtomicCell::new(7_u32);
    let mut expected = 7;
    assert!(cell.compare_and_swap(&mut expected, 9, CasKind::Strong));
    assert_eq!(expected, 7);
    assert_eq!(cell.load(), 9);
}

#[test]
fn cas_strong_failure_writes_back_observed_value() {
    let cell = AtomicCell::new(9_u32);
    let mut stale = 7;
    assert!(!cell.compare_and_swap(&mut stale, 1, CasKind::Strong));
    assert_eq!(stale, 9);
    assert_eq!(cell.load(), 9);
}

#[test]
fn cas_weak_retry_loop_converges() {
    let cell = AtomicCell::new(0_usize);
    let mut current = cell.load();
    loop {
        let next = current + 1;
        if cell.compare_and_swap_with(&mut current, next, CasKind::Weak, RmwOrder::AcqRel) {
            break;
        }
    }
    assert_eq!(cell.load(), 1);
}

#[test]
fn concurrent_increments_sum_exactly() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 25_000;

    let counter = AtomicCell::new(100_u64);
    let counter = &counter;
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(move || {
                for _ in 0..PER_THREAD {
                    counter.increment();
                }
            });
        }
    });
    assert_eq!(counter.load(), 100 + THREADS * PER_THREAD);
}

#[test]
fn concurrent_cas_claims_are_exclusive() {
    // Each thread claims distinct slots through a shared cursor; no slot is
    // claimed twice and none is skipped.
    const SLOTS: usize = 10_000;

    let cursor = AtomicCell::new(0_usize);
    let cursor = &cursor;
    let claimed: Vec<AtomicCell<bool>> = (0..SLOTS).map(|_| AtomicCell::new(false)).collect();
    let claimed = &claimed;

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(move || loop {
                let mut current = cursor.load_with(LoadOrder::Acquire);
                loop {
                    if current >= SLOTS {
                        return;
                    }
                    let next = current + 1;
                    if cursor.compare_and_swap_with(
                        &mut current,
                        next,
                        CasKind::Weak,
                        RmwOrder::AcqRel,
                    ) {
                        assert!(!claimed[current].swap(true));
                        break;
                    }
                }
            });
        }
    });
    assert!(claimed.iter().all(AtomicCell::load));
}

#[test]
fn update_applies_under_contention() {
    const THREADS: u64 = 4;
    const PER_THREAD: u64 = 10_000;

    let cell = AtomicCell::new(0_u64);
    let cell = &cell;
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(move || {
                for _ in 0..PER_THREAD {
                    cell.update(|v| v + 1);
                }
            });
        }
    });
    assert_eq!(cell.load(), THREADS * PER_THREAD);
}

#[test]
fn update_returns_prior_value() {
    let cell = AtomicCell::new(6_u32);
    assert_eq!(cell.update(|v| v * 7), 6);
    assert_eq!(cell.load(), 42);
}

#[test]
fn exclusive_access_paths() {
    let mut cell = AtomicCell::new(3_u16);
    *cell.get_mut() = 8;
    assert_eq!(cell.load(), 8);
    assert_eq!(cell.into_inner(), 8);
}

#[test]
fn pointer_cell_round_trip() {
    let cell = AtomicPtrCell::<u32>::null();
    assert!(cell.load().is_null());

    let boxed = Box::into_raw(Box::new(11_u32));
    cell.store(boxed);
    assert_eq!(cell.load(), boxed);

    let prev = cell.swap(ptr::null_mut());
    assert_eq!(prev, boxed);
    assert!(cell.load().is_null());

    // Reclaim the allocation the cell never owned.
    unsafe { drop(Box::from_raw(prev)) };
}

#[test]
fn pointer_cell_cas_publishes_once() {
    let cell = AtomicPtrCell::<u32>::null();
    let first = Box::into_raw(Box::new(1_u32));
    let second = Box::into_raw(Box::new(2_u32));

    let mut expected = ptr::null_mut();
    assert!(cell.compare_and_swap(&mut expected, first, CasKind::Strong));

    let mut expected = ptr::null_mut();
    assert!(!cell.compare_and_swap(&mut expected, second, CasKind::Strong));
    assert_eq!(expected, first);
    assert_eq!(cell.load(), first);

    unsafe {
        drop(Box::from_raw(cell.swap(ptr::null_mut())));
        drop(Box::from_raw(second));
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_the_current_value() {
    let cell = AtomicCell::new(42_u32);
    let json = serde_json::to_string(&cell).unwrap();
    assert_eq!(json, "42");
    let back: AtomicCell<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.load(), 42);
}
