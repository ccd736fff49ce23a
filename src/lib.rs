//! # `orbit` - Ordered Atomic Cells
//!
//! Typed atomic memory cells with explicit memory-ordering selection, plus an
//! ownership-aware atomic reference slot. These are the building blocks other
//! lock-free structures are assembled from; the crate itself contains no
//! locks, no blocking, and no I/O.
//!
//! ## Cell families
//!
//! 1. **Scalar cells** ([`AtomicCell<T>`]):
//!    - One generic cell for `bool` and every fixed-width integer
//!    - Load, store, swap, fetch-and-op and compare-and-swap, each taking a
//!      memory order
//!    - Arithmetic for the integer payloads, bitwise ops for integers and
//!      `bool`
//!
//! 2. **Pointer cells** ([`AtomicPtrCell<T>`]):
//!    - An address-sized slot, possibly null
//!    - Load/store/swap/CAS only; `SeqCst` defaults because pointer
//!      publication guards the pointed-to data
//!
//! 3. **Reference slot** ([`AtomicReference<T>`]):
//!    - `Option<Arc<T>>` semantics in one atomic word
//!    - Ownership moves whole through every operation: `swap` and `take`
//!      hand the resident strong count to the caller, `swap_if_none` is the
//!      single-winner lazy-initialization primitive
//!
//! ## Ordering contract
//!
//! Every operation family has its own restricted order enum
//! ([`LoadOrder`], [`StoreOrder`], [`RmwOrder`]), so illegal combinations
//! do not typecheck. Each operation exists as a bare method using the
//! documented family default (named `DEFAULT_*_ORDER` constants: `Relaxed`
//! for scalars, `SeqCst` for pointers and references) and a `_with` variant
//! taking the order explicitly. Higher-level algorithms rely on those
//! defaults; they are part of the contract, not a convenience.
//!
//! ## Progress guarantees
//!
//! Single operations (load, store, swap, one CAS attempt) are wait-free.
//! Retry loops built from weak CAS (including [`AtomicCell::update`]) are
//! lock-free: some thread always makes progress, though an individual
//! thread's attempt can be outrun indefinitely.
//!
//! ## Example
//!
//! ```rust
//! use orbit::{AtomicCell, AtomicReference};
//! use std::sync::Arc;
//!
//! // A plain counter: relaxed defaults are the documented family contract.
//! let hits = AtomicCell::new(0_u64);
//! hits.increment();
//! assert_eq!(hits.load(), 1);
//!
//! // A lazily-initialized shared value: first writer wins, no lock.
//! let config: AtomicReference<&str> = AtomicReference::empty();
//! assert!(config.swap_if_none(Arc::new("primary")).is_ok());
//! assert!(config.swap_if_none(Arc::new("secondary")).is_err());
//! assert_eq!(config.take().as_deref(), Some(&"primary"));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::inline_always)]

pub mod cell;
pub mod ordering;
pub mod reference;

pub use cell::ptr::AtomicPtrCell;
pub use cell::{Arithmetic, AtomicCell, Bitwise, Primitive};
pub use ordering::{CasKind, LoadOrder, RmwOrder, StoreOrder};
pub use reference::AtomicReference;

// Compile-time assertions: the cells are zero-overhead wrappers over their
// backing storage, and the reference slot is one word.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<AtomicCell<u64>>() == mem::size_of::<u64>());
    assert!(mem::size_of::<AtomicCell<bool>>() == mem::size_of::<bool>());
    assert!(mem::size_of::<AtomicCell<usize>>() == mem::size_of::<usize>());
    assert!(mem::align_of::<AtomicCell<usize>>() == mem::align_of::<usize>());

    assert!(mem::size_of::<AtomicPtrCell<u8>>() == mem::size_of::<*mut u8>());
    assert!(mem::size_of::<AtomicReference<u8>>() == mem::size_of::<*mut u8>());
};
