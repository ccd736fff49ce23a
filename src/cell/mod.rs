//! Ordered atomic cell family.
//!
//! The module tree is intentionally stratified:
//! - `primitive::*` is the sealed payload-to-hardware mapping.
//! - [`AtomicCell`] is the one generic scalar cell built on it.
//! - `ptr::*` is the pointer cell, with its stricter publication defaults.

use core::fmt;

use crossbeam_utils::Backoff;

use crate::ordering::{CasKind, LoadOrder, RmwOrder, StoreOrder};

mod primitive;
pub mod ptr;

pub use primitive::{Arithmetic, Bitwise, Primitive};

/// A fixed-size memory slot accessed only through ordered atomic operations.
///
/// One generic type covers `bool` and every fixed-width integer payload; the
/// applicable operation set follows the payload's capabilities (arithmetic for
/// integers, bitwise for integers and `bool`).
///
/// Every operation comes in two forms: the bare name, which uses the
/// documented family default ([`DEFAULT_LOAD_ORDER`] and friends, `Relaxed`
/// throughout for scalars), and a `_with` variant taking an explicit order.
/// Callers building synchronization on top of a cell pick their orders
/// explicitly; plain counters use the defaults.
///
/// [`DEFAULT_LOAD_ORDER`]: Self::DEFAULT_LOAD_ORDER
#[repr(transparent)]
pub struct AtomicCell<T: Primitive> {
    inner: T::Raw,
}

impl<T: Primitive> AtomicCell<T> {
    /// Order used by [`load`](Self::load). Scalar loads default to `Relaxed`:
    /// a plain value read guards nothing beyond itself.
    pub const DEFAULT_LOAD_ORDER: LoadOrder = LoadOrder::Relaxed;

    /// Order used by [`store`](Self::store).
    pub const DEFAULT_STORE_ORDER: StoreOrder = StoreOrder::Relaxed;

    /// Order used by the read-modify-write operations when no explicit order
    /// is given.
    pub const DEFAULT_RMW_ORDER: RmwOrder = RmwOrder::Relaxed;

    /// Creates a new cell holding `value`.
    #[inline]
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: T::raw_new(value),
        }
    }

    /// Loads the current value with the family default order.
    #[inline(always)]
    pub fn load(&self) -> T {
        self.load_with(Self::DEFAULT_LOAD_ORDER)
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn load_with(&self, order: LoadOrder) -> T {
        T::raw_load(&self.inner, order.as_ordering())
    }

    /// Stores a new value with the family default order.
    #[inline(always)]
    pub fn store(&self, value: T) {
        self.store_with(value, Self::DEFAULT_STORE_ORDER);
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store_with(&self, value: T, order: StoreOrder) {
        T::raw_store(&self.inner, value, order.as_ordering());
    }

    /// Swaps in a new value with the family default order, returning the
    /// prior value.
    #[inline(always)]
    pub fn swap(&self, value: T) -> T {
        self.swap_with(value, Self::DEFAULT_RMW_ORDER)
    }

    /// Swaps in a new value, returning the prior value.
    #[inline(always)]
    pub fn swap_with(&self, value: T, order: RmwOrder) -> T {
        T::raw_swap(&self.inner, value, order.as_ordering())
    }

    /// Compare-and-swap with the family default order.
    ///
    /// See [`compare_and_swap_with`](Self::compare_and_swap_with).
    #[inline(always)]
    pub fn compare_and_swap(&self, expected: &mut T, desired: T, kind: CasKind) -> bool {
        self.compare_and_swap_with(expected, desired, kind, Self::DEFAULT_RMW_ORDER)
    }

    /// If the current value equals `*expected`, replaces it with `desired`
    /// and returns `true`. Otherwise writes the observed current value into
    /// `*expected` and returns `false`, leaving the cell unchanged.
    ///
    /// With [`CasKind::Weak`] the operation may fail spuriously even when the
    /// comparison holds; retry loops must re-use the written-back value as
    /// the next comparison basis. The failure half loads with
    /// [`RmwOrder::failure_ordering`].
    #[inline(always)]
    pub fn compare_and_swap_with(
        &self,
        expected: &mut T,
        desired: T,
        kind: CasKind,
        order: RmwOrder,
    ) -> bool {
        let result = match kind {
            CasKind::Strong => T::raw_compare_exchange(
                &self.inner,
                *expected,
                desired,
                order.as_ordering(),
                order.failure_ordering(),
            ),
            CasKind::Weak => T::raw_compare_exchange_weak(
                &self.inner,
                *expected,
                desired,
                order.as_ordering(),
                order.failure_ordering(),
            ),
        };
        match result {
            Ok(_) => true,
            Err(observed) => {
                *expected = observed;
                false
            }
        }
    }

    /// Consumes the cell, returning the contained value.
    #[inline]
    pub fn into_inner(self) -> T {
        T::raw_into_inner(self.inner)
    }

    /// Returns a mutable reference to the value.
    ///
    /// Safe without any ordering: `&mut self` proves no concurrent access.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        T::raw_get_mut(&mut self.inner)
    }
}

impl<T: Arithmetic> AtomicCell<T> {
    /// Atomically adds `delta` (wrapping) with the family default order,
    /// returning the value before the addition.
    #[inline(always)]
    pub fn fetch_add(&self, delta: T) -> T {
        self.fetch_add_with(delta, Self::DEFAULT_RMW_ORDER)
    }

    /// Atomically adds `delta` (wrapping), returning the value before the
    /// addition.
    #[inline(always)]
    pub fn fetch_add_with(&self, delta: T, order: RmwOrder) -> T {
        T::raw_fetch_add(&self.inner, delta, order.as_ordering())
    }

    /// Atomically subtracts `delta` (wrapping) with the family default
    /// order, returning the value before the subtraction.
    #[inline(always)]
    pub fn fetch_sub(&self, delta: T) -> T {
        self.fetch_sub_with(delta, Self::DEFAULT_RMW_ORDER)
    }

    /// Atomically subtracts `delta` (wrapping), returning the value before
    /// the subtraction.
    #[inline(always)]
    pub fn fetch_sub_with(&self, delta: T, order: RmwOrder) -> T {
        T::raw_fetch_sub(&self.inner, delta, order.as_ordering())
    }

    /// Adds one, returning the value before the increment.
    #[inline(always)]
    pub fn increment(&self) -> T {
        self.fetch_add(T::ONE)
    }

    /// Adds one, returning the value before the increment.
    #[inline(always)]
    pub fn increment_with(&self, order: RmwOrder) -> T {
        self.fetch_add_with(T::ONE, order)
    }

    /// Subtracts one, returning the value before the decrement.
    #[inline(always)]
    pub fn decrement(&self) -> T {
        self.fetch_sub(T::ONE)
    }

    /// Subtracts one, returning the value before the decrement.
    #[inline(always)]
    pub fn decrement_with(&self, order: RmwOrder) -> T {
        self.fetch_sub_with(T::ONE, order)
    }

    /// Applies `f` to the current value in a weak-CAS retry loop, returning
    /// the value the successful attempt replaced.
    ///
    /// `f` may run more than once under contention and must be pure. Uses the
    /// family default order; retries back off between attempts.
    pub fn update<F>(&self, mut f: F) -> T
    where
        F: FnMut(T) -> T,
    {
        let backoff = Backoff::new();
        let mut current = self.load_with(LoadOrder::Relaxed);
        loop {
            let desired = f(current);
            if self.compare_and_swap_with(&mut current, desired, CasKind::Weak, Self::DEFAULT_RMW_ORDER)
            {
                return current;
            }
            backoff.spin();
        }
    }
}

impl<T: Bitwise> AtomicCell<T> {
    /// Atomic bitwise OR with the family default order, returning the value
    /// before the operation.
    #[inline(always)]
    pub fn fetch_or(&self, bits: T) -> T {
        self.fetch_or_with(bits, Self::DEFAULT_RMW_ORDER)
    }

    /// Atomic bitwise OR, returning the value before the operation.
    #[inline(always)]
    pub fn fetch_or_with(&self, bits: T, order: RmwOrder) -> T {
        T::raw_fetch_or(&self.inner, bits, order.as_ordering())
    }

    /// Atomic bitwise XOR with the family default order, returning the value
    /// before the operation.
    #[inline(always)]
    pub fn fetch_xor(&self, bits: T) -> T {
        self.fetch_xor_with(bits, Self::DEFAULT_RMW_ORDER)
    }

    /// Atomic bitwise XOR, returning the value before the operation.
    #[inline(always)]
    pub fn fetch_xor_with(&self, bits: T, order: RmwOrder) -> T {
        T::raw_fetch_xor(&self.inner, bits, order.as_ordering())
    }

    /// Atomic bitwise AND with the family default order, returning the value
    /// before the operation.
    #[inline(always)]
    pub fn fetch_and(&self, bits: T) -> T {
        self.fetch_and_with(bits, Self::DEFAULT_RMW_ORDER)
    }

    /// Atomic bitwise AND, returning the value before the operation.
    #[inline(always)]
    pub fn fetch_and_with(&self, bits: T, order: RmwOrder) -> T {
        T::raw_fetch_and(&self.inner, bits, order.as_ordering())
    }
}

impl<T: Primitive> From<T> for AtomicCell<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Primitive + Default> Default for AtomicCell<T> {
    #[inline]
    fn default() -> Self {
        Self::from(T::default())
    }
}

impl<T: Primitive> fmt::Debug for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicCell").field(&self.load()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: Primitive + serde::Serialize> serde::Serialize for AtomicCell<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Primitive + serde::Deserialize<'de>> serde::Deserialize<'de> for AtomicCell<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::from)
    }
}
