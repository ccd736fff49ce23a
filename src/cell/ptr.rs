//! Ordered atomic pointer cell.

use core::fmt;
use core::ptr;
use core::sync::atomic::AtomicPtr;

use crate::ordering::{CasKind, LoadOrder, RmwOrder, StoreOrder};

/// An address-sized slot holding a possibly-null raw pointer.
///
/// The operation set is restricted to load, store, swap and compare-and-swap;
/// a pointer has no meaningful arithmetic here. Unlike the scalar family,
/// every default order is `SeqCst`: a published pointer usually guards the
/// data it addresses, so publication must be visible together with that data.
///
/// The cell stores the address only; it does not own, drop, or dereference
/// the pointee. Owning semantics live in
/// [`AtomicReference`](crate::reference::AtomicReference), which is built on
/// this cell.
#[repr(transparent)]
pub struct AtomicPtrCell<T> {
    inner: AtomicPtr<T>,
}

impl<T> AtomicPtrCell<T> {
    /// Order used by [`load`](Self::load).
    pub const DEFAULT_LOAD_ORDER: LoadOrder = LoadOrder::SeqCst;

    /// Order used by [`store`](Self::store).
    pub const DEFAULT_STORE_ORDER: StoreOrder = StoreOrder::SeqCst;

    /// Order used by the read-modify-write operations when no explicit order
    /// is given.
    pub const DEFAULT_RMW_ORDER: RmwOrder = RmwOrder::SeqCst;

    /// Creates a new cell holding `pointer`.
    #[inline(always)]
    #[must_use]
    pub const fn new(pointer: *mut T) -> Self {
        Self {
            inner: AtomicPtr::new(pointer),
        }
    }

    /// Creates a new cell holding null.
    #[inline(always)]
    #[must_use]
    pub const fn null() -> Self {
        Self::new(ptr::null_mut())
    }

    /// Loads the current pointer with the family default order.
    #[inline(always)]
    pub fn load(&self) -> *mut T {
        self.load_with(Self::DEFAULT_LOAD_ORDER)
    }

    /// Loads the current pointer.
    #[inline(always)]
    pub fn load_with(&self, order: LoadOrder) -> *mut T {
        self.inner.load(order.as_ordering())
    }

    /// Stores a new pointer with the family default order.
    #[inline(always)]
    pub fn store(&self, pointer: *mut T) {
        self.store_with(pointer, Self::DEFAULT_STORE_ORDER);
    }

    /// Stores a new pointer.
    #[inline(always)]
    pub fn store_with(&self, pointer: *mut T, order: StoreOrder) {
        self.inner.store(pointer, order.as_ordering());
    }

    /// Swaps in a new pointer with the family default order, returning the
    /// prior pointer.
    #[inline(always)]
    pub fn swap(&self, pointer: *mut T) -> *mut T {
        self.swap_with(pointer, Self::DEFAULT_RMW_ORDER)
    }

    /// Swaps in a new pointer, returning the prior pointer.
    #[inline(always)]
    pub fn swap_with(&self, pointer: *mut T, order: RmwOrder) -> *mut T {
        self.inner.swap(pointer, order.as_ordering())
    }

    /// Compare-and-swap with the family default order.
    ///
    /// See [`compare_and_swap_with`](Self::compare_and_swap_with).
    #[inline(always)]
    pub fn compare_and_swap(
        &self,
        expected: &mut *mut T,
        desired: *mut T,
        kind: CasKind,
    ) -> bool {
        self.compare_and_swap_with(expected, desired, kind, Self::DEFAULT_RMW_ORDER)
    }

    /// If the current pointer equals `*expected`, replaces it with `desired`
    /// and returns `true`. Otherwise writes the observed pointer into
    /// `*expected` and returns `false`, leaving the cell unchanged.
    ///
    /// Same write-back contract as the scalar family: a retry loop must use
    /// the written-back pointer as its next comparison basis.
    #[inline(always)]
    pub fn compare_and_swap_with(
        &self,
        expected: &mut *mut T,
        desired: *mut T,
        kind: CasKind,
        order: RmwOrder,
    ) -> bool {
        let result = match kind {
            CasKind::Strong => self.inner.compare_exchange(
                *expected,
                desired,
                order.as_ordering(),
                order.failure_ordering(),
            ),
            CasKind::Weak => self.inner.compare_exchange_weak(
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

    /// Consumes the cell, returning the contained pointer.
    #[inline]
    pub fn into_inner(self) -> *mut T {
        self.inner.into_inner()
    }

    /// Returns a mutable reference to the pointer.
    ///
    /// Safe without any ordering: `&mut self` proves no concurrent access.
    #[inline]
    pub fn get_mut(&mut self) -> &mut *mut T {
        self.inner.get_mut()
    }
}

impl<T> From<*mut T> for AtomicPtrCell<T> {
    #[inline]
    fn from(pointer: *mut T) -> Self {
        Self::new(pointer)
    }
}

impl<T> Default for AtomicPtrCell<T> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for AtomicPtrCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicPtrCell")
            .field(&self.load_with(LoadOrder::Relaxed))
            .finish()
    }
}
