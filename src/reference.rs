//! Ownership-aware atomic reference slot.
//!
//! [`AtomicReference`] layers shared-ownership bookkeeping on top of the
//! pointer cell: the slot holds either null or a pointer carrying exactly one
//! strong count of an [`Arc`]. Every operation moves that ownership unit
//! whole: into the slot, out to the caller, or back to a rejected caller.
//! The slot never clones a reference and never drops one it was not handed.

use core::fmt;
use core::marker::PhantomData;
use core::ptr;
use std::sync::Arc;

use crate::cell::ptr::AtomicPtrCell;
use crate::ordering::{CasKind, LoadOrder, RmwOrder};

/// A lock-free slot holding `Option<Arc<T>>` semantics in one atomic word.
///
/// The slot's invariant: at every quiescent point it contains null, or a
/// pointer representing exactly one strong count that no caller holds. A
/// reference moved in via [`new`](Self::new), [`swap`](Self::swap) or
/// [`swap_if_none`](Self::swap_if_none) stays resident until a later `swap`
/// or [`take`](Self::take) transfers it to a caller, or until the slot is
/// dropped. The returned `Arc` from `swap`/`take` *is* the transferred unit;
/// dropping it is the matching release.
///
/// All defaults are `SeqCst`, like the pointer family: a resident reference
/// usually publishes the data reachable through it.
///
/// # Example
///
/// ```
/// use orbit::AtomicReference;
/// use std::sync::Arc;
///
/// let shared: AtomicReference<Vec<u32>> = AtomicReference::empty();
///
/// // First initializer wins; a loser gets its candidate back untouched.
/// assert!(shared.swap_if_none(Arc::new(vec![1, 2, 3])).is_ok());
/// assert!(shared.swap_if_none(Arc::new(vec![9])).is_err());
///
/// // Ownership of the resident reference transfers out on `take`.
/// let resident = shared.take().unwrap();
/// assert_eq!(*resident, vec![1, 2, 3]);
/// assert!(shared.take().is_none());
/// ```
#[repr(transparent)]
pub struct AtomicReference<T> {
    slot: AtomicPtrCell<T>,
    // The slot may drop an `Arc<T>`; this also gives the type `Arc`'s
    // `Send`/`Sync` bounds instead of the unconditional ones of the raw cell.
    _unit: PhantomData<Option<Arc<T>>>,
}

impl<T> AtomicReference<T> {
    /// Order used by [`peek`](Self::peek).
    pub const DEFAULT_LOAD_ORDER: LoadOrder = LoadOrder::SeqCst;

    /// Order used by [`swap`](Self::swap), [`swap_if_none`](Self::swap_if_none)
    /// and [`take`](Self::take) when no explicit order is given.
    pub const DEFAULT_RMW_ORDER: RmwOrder = RmwOrder::SeqCst;

    /// Creates a slot holding `initial`, if any.
    ///
    /// A supplied reference is moved in; its strong count becomes the
    /// resident ownership unit.
    #[must_use]
    pub fn new(initial: Option<Arc<T>>) -> Self {
        Self {
            slot: AtomicPtrCell::new(to_raw(initial)),
            _unit: PhantomData,
        }
    }

    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slot: AtomicPtrCell::null(),
            _unit: PhantomData,
        }
    }

    /// Exchanges the resident reference for `new` with the default order.
    ///
    /// See [`swap_with`](Self::swap_with).
    #[inline]
    pub fn swap(&self, new: Option<Arc<T>>) -> Option<Arc<T>> {
        self.swap_with(new, Self::DEFAULT_RMW_ORDER)
    }

    /// Atomically exchanges the resident reference for `new`, returning the
    /// previously resident reference.
    ///
    /// `new` is moved in and becomes resident. The returned reference carries
    /// the ownership unit that was resident: the caller keeps it alive,
    /// re-stores it, or drops it; dropping is the matching release.
    pub fn swap_with(&self, new: Option<Arc<T>>, order: RmwOrder) -> Option<Arc<T>> {
        let new_raw = to_raw(new);
        let old_raw = self.slot.swap_with(new_raw, order);
        #[cfg(feature = "tracing")]
        tracing::trace!(old = ?old_raw, new = ?new_raw, "swapped resident reference");
        // SAFETY: anything non-null in the slot was produced by `to_raw` and
        // carries exactly one strong count; the swap removed it from the
        // slot, so this call is the unit's sole consumer.
        unsafe { from_raw(old_raw) }
    }

    /// Stores `new` only if the slot is currently empty, with the default
    /// order. See [`swap_if_none_with`](Self::swap_if_none_with).
    ///
    /// # Errors
    ///
    /// Returns `new` back unchanged when the slot already held a reference.
    #[inline]
    pub fn swap_if_none(&self, new: Arc<T>) -> Result<(), Arc<T>> {
        self.swap_if_none_with(new, Self::DEFAULT_RMW_ORDER)
    }

    /// Stores `new` only if the slot is currently empty.
    ///
    /// This is the single-winner primitive for lazily initializing a shared
    /// reference without a lock: under any number of concurrent calls on an
    /// empty slot exactly one succeeds. The comparison uses a strong
    /// compare-and-swap, so failure always means the slot was genuinely
    /// non-null, never a spurious miss.
    ///
    /// No reference count changes hands on either path: on success the
    /// moved-in unit becomes resident, and on failure it is returned whole.
    ///
    /// # Errors
    ///
    /// Returns `new` back unchanged when the slot already held a reference.
    pub fn swap_if_none_with(&self, new: Arc<T>, order: RmwOrder) -> Result<(), Arc<T>> {
        let new_raw = Arc::into_raw(new).cast_mut();
        let mut expected = ptr::null_mut();
        if self
            .slot
            .compare_and_swap_with(&mut expected, new_raw, CasKind::Strong, order)
        {
            #[cfg(feature = "tracing")]
            tracing::trace!(new = ?new_raw, "initialized empty reference slot");
            Ok(())
        } else {
            // SAFETY: the CAS failed, so `new_raw` was never published; the
            // unit embodied by `into_raw` above is reconstituted intact.
            Err(unsafe { Arc::from_raw(new_raw) })
        }
    }

    /// Clears the slot with the default order, returning the previously
    /// resident reference. Equivalent to `swap(None)`.
    #[inline]
    pub fn take(&self) -> Option<Arc<T>> {
        self.swap(None)
    }

    /// Clears the slot, returning the previously resident reference with
    /// ownership transferred to the caller.
    #[inline]
    pub fn take_with(&self, order: RmwOrder) -> Option<Arc<T>> {
        self.swap_with(None, order)
    }

    /// Observes the resident pointer with the default order.
    ///
    /// See [`peek_with`](Self::peek_with).
    #[inline]
    pub fn peek(&self) -> *const T {
        self.peek_with(Self::DEFAULT_LOAD_ORDER)
    }

    /// Observes the resident pointer without taking ownership.
    ///
    /// The result is usable for identity comparison only (null check,
    /// [`Arc::as_ptr`] equality). It must not be dereferenced: a concurrent
    /// `swap`/`take` may transfer the unit out and release it at any moment,
    /// unless the caller guarantees liveness by other means.
    #[inline]
    pub fn peek_with(&self, order: LoadOrder) -> *const T {
        self.slot.load_with(order).cast_const()
    }

    /// Returns `true` if the slot is currently empty, with the default order.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.peek().is_null()
    }

    /// Returns `true` if the slot is currently empty.
    #[inline]
    pub fn is_none_with(&self, order: LoadOrder) -> bool {
        self.peek_with(order).is_null()
    }
}

impl<T> Drop for AtomicReference<T> {
    fn drop(&mut self) {
        let resident = *self.slot.get_mut();
        if !resident.is_null() {
            // SAFETY: exclusive access; the resident pointer carries the one
            // strong count placed there by `new`, `swap` or `swap_if_none`,
            // and no caller can race this release.
            unsafe { drop(Arc::from_raw(resident)) };
        }
    }
}

impl<T> Default for AtomicReference<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Arc<T>> for AtomicReference<T> {
    #[inline]
    fn from(reference: Arc<T>) -> Self {
        Self::new(Some(reference))
    }
}

impl<T> fmt::Debug for AtomicReference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicReference")
            .field(&self.peek_with(LoadOrder::Relaxed))
            .finish()
    }
}

/// Embodies an optional reference as a raw slot word, moving its strong
/// count into the pointer.
#[inline]
fn to_raw<T>(reference: Option<Arc<T>>) -> *mut T {
    match reference {
        Some(reference) => Arc::into_raw(reference).cast_mut(),
        None => ptr::null_mut(),
    }
}

/// Reconstitutes the reference embodied by a slot word.
///
/// # Safety
///
/// `raw` must be null or a pointer produced by [`to_raw`] that still carries
/// its unconsumed strong count; the caller becomes that unit's owner.
#[inline]
unsafe fn from_raw<T>(raw: *mut T) -> Option<Arc<T>> {
    if raw.is_null() {
        None
    } else {
        Some(Arc::from_raw(raw))
    }
}
