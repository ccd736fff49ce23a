//! Memory-ordering vocabulary shared by every cell type.
//!
//! Each operation family accepts only the orderings that are legal for it, so
//! an illegal combination (for example a `Release` load) is unrepresentable.
//! The enums convert to [`core::sync::atomic::Ordering`] at the hardware
//! boundary; nothing else in the crate touches `Ordering` directly.

use core::sync::atomic::Ordering;

/// Orderings legal for a plain atomic load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadOrder {
    /// No inter-thread ordering beyond atomicity of the access itself.
    Relaxed,
    /// Synchronizes-with a `Release` store whose value this load observes.
    Acquire,
    /// Participates in the single total order of all sequentially
    /// consistent operations.
    SeqCst,
}

impl LoadOrder {
    /// Converts to the raw ordering used at the hardware boundary.
    #[inline(always)]
    #[must_use]
    pub const fn as_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Acquire => Ordering::Acquire,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

/// Orderings legal for a plain atomic store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreOrder {
    /// No inter-thread ordering beyond atomicity of the access itself.
    Relaxed,
    /// Makes prior writes visible to an `Acquire` load observing this value.
    Release,
    /// Participates in the single total order of all sequentially
    /// consistent operations.
    SeqCst,
}

impl StoreOrder {
    /// Converts to the raw ordering used at the hardware boundary.
    #[inline(always)]
    #[must_use]
    pub const fn as_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Release => Ordering::Release,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

/// Orderings legal for a read-modify-write operation (swap, fetch-and-op,
/// compare-and-swap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RmwOrder {
    /// No inter-thread ordering beyond atomicity of the whole update.
    Relaxed,
    /// The load half synchronizes-with a `Release` store it observes.
    Acquire,
    /// The store half makes prior writes visible to an `Acquire` load.
    Release,
    /// Both `Acquire` and `Release` behavior in one operation.
    AcqRel,
    /// Participates in the single total order of all sequentially
    /// consistent operations.
    SeqCst,
}

impl RmwOrder {
    /// Converts to the raw ordering used at the hardware boundary.
    #[inline(always)]
    #[must_use]
    pub const fn as_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Acquire => Ordering::Acquire,
            Self::Release => Ordering::Release,
            Self::AcqRel => Ordering::AcqRel,
            Self::SeqCst => Ordering::SeqCst,
        }
    }

    /// Ordering for the load half of a compare-and-swap that failed.
    ///
    /// A failed comparison performs no store, so the release component is
    /// stripped; the caller still observes the current value with the
    /// acquire component (if any) intact.
    #[inline(always)]
    #[must_use]
    pub const fn failure_ordering(self) -> Ordering {
        match self {
            Self::Relaxed | Self::Release => Ordering::Relaxed,
            Self::Acquire | Self::AcqRel => Ordering::Acquire,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

/// Selects between the two compare-and-swap flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CasKind {
    /// May fail spuriously even when the comparison holds. Cheaper on
    /// LL/SC architectures; only correct inside a retry loop.
    Weak,
    /// Failure means the comparison genuinely failed.
    Strong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_orders_map_through() {
        assert_eq!(LoadOrder::Relaxed.as_ordering(), Ordering::Relaxed);
        assert_eq!(LoadOrder::Acquire.as_ordering(), Ordering::Acquire);
        assert_eq!(LoadOrder::SeqCst.as_ordering(), Ordering::SeqCst);
    }

    #[test]
    fn store_orders_map_through() {
        assert_eq!(StoreOrder::Relaxed.as_ordering(), Ordering::Relaxed);
        assert_eq!(StoreOrder::Release.as_ordering(), Ordering::Release);
        assert_eq!(StoreOrder::SeqCst.as_ordering(), Ordering::SeqCst);
    }

    #[test]
    fn failure_ordering_strips_release() {
        assert_eq!(RmwOrder::Relaxed.failure_ordering(), Ordering::Relaxed);
        assert_eq!(RmwOrder::Release.failure_ordering(), Ordering::Relaxed);
        assert_eq!(RmwOrder::Acquire.failure_ordering(), Ordering::Acquire);
        assert_eq!(RmwOrder::AcqRel.failure_ordering(), Ordering::Acquire);
        assert_eq!(RmwOrder::SeqCst.failure_ordering(), Ordering::SeqCst);
    }
}
