//! Payload-to-hardware mapping for the scalar cell family.
//!
//! One macro invocation per payload width replaces the hand-written
//! struct-per-width approach: the traits here tie each payload type to its
//! `core::sync::atomic` backing cell, and [`AtomicCell`](super::AtomicCell)
//! stays a single generic type. The traits are sealed; the set of payloads is
//! fixed.

use core::sync::atomic::{
    AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicIsize, AtomicU16, AtomicU32,
    AtomicU64, AtomicU8, AtomicUsize, Ordering,
};

mod sealed {
    pub trait Sealed {}
}

/// A payload type with a matching hardware atomic representation.
///
/// Implemented for `bool` and the fixed-width integer types. The `raw_*`
/// methods are the crate's only crossing of the hardware/compiler boundary
/// and are not meant to be called directly; use
/// [`AtomicCell`](super::AtomicCell).
pub trait Primitive: sealed::Sealed + Copy + PartialEq + core::fmt::Debug {
    /// The `core::sync::atomic` cell backing this payload.
    type Raw: Send + Sync;

    /// Wraps a value in its backing cell.
    fn raw_new(value: Self) -> Self::Raw;
    /// Hardware load.
    fn raw_load(raw: &Self::Raw, order: Ordering) -> Self;
    /// Hardware store.
    fn raw_store(raw: &Self::Raw, value: Self, order: Ordering);
    /// Hardware swap, returning the prior value.
    fn raw_swap(raw: &Self::Raw, value: Self, order: Ordering) -> Self;
    /// Hardware strong compare-exchange.
    ///
    /// # Errors
    /// Returns the observed value when the comparison fails.
    fn raw_compare_exchange(
        raw: &Self::Raw,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
    /// Hardware weak compare-exchange; may fail spuriously.
    ///
    /// # Errors
    /// Returns the observed value when the comparison fails or the hardware
    /// reports a spurious failure.
    fn raw_compare_exchange_weak(
        raw: &Self::Raw,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
    /// Unwraps the backing cell.
    fn raw_into_inner(raw: Self::Raw) -> Self;
    /// Direct access through an exclusive borrow.
    fn raw_get_mut(raw: &mut Self::Raw) -> &mut Self;
}

/// Payloads supporting atomic add and subtract (the integer types).
pub trait Arithmetic: Primitive {
    /// The unit operand used by `increment`/`decrement`.
    const ONE: Self;

    /// Hardware fetch-and-add (wrapping), returning the prior value.
    fn raw_fetch_add(raw: &Self::Raw, delta: Self, order: Ordering) -> Self;
    /// Hardware fetch-and-subtract (wrapping), returning the prior value.
    fn raw_fetch_sub(raw: &Self::Raw, delta: Self, order: Ordering) -> Self;
}

/// Payloads supporting atomic bitwise operations (integers and `bool`).
pub trait Bitwise: Primitive {
    /// Hardware fetch-and-or, returning the prior value.
    fn raw_fetch_or(raw: &Self::Raw, bits: Self, order: Ordering) -> Self;
    /// Hardware fetch-and-xor, returning the prior value.
    fn raw_fetch_xor(raw: &Self::Raw, bits: Self, order: Ordering) -> Self;
    /// Hardware fetch-and-and, returning the prior value.
    fn raw_fetch_and(raw: &Self::Raw, bits: Self, order: Ordering) -> Self;
}

macro_rules! impl_primitive {
    ($payload:ty, $raw:ident) => {
        impl sealed::Sealed for $payload {}

        impl Primitive for $payload {
            type Raw = $raw;

            #[inline(always)]
            fn raw_new(value: Self) -> Self::Raw {
                $raw::new(value)
            }

            #[inline(always)]
            fn raw_load(raw: &Self::Raw, order: Ordering) -> Self {
                raw.load(order)
            }

            #[inline(always)]
            fn raw_store(raw: &Self::Raw, value: Self, order: Ordering) {
                raw.store(value, order);
            }

            #[inline(always)]
            fn raw_swap(raw: &Self::Raw, value: Self, order: Ordering) -> Self {
                raw.swap(value, order)
            }

            #[inline(always)]
            fn raw_compare_exchange(
                raw: &Self::Raw,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                raw.compare_exchange(current, new, success, failure)
            }

            #[inline(always)]
            fn raw_compare_exchange_weak(
                raw: &Self::Raw,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                raw.compare_exchange_weak(current, new, success, failure)
            }

            #[inline(always)]
            fn raw_into_inner(raw: Self::Raw) -> Self {
                raw.into_inner()
            }

            #[inline(always)]
            fn raw_get_mut(raw: &mut Self::Raw) -> &mut Self {
                raw.get_mut()
            }
        }
    };
}

macro_rules! impl_integer {
    ($payload:ty) => {
        impl Arithmetic for $payload {
            const ONE: Self = 1;

            #[inline(always)]
            fn raw_fetch_add(raw: &Self::Raw, delta: Self, order: Ordering) -> Self {
                raw.fetch_add(delta, order)
            }

            #[inline(always)]
            fn raw_fetch_sub(raw: &Self::Raw, delta: Self, order: Ordering) -> Self {
                raw.fetch_sub(delta, order)
            }
        }

        impl Bitwise for $payload {
            #[inline(always)]
            fn raw_fetch_or(raw: &Self::Raw, bits: Self, order: Ordering) -> Self {
                raw.fetch_or(bits, order)
            }

            #[inline(always)]
            fn raw_fetch_xor(raw: &Self::Raw, bits: Self, order: Ordering) -> Self {
                raw.fetch_xor(bits, order)
            }

            #[inline(always)]
            fn raw_fetch_and(raw: &Self::Raw, bits: Self, order: Ordering) -> Self {
                raw.fetch_and(bits, order)
            }
        }
    };
}

impl_primitive!(bool, AtomicBool);
impl_primitive!(i8, AtomicI8);
impl_primitive!(i16, AtomicI16);
impl_primitive!(i32, AtomicI32);
impl_primitive!(i64, AtomicI64);
impl_primitive!(isize, AtomicIsize);
impl_primitive!(u8, AtomicU8);
impl_primitive!(u16, AtomicU16);
impl_primitive!(u32, AtomicU32);
impl_primitive!(u64, AtomicU64);
impl_primitive!(usize, AtomicUsize);

impl_integer!(i8);
impl_integer!(i16);
impl_integer!(i32);
impl_integer!(i64);
impl_integer!(isize);
impl_integer!(u8);
impl_integer!(u16);
impl_integer!(u32);
impl_integer!(u64);
impl_integer!(usize);

// `bool` gets the bitwise set but no arithmetic.
impl Bitwise for bool {
    #[inline(always)]
    fn raw_fetch_or(raw: &Self::Raw, bits: Self, order: Ordering) -> Self {
        raw.fetch_or(bits, order)
    }

    #[inline(always)]
    fn raw_fetch_xor(raw: &Self::Raw, bits: Self, order: Ordering) -> Self {
        raw.fetch_xor(bits, order)
    }

    #[inline(always)]
    fn raw_fetch_and(raw: &Self::Raw, bits: Self, order: Ordering) -> Self {
        raw.fetch_and(bits, order)
    }
}
