//! Ordering predicates.
//!
//! A [`Heap`](crate::Heap) never consults [`Ord`] directly: it asks its
//! predicate whether one element must sit above another. Any closure or
//! function of type `Fn(&T, &T) -> bool` is such a predicate, as are the
//! types defined here.
//!
//! A predicate must behave as a strict ordering over the elements it is given:
//! irreflexive (`less(a, a)` is `false`) and transitive. A predicate that
//! breaks these rules will not cause undefined behaviour or memory unsafety,
//! but the order in which elements leave the heap is then unspecified.

use alloc::rc::Rc;
use core::{fmt, marker::PhantomData};

/// A strict "must appear above" relation over `T`.
///
/// `less(a, b)` returning `true` means that `a` has higher priority than `b`
/// and will be popped first.
pub trait Less<T: ?Sized> {
    /// Returns `true` if `this` must be placed above `that`.
    fn less(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: ?Sized + Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}

/// A zero-sized predicate that delegates to the [`Ord`] implementation of
/// its type parameter `T`, yielding a min-heap.
pub struct NaturalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> NaturalOrder<T> {
    /// Creates the natural order for `T`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalOrder<T> {}

impl<T: ?Sized> fmt::Debug for NaturalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NaturalOrder")
    }
}

impl<T: ?Sized + Ord> Less<T> for NaturalOrder<T> {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// Flips the wrapped predicate: `Reversed(l).less(a, b) == l.less(b, a)`.
///
/// Wrapping [`NaturalOrder`] gives a max-heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<L>(pub L);

impl<T: ?Sized, L: Less<T>> Less<T> for Reversed<L> {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self.0.less(that, this)
    }
}

/// A reference-counted, type-erased predicate.
///
/// Every closure has its own type, so a `Heap<T, F>` can only ever be
/// re-ordered by another `F`. Erasing the closure behind `SharedLess` lets
/// [`Heap::change_predicate`](crate::Heap::change_predicate) install any
/// predicate over `T`. Cloning a `SharedLess` (and therefore cloning a heap
/// that holds one) shares the same underlying function.
pub struct SharedLess<'a, T: ?Sized>(Rc<dyn Fn(&T, &T) -> bool + 'a>);

impl<'a, T: ?Sized> SharedLess<'a, T> {
    /// Erases `less` behind a shared pointer.
    pub fn new<F>(less: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'a,
    {
        Self(Rc::new(less))
    }

    /// Returns `true` if both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Clone for SharedLess<'_, T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for SharedLess<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedLess(..)")
    }
}

impl<T: ?Sized> Less<T> for SharedLess<'_, T> {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        (self.0)(this, that)
    }
}
