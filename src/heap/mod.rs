//! A priority queue implemented with a binary heap.
//!
//! The heap is a dense, zero-based array read as a binary tree: the children
//! of index `i` are `2i + 1` and `2i + 2`, and its parent is `(i - 1) / 2`.
//! Index 0 always holds the element that the heap's [`Less`] predicate ranks
//! highest, i.e. the one that no other element is `less` than.
//!
//! Insertion and popping the top element have *O*(log(*n*)) time complexity.
//! Checking the top element is *O*(1).
//!
//! # Examples
//!
//! Scheduling work by deadline, earliest first:
//!
//! ```
//! use sift::Heap;
//!
//! #[derive(Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//!     deadline: u32,
//! }
//!
//! let mut jobs = Heap::new(|a: &Job, b: &Job| a.deadline < b.deadline);
//! jobs.push(Job { name: "backup", deadline: 30 });
//! jobs.push(Job { name: "deploy", deadline: 10 });
//! jobs.push(Job { name: "report", deadline: 20 });
//! jobs.push(Job { name: "rotate", deadline: 45 });
//!
//! // Everything due within the next half hour.
//! let due = jobs.pop_while(|job| job.deadline <= 30);
//! let names: Vec<_> = due.iter().map(|job| job.name).collect();
//! assert_eq!(names, ["deploy", "report", "backup"]);
//!
//! assert_eq!(jobs.len(), 1);
//! assert_eq!(jobs.peek().map(|job| job.name), Ok("rotate"));
//! ```

use alloc::vec::{self, Vec};
use core::fmt;
#[cfg(feature = "trusted_len")]
use core::iter::TrustedLen;
use core::iter::FusedIterator;
use core::mem::{swap, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use crate::error::{HeapError, Result};
use crate::order::{Less, NaturalOrder};


/// A priority queue implemented with a binary heap, ordered by a [`Less`]
/// predicate.
///
/// The element for which no other element is `less` sits on top: with the
/// default [`NaturalOrder`] this is a min-heap, and wrapping a predicate in
/// [`Reversed`](crate::Reversed) turns it upside down.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the predicate,
/// changes while it is in the heap, or for the predicate itself to change
/// other than through [`change_predicate`], [`predicate_mut`] or
/// [`reorder_by`]. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `Heap` that observed it and
/// not result in undefined behavior.
///
/// Equal-ranked elements leave the heap in no particular order.
///
/// # Examples
///
/// ```
/// use sift::{Heap, HeapError};
///
/// let mut heap = Heap::default();
///
/// // There's nothing to look at yet.
/// assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));
///
/// heap.push(5);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
/// assert!(heap.is_empty());
/// ```
///
/// Any `Fn(&T, &T) -> bool` serves as a predicate:
///
/// ```
/// use sift::Heap;
///
/// let mut heap = Heap::new(|a: &&str, b: &&str| a.len() > b.len());
/// heap.extend(["fig", "banana", "kiwi"]);
///
/// assert_eq!(heap.pop(), Ok("banana"));
/// assert_eq!(heap.pop(), Ok("kiwi"));
/// assert_eq!(heap.pop(), Ok("fig"));
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek] | [change_predicate] |
/// |---------|---------------|--------|--------------------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1) | *O*(*n* log(*n*))  |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [push]: Heap::push
/// [pop]: Heap::pop
/// [peek]: Heap::peek
/// [change_predicate]: Heap::change_predicate
/// [`change_predicate`]: Heap::change_predicate
/// [`predicate_mut`]: Heap::predicate_mut
/// [`reorder_by`]: Heap::reorder_by
pub struct Heap<T, L = NaturalOrder<T>> {
    data: Vec<T>,
    less: L,
}

/// Structure wrapping a mutable reference to a heap's predicate.
///
/// This `struct` is created by the [`predicate_mut`] method on [`Heap`]. When
/// it is dropped, the heap re-inserts every element under the (possibly
/// changed) predicate.
///
/// [`predicate_mut`]: Heap::predicate_mut
pub struct PredicateMut<'a, T, L: Less<T>> {
    heap: &'a mut Heap<T, L>,
}

impl<T, L: Less<T> + fmt::Debug> fmt::Debug for PredicateMut<'_, T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PredicateMut").field(&self.heap.less).finish()
    }
}

impl<T, L: Less<T>> Deref for PredicateMut<'_, T, L> {
    type Target = L;
    fn deref(&self) -> &L {
        &self.heap.less
    }
}

impl<T, L: Less<T>> DerefMut for PredicateMut<'_, T, L> {
    fn deref_mut(&mut self) -> &mut L {
        &mut self.heap.less
    }
}

impl<T, L: Less<T>> Drop for PredicateMut<'_, T, L> {
    fn drop(&mut self) {
        trace!("predicate mutated in place; re-inserting {} elements", self.heap.len());
        self.heap.rebuild_by_insertion(0);
    }
}

impl<T: Clone, L: Clone> Clone for Heap<T, L> {
    fn clone(&self) -> Self {
        Heap { data: self.data.clone(), less: self.less.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.less.clone_from(&source.less);
    }
}

impl<T: Ord> Default for Heap<T> {
    /// Creates an empty `Heap<T>` in `T`'s natural order.
    #[inline]
    fn default() -> Heap<T> {
        Heap::new(NaturalOrder::new())
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, L: Less<T>> Heap<T, L> {
    /// Creates an empty `Heap` ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    /// let mut heap = Heap::new(|a: &u8, b: &u8| a > b);
    /// heap.push(4);
    /// heap.push(9);
    /// assert_eq!(heap.peek(), Ok(&9));
    /// ```
    #[must_use]
    pub fn new(less: L) -> Heap<T, L> {
        Heap { data: Vec::new(), less }
    }

    /// Creates an empty `Heap` with at least the specified capacity.
    ///
    /// The heap will be able to hold at least `capacity` elements without
    /// reallocating. If `capacity` is 0, the heap will not allocate.
    #[must_use]
    pub fn with_capacity(less: L, capacity: usize) -> Heap<T, L> {
        Heap { data: Vec::with_capacity(capacity), less }
    }

    /// Removes the top item from the heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::{Heap, HeapError};
    /// let mut heap = Heap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn pop(&mut self) -> Result<T> {
        let mut item = self.data.pop().ok_or(HeapError::EmptyContainer)?;
        if !self.is_empty() {
            swap(&mut item, &mut self.data[0]);
            // SAFETY: !self.is_empty() means that self.len() > 0
            unsafe { self.sift_down(0) };
        }
        Ok(item)
    }

    /// Pushes an item onto the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    /// let mut heap = Heap::default();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1). This is the most meaningful cost metric when pushing
    /// elements that are *not* already in any sorted pattern.
    ///
    /// The worst case cost of a *single* call to `push` is *O*(*n*), paid
    /// when the backing storage has to grow; otherwise it is *O*(log(*n*)).
    pub fn push(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
    }

    /// Pops elements for as long as `test` holds for the top of the heap,
    /// returning them in the order they were popped.
    ///
    /// Stops at the first top element that fails `test`, leaving it in place,
    /// or when the heap runs out.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    /// let mut heap = Heap::from([9, 1, 8, 3, 2]);
    ///
    /// assert_eq!(heap.pop_while(|&x| x < 5), [1, 2, 3]);
    /// assert_eq!(heap.into_sorted_vec(), [8, 9]);
    /// ```
    pub fn pop_while<F>(&mut self, mut test: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut popped = Vec::new();
        while self.peek().is_ok_and(&mut test) {
            popped.extend(self.pop().ok());
        }
        popped
    }

    /// Pops elements until `test` holds for the top of the heap, returning
    /// them in the order they were popped.
    ///
    /// The first top element satisfying `test` stays in the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    /// let mut heap = Heap::from([9, 1, 8, 3, 2]);
    ///
    /// assert_eq!(heap.pop_until(|&x| x % 4 == 0), [1, 2, 3]);
    /// assert_eq!(heap.peek(), Ok(&8));
    /// ```
    pub fn pop_until<F>(&mut self, mut test: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.pop_while(|top| !test(top))
    }

    /// Replaces the heap's predicate with `less` and re-establishes the heap
    /// order under it.
    ///
    /// Every element is re-inserted as if by [`push`](Self::push), so this
    /// costs *O*(*n* log(*n*)). To switch to a predicate of a different type
    /// use [`reorder_by`](Self::reorder_by), or hold the predicate as a
    /// [`SharedLess`](crate::SharedLess).
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::{Heap, SharedLess};
    ///
    /// let mut heap = Heap::new(SharedLess::new(|a: &i32, b: &i32| a < b));
    /// heap.extend([4, -7, 1]);
    /// assert_eq!(heap.peek(), Ok(&-7));
    ///
    /// heap.change_predicate(SharedLess::new(|a: &i32, b: &i32| a.abs() < b.abs()));
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Ok(4));
    /// assert_eq!(heap.pop(), Ok(-7));
    /// ```
    pub fn change_predicate(&mut self, less: L) {
        trace!("changing predicate; re-inserting {} elements", self.len());
        self.less = less;
        self.rebuild_by_insertion(0);
    }

    /// Returns a guard granting mutable access to the predicate.
    ///
    /// Whatever the predicate is changed to, the heap order is re-established
    /// when the guard is dropped, at the same cost as
    /// [`change_predicate`](Self::change_predicate).
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::{Heap, SharedLess};
    ///
    /// let mut heap = Heap::new(SharedLess::new(|a: &i32, b: &i32| a < b));
    /// heap.extend([3, 1, 2]);
    /// assert_eq!(heap.peek(), Ok(&1));
    ///
    /// // The guard is a temporary, so the heap is reordered before `peek`.
    /// *heap.predicate_mut() = SharedLess::new(|a: &i32, b: &i32| a > b);
    /// assert_eq!(heap.peek(), Ok(&3));
    /// ```
    pub fn predicate_mut(&mut self) -> PredicateMut<'_, T, L> {
        PredicateMut { heap: self }
    }

    /// Consumes the heap, returning a heap of the same elements ordered by a
    /// predicate of another type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    ///
    /// let heap = Heap::from([2, 7, 5]);
    /// let mut heap = heap.reorder_by(|a: &i32, b: &i32| a > b);
    /// assert_eq!(heap.pop(), Ok(7));
    /// ```
    pub fn reorder_by<M: Less<T>>(self, less: M) -> Heap<T, M> {
        trace!("reordering {} elements under a predicate of a new type", self.len());
        let mut heap = Heap { data: self.data, less };
        heap.rebuild_by_insertion(0);
        heap
    }

    /// Returns an iterator which pops elements from the heap, top first.
    ///
    /// The iterator is lazy: dropping it before it is exhausted leaves the
    /// remaining elements in the heap, still correctly ordered. Once it has
    /// yielded every element the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    ///
    /// let mut heap = Heap::from([1, 2, 3, 4, 5]);
    ///
    /// let first_two: Vec<_> = heap.drain_sorted().take(2).collect();
    /// assert_eq!(first_two, [1, 2]);
    /// assert_eq!(heap.len(), 3);
    ///
    /// assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), [3, 4, 5]);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, L> {
        DrainSorted { inner: self }
    }

    /// Returns an iterator which yields the heap's elements in pop order,
    /// consuming the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    ///
    /// let heap = Heap::from([1, 2, 3, 4, 5]);
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, L> {
        IntoIterSorted { inner: self }
    }

    /// Consumes the heap and returns a vector in pop order, i.e. sorted so
    /// that no element is `less` than the one before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    ///
    /// let mut heap = Heap::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // The top moves to the back, so the tail fills in reverse pop order.
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < 1 <= end <= self.len() - 1 < self.len()
            //  Which means 0 < end and end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        self.data.reverse();
        self.into_vec()
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// `self` keeps its own predicate; `other`'s is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    ///
    /// let mut a = Heap::from([-10, 1, 2, 3, 3]);
    /// let mut b = Heap::from([-20, 5, 43]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        trace!("appending {} elements onto a heap of {}", other.len(), self.len());
        let start = self.data.len();
        self.data.append(&mut other.data);
        self.rebuild_by_insertion(start);
    }

    // The implementations of sift_up and sift_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a
    // hole), shift along the others and move the removed element back into the
    // vector at the final location of the hole.
    // The `Hole` type is used to represent this, and make sure
    // the hole is filled back at the end of its scope, even if the predicate
    // panics.

    /// Take an element at `pos` and move it up the heap while it is `less`
    /// than its parent.
    ///
    /// Returns the new position of the element.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) -> usize {
        // Take out the value at `pos` and create a hole.
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > start >= 0, which means hole.pos() > 0
            //  and so hole.pos() - 1 can't underflow.
            //  This guarantees that parent < hole.pos() so
            //  it's a valid index and also != hole.pos().
            if !self.less.less(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Take an element at `pos` and move it down the heap while one of its
    /// children is `less` than it, stopping before `end`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // Pick the right child only if it is strictly `less` than the left.
            // SAFETY: child < end - 1 < self.len() and
            //  child + 1 < end <= self.len(), so they're valid indexes.
            //  child == 2 * hole.pos() + 1 != hole.pos() and
            //  child + 1 == 2 * hole.pos() + 2 != hole.pos().
            child += unsafe { self.less.less(hole.get(child + 1), hole.get(child)) } as usize;

            // if we are already in order, stop.
            // SAFETY: child is now either the old child or the old child+1
            //  We already proven that both are < self.len() and != hole.pos()
            if !self.less.less(unsafe { hole.get(child) }, hole.element()) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // SAFETY: && short circuit, which means that in the
        //  second condition it's already true that child == end - 1 < self.len().
        if child == end - 1 && self.less.less(unsafe { hole.get(child) }, hole.element()) {
            // SAFETY: child is already proven to be a valid index and
            //  child == 2 * hole.pos() + 1 != hole.pos().
            unsafe { hole.move_to(child) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) };
    }

    /// Re-inserts `data[start..]` one element at a time, as `push` would,
    /// on top of the heap held in `data[..start]`.
    fn rebuild_by_insertion(&mut self, start: usize) {
        for i in start.max(1)..self.len() {
            // SAFETY: The index `i` is always less than self.len().
            unsafe { self.sift_up(0, i) };
        }
    }

    /// Bottom-up heapify of the whole storage in *O*(*n*).
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }
}

impl<T, L> Heap<T, L> {
    /// Returns the top item in the heap without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::{Heap, HeapError};
    /// let mut heap = Heap::default();
    /// assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));
    ///
    /// heap.push(1);
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    /// Returns the predicate ordering this heap.
    #[must_use]
    pub fn predicate(&self) -> &L {
        &self.less
    }

    /// Returns an iterator visiting all values in the underlying storage, in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::Heap;
    /// let heap = Heap::from([1, 2, 3, 4]);
    ///
    /// let mut seen: Vec<_> = heap.iter().copied().collect();
    /// seen.sort();
    /// assert_eq!(seen, [1, 2, 3, 4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns a slice of all values in the underlying storage, in arbitrary
    /// order apart from the top element coming first.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Consumes the heap and returns the underlying vector in arbitrary
    /// order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the elements of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::into_iter()`] (provided by the
/// [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over the elements of a `Heap`, in pop order.
///
/// This `struct` is created by [`Heap::drain_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct DrainSorted<'a, T, L: Less<T>> {
    inner: &'a mut Heap<T, L>,
}

impl<T, L: Less<T>> Iterator for DrainSorted<'_, T, L> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, L: Less<T>> ExactSizeIterator for DrainSorted<'_, T, L> {}

impl<T, L: Less<T>> FusedIterator for DrainSorted<'_, T, L> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T, L: Less<T>> TrustedLen for DrainSorted<'_, T, L> {}

/// An owning iterator over the elements of a `Heap`, in pop order.
///
/// This `struct` is created by [`Heap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, L> {
    inner: Heap<T, L>,
}

impl<T, L: Less<T>> Iterator for IntoIterSorted<T, L> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, L: Less<T>> ExactSizeIterator for IntoIterSorted<T, L> {}

impl<T, L: Less<T>> FusedIterator for IntoIterSorted<T, L> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T, L: Less<T>> TrustedLen for IntoIterSorted<T, L> {}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    /// Converts a `Vec<T>` into a `Heap<T>` in `T`'s natural order.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Heap<T> {
        let mut heap = Heap { data: vec, less: NaturalOrder::new() };
        heap.rebuild();
        heap
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Heap<T> {
    /// ```
    /// use sift::Heap;
    ///
    /// let mut h1 = Heap::from([1, 4, 2, 3]);
    /// let mut h2: Heap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().ok().zip(h2.pop().ok()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, L> From<Heap<T, L>> for Vec<T> {
    /// Converts a `Heap<T, L>` into a `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: Heap<T, L>) -> Vec<T> {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Heap<T> {
        Heap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, L> IntoIterator for Heap<T, L> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the heap in arbitrary order. The heap cannot be used after calling
    /// this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, L> IntoIterator for &'a Heap<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, L: Less<T>> Extend<T> for Heap<T, L> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a, T: 'a + Copy, L: Less<T>> Extend<&'a T> for Heap<T, L> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
