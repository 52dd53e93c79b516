//! Free functions for building heaps.
//!
//! Those without a `_by` suffix order by [`NaturalOrder`]; the `_by` variants
//! take an explicit predicate. Since closure arguments are type-checked after
//! the others, the `_by` variants can usually infer a closure's parameter
//! types from the items or source heap they are given.

use crate::heap::Heap;
use crate::order::{Less, NaturalOrder};

/// Creates an empty heap in `T`'s natural order.
///
/// ```
/// let mut heap = sift::make_heap();
/// heap.push('b');
/// heap.push('a');
/// assert_eq!(heap.pop(), Ok('a'));
/// ```
#[must_use]
pub fn make_heap<T: Ord>() -> Heap<T> {
    Heap::new(NaturalOrder::new())
}

/// Creates an empty heap ordered by `less`.
///
/// ```
/// let mut heap = sift::make_heap_by(|a: &char, b: &char| a > b);
/// heap.push('a');
/// heap.push('b');
/// assert_eq!(heap.pop(), Ok('b'));
/// ```
#[must_use]
pub fn make_heap_by<T, F>(less: F) -> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    Heap::new(less)
}

/// Builds a heap in `T`'s natural order by pushing every item, in order.
///
/// ```
/// let heap = sift::to_heap(["pear", "apple", "fig"]);
/// assert_eq!(heap.into_sorted_vec(), ["apple", "fig", "pear"]);
/// ```
pub fn to_heap<T, I>(items: I) -> Heap<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut heap = make_heap();
    heap.extend(items);
    heap
}

/// Builds a heap ordered by `less` by pushing every item, in order.
///
/// ```
/// let heap = sift::to_heap_by(|a, b| a > b, [3u32, 1, 15, 2, 4, 42]);
/// assert_eq!(heap.into_sorted_vec(), [42, 15, 4, 3, 2, 1]);
/// ```
pub fn to_heap_by<T, F, I>(less: F, items: I) -> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
    I: IntoIterator<Item = T>,
{
    let mut heap = make_heap_by(less);
    heap.extend(items);
    heap
}

/// Moves every element out of `other`, in pop order, into a new heap in
/// `T`'s natural order.
///
/// `other` is left empty. Unlike [`Clone`], nothing is copied.
///
/// ```
/// use sift::{Heap, Reversed, NaturalOrder};
///
/// let mut max_first = Heap::new(Reversed(NaturalOrder::<i32>::new()));
/// max_first.extend([2, 9, 4]);
///
/// let mut min_first = sift::from_heap(&mut max_first);
/// assert!(max_first.is_empty());
/// assert_eq!(min_first.pop(), Ok(2));
/// ```
pub fn from_heap<T, L>(other: &mut Heap<T, L>) -> Heap<T>
where
    T: Ord,
    L: Less<T>,
{
    trace!("transferring {} elements into a naturally ordered heap", other.len());
    let mut heap = Heap::with_capacity(NaturalOrder::new(), other.len());
    heap.extend(other.drain_sorted());
    heap
}

/// Moves every element out of `other`, in pop order, into a new heap ordered
/// by `less`.
///
/// `other` is left empty. Unlike [`Clone`], nothing is copied.
///
/// ```
/// let mut by_value = sift::to_heap([-3i32, 1, -2]);
/// let mut by_magnitude = sift::from_heap_by(&mut by_value, |a, b| a.abs() < b.abs());
///
/// assert!(by_value.is_empty());
/// assert_eq!(by_magnitude.into_sorted_vec(), [1, -2, -3]);
/// ```
pub fn from_heap_by<T, L, F>(other: &mut Heap<T, L>, less: F) -> Heap<T, F>
where
    L: Less<T>,
    F: Fn(&T, &T) -> bool,
{
    trace!("transferring {} elements into a heap with a new predicate", other.len());
    let mut heap = Heap::with_capacity(less, other.len());
    heap.extend(other.drain_sorted());
    heap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeapError;
    use crate::order::SharedLess;

    #[test]
    fn test_to_heap_by_pops_in_order_then_fails() {
        let mut heap = to_heap_by(|x: &i32, y: &i32| x < y, [2, 3, 4, 1, 1, 5, 12, 666, -123]);
        assert_eq!(heap.len(), 9);

        let popped: Vec<_> = (0..12).map(|_| heap.pop()).collect();
        let mut expected: Vec<_> =
            [-123, 1, 1, 2, 3, 4, 5, 12, 666].into_iter().map(Ok).collect();
        expected.extend([Err(HeapError::EmptyContainer); 3]);
        assert_eq!(popped, expected);
    }

    #[test]
    fn test_make_heap_is_empty() {
        let heap = make_heap::<String>();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));

        let heap = make_heap_by(|a: &String, b: &String| a.len() < b.len());
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_to_heap_natural() {
        let mut heap = to_heap([14, 55, 29, 38, 100, 152, 32, 48]);
        assert_eq!(heap.len(), 8);
        assert_eq!(heap.peek(), Ok(&14));
        assert_eq!(heap.pop(), Ok(14));
        assert_eq!(heap.into_sorted_vec(), [29, 32, 38, 48, 55, 100, 152]);
    }

    #[test]
    fn test_to_heap_by_non_ord_elements() {
        #[derive(Clone, Debug, PartialEq)]
        struct Person {
            name: &'static str,
            age: f32,
        }

        let people = [
            Person { name: "John", age: 30.0 },
            Person { name: "Mary", age: 23.5 },
            Person { name: "Paul", age: 40.0 },
        ];
        let mut heap = to_heap_by(|a: &Person, b: &Person| a.age < b.age, people.iter().cloned());
        assert_eq!(heap.peek().map(|p| p.name), Ok("Mary"));

        heap.push(Person { name: "Peter", age: 15.0 });
        assert_eq!(heap.peek().map(|p| p.name), Ok("Peter"));

        let names: Vec<_> = heap.drain_sorted().map(|p| p.name).collect();
        assert_eq!(names, ["Peter", "Mary", "John", "Paul"]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_from_heap_empties_source() {
        let mut source = Heap::new(SharedLess::new(|a: &i32, b: &i32| a > b));
        source.extend([5, -1, 8, 3]);

        let mut natural = from_heap(&mut source);
        assert!(source.is_empty());
        assert_eq!(source.pop(), Err(HeapError::EmptyContainer));
        assert_eq!(natural.len(), 4);
        assert_eq!(natural.pop(), Ok(-1));
    }

    #[test]
    fn test_from_heap_by_matches_direct_popping() {
        let items = [7i64, 3, 9, 3, 0, 12, 5];
        let mut direct = to_heap_by(|a, b| a > b, items);
        let mut source = to_heap(items);

        let mut moved = from_heap_by(&mut source, |a, b| a > b);
        assert!(source.is_empty());
        assert_eq!(moved.len(), items.len());

        while let Ok(expected) = direct.pop() {
            assert_eq!(moved.pop(), Ok(expected));
        }
        assert!(moved.is_empty());
    }

    #[test]
    fn test_from_empty_heap() {
        let mut source = make_heap::<u8>();
        let heap = from_heap_by(&mut source, |a, b| a < b);
        assert!(heap.is_empty());
        assert!(source.is_empty());
    }
}
