/// Builds a [`Heap`](crate::Heap) from a list of elements.
///
/// The supported patterns are documented under the headings below.
///
/// 1. # Natural order
///
///     ```
///     # use sift::heap;
///     let mut heap = heap![3, 1, 15, 2, 4, 42];
///     assert_eq!(heap.pop(), Ok(1));
///     assert_eq!(heap.len(), 5);
///     ```
///
///     Pushes each element, in order, onto a heap ordered by
///     [`NaturalOrder`](crate::NaturalOrder), exactly as
///     [`to_heap`](crate::to_heap) does. `heap![]` creates an empty heap, as
///     [`make_heap`](crate::make_heap) does.
///
/// 2. # Explicit predicate
///
///     ```
///     # use sift::heap;
///     let mut heap = heap![by |a, b| a > b; 3u8, 1, 15, 2, 4, 42];
///     assert_eq!(heap.pop(), Ok(42));
///     ```
///
///     Pushes each element, in order, onto a heap ordered by the given
///     `Fn(&T, &T) -> bool`, exactly as [`to_heap_by`](crate::to_heap_by)
///     does.
#[macro_export]
macro_rules! heap {
    () => {
        $crate::make_heap()
    };

    (by $less:expr; $($item:expr),* $(,)?) => {
        $crate::to_heap_by($less, [$($item),*])
    };

    ($($item:expr),+ $(,)?) => {
        $crate::to_heap([$($item),+])
    };
}
