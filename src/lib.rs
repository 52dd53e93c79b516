#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::redundant_closure,
        clippy::useless_vec,
    )
)]

extern crate alloc;

#[macro_use]
mod polyfill;

#[macro_use]
mod macros;

mod construct;
mod error;
pub mod heap;
pub mod order;

pub use construct::{from_heap, from_heap_by, make_heap, make_heap_by, to_heap, to_heap_by};
pub use error::{HeapError, Result};
pub use heap::Heap;
pub use order::{Less, NaturalOrder, Reversed, SharedLess};

#[cfg(test)]
#[allow(dead_code)] // Not used in all configurations
pub(crate) mod test_helpers {
    /// Seeds a fresh RNG from the caller's location, so that two call sites
    /// never share a sequence.
    #[track_caller]
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec =
            hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<alloc::vec::Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
