//! Logging shims.
//!
//! The `log` facade is optional so that bare `no_std` users need not pull it
//! in; without it the macros below still type-check their arguments but emit
//! nothing.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "log")] {
        macro_rules! trace {
            ($($arg:tt)+) => {
                ::log::trace!($($arg)+)
            };
        }
    } else {
        macro_rules! trace {
            ($($arg:tt)+) => {
                if false {
                    let _ = ::core::format_args!($($arg)+);
                }
            };
        }
    }
}
