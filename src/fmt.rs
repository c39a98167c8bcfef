//! Crate-internal logging macros.
//!
//! With the `defmt` feature these forward to the matching `defmt` macro. Without it
//! they expand to nothing but still borrow their arguments so call sites stay
//! warning-free.

#![macro_use]
#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::defmt::debug!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::defmt::trace!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}
