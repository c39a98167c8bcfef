#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PixelArray`**: Fixed-length array of pixels, stepped once per tick by `trigger`
//! - **`PixelState`**: Fade state of one pixel (current color, target, latched direction)
//! - **`PixelCommand`**: A queued configuration operation applied with `handle_command`
//! - **`PixelError`**: Index and capacity errors returned by the array
//! - **`args`**: Helpers that apply the integer-list argument rules used by bindings
//!
//! Colors are `Srgb<u8>` (aliased as `Rgb8`). Each channel moves by exactly one unit
//! per tick until it equals its target, so a fade from 0 to 255 takes 255 ticks.

// This must go first so the logging macros are visible to the other modules.
mod fmt;

pub use palette::Srgb;

pub mod args;
pub mod array;
pub mod command;
pub mod pixel;
pub mod types;

pub use array::PixelArray;
pub use command::PixelCommand;
pub use pixel::PixelState;
pub use types::{ArgumentError, PixelError, Rgb8};

/// Crate version, reported as the build identifier.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the build identifier.
pub fn version() -> &'static str {
    VERSION
}

pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
