//! Color type and error types shared across the crate.

use palette::Srgb;

/// An 8-bit-per-channel RGB color, the unit every pixel fades in.
///
/// Build one with `Rgb8::new(r, g, b)`, or convert from `(u8, u8, u8)` / `[u8; 3]`.
pub type Rgb8 = Srgb<u8>;

/// Errors produced by pixel array operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelError {
    /// The pixel index is not below the array's pixel count.
    IndexOutOfRange {
        /// The rejected index.
        index: u32,
        /// Number of pixels in the array.
        count: u32,
    },

    /// More pixels were requested than the array can store.
    CapacityExceeded {
        /// The requested pixel count.
        requested: u32,
        /// The array's compile-time capacity.
        capacity: usize,
    },
}

impl core::fmt::Display for PixelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PixelError::IndexOutOfRange { index, count } => {
                write!(f, "pixel index {} out of range for {} pixels", index, count)
            }
            PixelError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "cannot create {} pixels, array capacity is {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PixelError {}

/// Errors produced while turning loosely typed caller arguments into core values.
///
/// See [`crate::args`]. The core itself never returns these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// An RGB argument did not have exactly three elements.
    WrongLength {
        /// Number of elements supplied.
        len: usize,
    },

    /// A pixel count was negative or does not fit in `u32`.
    NotUnsigned {
        /// The rejected value.
        value: i64,
    },
}

impl core::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgumentError::WrongLength { len } => {
                write!(f, "rgb argument must have 3 elements, got {}", len)
            }
            ArgumentError::NotUnsigned { value } => {
                write!(f, "pixel count must be an unsigned 32-bit integer, got {}", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArgumentError {}
