//! Conversion of loosely typed caller arguments into core values.
//!
//! Scripting-language bindings hand over colors as integer lists and counts as
//! signed integers. These helpers apply the same rules every binding must: an RGB
//! argument has exactly three elements, and each element is narrowed to its low
//! 8 bits rather than clamped, so `256` becomes `0` and `-1` becomes `255`.

use crate::types::{ArgumentError, Rgb8};

/// Narrows an integer to a color channel by keeping its low 8 bits.
#[inline]
pub fn truncate_channel(value: i64) -> u8 {
    value as u8
}

/// Builds a color from a three-element integer list.
///
/// # Errors
/// * `WrongLength` - `components` does not have exactly three elements
pub fn rgb_from_slice(components: &[i64]) -> Result<Rgb8, ArgumentError> {
    match *components {
        [r, g, b] => Ok(Rgb8::new(
            truncate_channel(r),
            truncate_channel(g),
            truncate_channel(b),
        )),
        _ => Err(ArgumentError::WrongLength {
            len: components.len(),
        }),
    }
}

/// Validates a pixel count.
///
/// # Errors
/// * `NotUnsigned` - `value` is negative or larger than `u32::MAX`
pub fn pixel_count_from(value: i64) -> Result<u32, ArgumentError> {
    u32::try_from(value).map_err(|_| ArgumentError::NotUnsigned { value })
}
