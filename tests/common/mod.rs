//! Shared test infrastructure for pixel-fade integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pixel_fade::{PixelArray, Rgb8};

// ============================================================================
// Color helpers
// ============================================================================

pub fn rgb(r: u8, g: u8, b: u8) -> Rgb8 {
    Rgb8::new(r, g, b)
}

/// Returns true if `value` lies between `a` and `b`, inclusive, in either order
pub fn between(value: u8, a: u8, b: u8) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

// ============================================================================
// Tick helpers
// ============================================================================

/// Triggers `array` `ticks` times and returns the color of pixel `index` after each tick
pub fn run_pixel<const N: usize>(
    array: &PixelArray<N>,
    index: usize,
    ticks: usize,
) -> heapless::Vec<Rgb8, 512> {
    let mut history = heapless::Vec::new();
    for _ in 0..ticks {
        let frame = array.trigger();
        let _ = history.push(frame[index]);
    }
    history
}

/// Triggers until the array reports completion; returns the number of ticks taken
pub fn run_until_complete<const N: usize>(array: &PixelArray<N>, limit: usize) -> Option<usize> {
    for tick in 1..=limit {
        array.trigger();
        if array.fade_complete() {
            return Some(tick);
        }
    }
    None
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use pixel_fade::{BLACK, BLUE, GREEN, RED, WHITE};
