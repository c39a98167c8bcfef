//! Fixed-length array of fading pixels.
//!
//! Provides [`PixelArray`], which owns one [`PixelState`] per pixel, advances all
//! of them once per [`trigger`](PixelArray::trigger) and tracks whether the whole
//! array has finished fading.

use crate::command::PixelCommand;
use crate::pixel::PixelState;
use crate::types::{PixelError, Rgb8};
use crate::BLACK;
use core::sync::atomic::{AtomicBool, Ordering};
use heapless::Vec;

/// An array of RGB pixels that fade one step per tick toward their targets.
///
/// Intended to be shared between a single render caller, which invokes
/// [`trigger`](Self::trigger) once per animation tick, and any number of
/// configuration callers setting new colors from other threads. Every operation
/// takes `&self`; wrap the array in an `Arc` or place it in a `static` to share it.
///
/// There is no array-wide lock. Each channel of each pixel is updated atomically
/// on its own, so a snapshot returned by `trigger` may mix an old and a new target
/// across the channels of a pixel that was being reconfigured at the same moment.
/// Two concurrent `trigger` calls on the same array are memory-safe but may
/// step a channel twice or lose a step.
///
/// # Type Parameters
/// * `N` - Maximum number of pixels this array can hold
#[derive(Debug)]
pub struct PixelArray<const N: usize> {
    pixels: Vec<PixelState, N>,
    count: u32,
    complete: AtomicBool,
}

impl<const N: usize> PixelArray<N> {
    /// Creates an array of `count` black pixels indexed `0..count`.
    ///
    /// `count == 0` gives an empty array whose `trigger` returns an empty frame.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `count` is larger than `N`
    pub fn new(count: u32) -> Result<Self, PixelError> {
        let exceeded = PixelError::CapacityExceeded {
            requested: count,
            capacity: N,
        };
        if count as usize > N {
            return Err(exceeded);
        }

        let mut pixels = Vec::new();
        for index in 0..count {
            pixels
                .push(PixelState::new(index))
                .map_err(|_| exceeded)?;
        }

        debug!("pixel array created: {} pixels, capacity {}", count, N);

        Ok(Self {
            pixels,
            count,
            complete: AtomicBool::new(false),
        })
    }

    /// Returns the number of pixels, fixed at construction.
    #[inline]
    pub fn pixel_count(&self) -> u32 {
        self.count
    }

    /// Returns the maximum number of pixels this array type can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns whether every pixel had reached its target as of the last `trigger`.
    ///
    /// False until `trigger` has run at least once.
    #[inline]
    pub fn fade_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Advances every pixel by one step and returns the resulting frame.
    ///
    /// The frame holds one color per pixel, ordered by pixel index. Call this once
    /// per animation tick from a single render caller.
    pub fn trigger(&self) -> Vec<Rgb8, N> {
        let mut frame = Vec::new();
        let _ = frame.resize(self.pixels.len(), BLACK);
        self.trigger_into(&mut frame);
        frame
    }

    /// Advances every pixel by one step, writing the resulting colors into `frame`.
    ///
    /// Pixel `i` lands in `frame[i]`. Pixels that do not fit in `frame` are still
    /// stepped. Returns the number of colors written.
    pub fn trigger_into(&self, frame: &mut [Rgb8]) -> usize {
        let mut complete = true;
        let mut written = 0;

        for pixel in &self.pixels {
            let (color, pixel_complete) = pixel.step();
            complete &= pixel_complete;

            if let Some(slot) = frame.get_mut(pixel.index() as usize) {
                *slot = color;
                written += 1;
            }
        }

        let was_complete = self.complete.swap(complete, Ordering::AcqRel);
        if complete && !was_complete {
            trace!("pixel array fade complete");
        }

        written
    }

    /// Starts fading pixel `index` toward `color`.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is not below the pixel count; nothing changes
    pub fn fade_to_rgb(&self, index: u32, color: impl Into<Rgb8>) -> Result<(), PixelError> {
        self.pixel(index)?.fade_to_rgb(color.into());
        Ok(())
    }

    /// Sets pixel `index` to `color` immediately, without fading.
    ///
    /// The pixel (and the array) only report completion after the next `trigger`.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is not below the pixel count; nothing changes
    pub fn set_rgb(&self, index: u32, color: impl Into<Rgb8>) -> Result<(), PixelError> {
        self.pixel(index)?.set_rgb(color.into());
        Ok(())
    }

    /// Sets every pixel to `color` immediately, without fading.
    pub fn fill_rgb(&self, color: impl Into<Rgb8>) {
        let color = color.into();
        for pixel in &self.pixels {
            pixel.set_rgb(color);
        }
    }

    /// Applies a queued configuration command.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - the command targets a pixel that does not exist
    pub fn handle_command(&self, command: PixelCommand) -> Result<(), PixelError> {
        match command {
            PixelCommand::FadeToRgb { index, color } => self.fade_to_rgb(index, color),
            PixelCommand::SetRgb { index, color } => self.set_rgb(index, color),
            PixelCommand::FillRgb(color) => {
                self.fill_rgb(color);
                Ok(())
            }
        }
    }

    /// Returns the color pixel `index` currently displays.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is not below the pixel count
    pub fn current(&self, index: u32) -> Result<Rgb8, PixelError> {
        Ok(self.pixel(index)?.current())
    }

    /// Returns the color pixel `index` is fading toward.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is not below the pixel count
    pub fn target(&self, index: u32) -> Result<Rgb8, PixelError> {
        Ok(self.pixel(index)?.target())
    }

    /// Returns whether pixel `index` had reached its target as of the last `trigger`.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is not below the pixel count
    pub fn pixel_complete(&self, index: u32) -> Result<bool, PixelError> {
        Ok(self.pixel(index)?.is_complete())
    }

    fn pixel(&self, index: u32) -> Result<&PixelState, PixelError> {
        self.pixels.get(index as usize).ok_or_else(|| {
            debug!("rejected pixel index {} of {}", index, self.count);
            PixelError::IndexOutOfRange {
                index,
                count: self.count,
            }
        })
    }
}
