//! Fade state of a single RGB pixel.
//!
//! Provides [`PixelState`], which moves each color channel one unit per
//! [`trigger`](PixelState::trigger) toward its target. Every field is its own
//! atomic, so a pixel can be retargeted from one thread while another thread
//! steps it. Reads that span several fields are not transactional: a reader may
//! see red already retargeted while green still reflects the previous target.

use crate::types::Rgb8;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// One color channel: the displayed value, the value being faded toward, and the
/// direction latched when the target was last set.
#[derive(Debug)]
struct Channel {
    current: AtomicU8,
    target: AtomicU8,
    increasing: AtomicBool,
}

impl Channel {
    const fn new() -> Self {
        Self {
            current: AtomicU8::new(0),
            target: AtomicU8::new(0),
            increasing: AtomicBool::new(false),
        }
    }

    #[inline]
    fn current(&self) -> u8 {
        self.current.load(Ordering::Acquire)
    }

    #[inline]
    fn target(&self) -> u8 {
        self.target.load(Ordering::Acquire)
    }

    #[inline]
    fn is_settled(&self) -> bool {
        self.current() == self.target()
    }

    /// Moves the current value one unit in the latched direction.
    ///
    /// A channel latched as increasing that already sits at 255 falls through to
    /// the decreasing branch; the value never leaves `0..=255`.
    fn step(&self) {
        let current = self.current();
        if self.increasing.load(Ordering::Acquire) && current < u8::MAX {
            self.current.store(current + 1, Ordering::Release);
        } else if current > 0 {
            self.current.store(current - 1, Ordering::Release);
        }
    }

    #[inline]
    fn set_target(&self, target: u8) {
        self.target.store(target, Ordering::Release);
    }

    /// Latches the direction from where the channel is now, not from the old target.
    #[inline]
    fn latch_direction(&self) {
        let increasing = self.current() < self.target();
        self.increasing.store(increasing, Ordering::Release);
    }

    #[inline]
    fn set_immediate(&self, value: u8) {
        self.target.store(value, Ordering::Release);
        self.current.store(value, Ordering::Release);
    }
}

/// Fade state of one RGB pixel.
///
/// A pixel starts black with a black target. [`fade_to_rgb`](Self::fade_to_rgb)
/// sets a new target and [`trigger`](Self::trigger) advances each unsettled channel
/// by exactly one unit per call until current and target match.
///
/// All methods take `&self`. Configuration calls may race with `trigger`; each
/// field write is atomic on its own but the pixel as a whole is only eventually
/// consistent. `trigger` itself expects a single caller at a time.
#[derive(Debug)]
pub struct PixelState {
    index: u32,
    red: Channel,
    green: Channel,
    blue: Channel,
    complete: AtomicBool,
}

impl PixelState {
    /// Creates a black pixel with the given index.
    ///
    /// The completion flag starts out false and is first computed by `trigger`.
    pub const fn new(index: u32) -> Self {
        Self {
            index,
            red: Channel::new(),
            green: Channel::new(),
            blue: Channel::new(),
            complete: AtomicBool::new(false),
        }
    }

    /// Returns the pixel's position in its array.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the currently displayed color.
    pub fn current(&self) -> Rgb8 {
        Rgb8::new(self.red.current(), self.green.current(), self.blue.current())
    }

    /// Returns the color being faded toward.
    pub fn target(&self) -> Rgb8 {
        Rgb8::new(self.red.target(), self.green.target(), self.blue.target())
    }

    /// Returns the completion flag as of the last `trigger`.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Advances the fade by one step and returns the resulting color.
    pub fn trigger(&self) -> Rgb8 {
        self.step().0
    }

    /// Advances the fade by one step.
    ///
    /// Returns the resulting color together with the completion state observed
    /// before stepping, which is also what gets stored in the completion flag.
    pub(crate) fn step(&self) -> (Rgb8, bool) {
        let settled = [
            self.red.is_settled(),
            self.green.is_settled(),
            self.blue.is_settled(),
        ];
        let complete = settled.iter().all(|&s| s);
        self.complete.store(complete, Ordering::Release);

        if !complete {
            for (channel, settled) in self.channels().into_iter().zip(settled) {
                if !settled {
                    channel.step();
                }
            }
        }

        (self.current(), complete)
    }

    /// Sets a new target color and latches each channel's direction.
    ///
    /// The current color is untouched, so retargeting mid-fade continues from
    /// wherever the pixel is now.
    pub fn fade_to_rgb(&self, color: Rgb8) {
        self.red.set_target(color.red);
        self.green.set_target(color.green);
        self.blue.set_target(color.blue);
        self.complete.store(false, Ordering::Release);
        for channel in self.channels() {
            channel.latch_direction();
        }
    }

    /// Jumps straight to `color`, setting both current and target.
    ///
    /// The completion flag is cleared rather than set: it only becomes true on
    /// the next `trigger`, one tick after the pixel actually reached its color.
    pub fn set_rgb(&self, color: Rgb8) {
        self.red.set_immediate(color.red);
        self.green.set_immediate(color.green);
        self.blue.set_immediate(color.blue);
        self.complete.store(false, Ordering::Release);
    }

    #[inline]
    fn channels(&self) -> [&Channel; 3] {
        [&self.red, &self.green, &self.blue]
    }
}
