//! Command-based control for pixel arrays.

use crate::types::Rgb8;

/// A configuration operation that can be queued and later applied with
/// [`PixelArray::handle_command`](crate::PixelArray::handle_command).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelCommand {
    /// Fade one pixel toward a color.
    FadeToRgb { index: u32, color: Rgb8 },
    /// Jump one pixel to a color.
    SetRgb { index: u32, color: Rgb8 },
    /// Jump every pixel to a color.
    FillRgb(Rgb8),
}

impl PixelCommand {
    /// Creates a fade command.
    pub fn fade_to(index: u32, color: impl Into<Rgb8>) -> Self {
        PixelCommand::FadeToRgb {
            index,
            color: color.into(),
        }
    }

    /// Creates an immediate-set command.
    pub fn set(index: u32, color: impl Into<Rgb8>) -> Self {
        PixelCommand::SetRgb {
            index,
            color: color.into(),
        }
    }

    /// Creates a fill command.
    pub fn fill(color: impl Into<Rgb8>) -> Self {
        PixelCommand::FillRgb(color.into())
    }

    /// Returns the targeted pixel index, or `None` for whole-array commands.
    pub fn index(&self) -> Option<u32> {
        match self {
            PixelCommand::FadeToRgb { index, .. } | PixelCommand::SetRgb { index, .. } => {
                Some(*index)
            }
            PixelCommand::FillRgb(_) => None,
        }
    }
}
