//! Pointer tracking for hosts.
//!
//! Converts raw cursor positions (window pixels, origin top-left) into
//! the center-origin normalized coordinates the integrator consumes.
//! The host forwards cursor and resize events from whatever windowing
//! layer it uses; nothing here depends on one.
//!
//! # Example
//!
//! ```ignore
//! let mut pointer = Pointer::new();
//! pointer.set_window_size(1280, 720);
//!
//! // From the host's cursor-moved event:
//! pointer.cursor_moved(640.0, 360.0);
//! assert_eq!(pointer.ndc(), Vec2::ZERO); // window center
//! ```

use glam::Vec2;

/// Tracks the pointer in pixels and normalized device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Pointer {
    position_px: Vec2,
    ndc: Vec2,
    window_size: (u32, u32),
}

impl Pointer {
    /// Create a tracker with a nominal window size.
    pub fn new() -> Self {
        Self {
            position_px: Vec2::ZERO,
            ndc: Vec2::ZERO,
            window_size: (800, 600),
        }
    }

    /// Record a window resize.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Record a cursor move in window pixels (origin top-left).
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.position_px = Vec2::new(x, y);

        let (w, h) = self.window_size;
        if w > 0 && h > 0 {
            self.ndc = Vec2::new(
                (x / w as f32) * 2.0 - 1.0,
                1.0 - (y / h as f32) * 2.0, // Y flipped
            );
        }
    }

    /// Pointer position in window pixels.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position_px
    }

    /// Pointer position in normalized device coordinates (-1 to 1).
    ///
    /// Origin at the window center, X increasing right, Y increasing
    /// upward. Feed this into
    /// [`FrameInput::pointer`](crate::motion::FrameInput).
    #[inline]
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}
