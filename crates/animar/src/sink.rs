//! The frame sink boundary: where finished geometry leaves the engine.
//!
//! The engine produces geometric scenes; turning them into pixels and an
//! encoded video stream is the job of an external rasterizer/encoder behind
//! the [`VideoSink`] trait. This module pins that contract without shipping
//! a codec. Implementations must accept frames in strictly increasing time
//! order, which the [`Animator`](crate::Animator) loop guarantees, and must
//! surface I/O failure as errors instead of swallowing it.
//!
//! [`TraceSink`] is the provided no-op implementation: it checks session
//! ordering and logs every call through `tracing`, which makes it useful in
//! tests, demos, and as a template for real encoder backends.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geometry::{Geometry, Rectangle};
use crate::result::{AnimarError, AnimarResult};

/// An RGB color, used for frame backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A sink accepting completed frames for rasterization and encoding.
///
/// Session shape: one `initialize`, then per frame a `begin_frame`, any
/// number of `draw` calls, and one `end_frame`; finally one `close`. Frames
/// are finalized in strictly increasing time order.
pub trait VideoSink {
    /// Acquire encoder resources and open the output stream.
    fn initialize(&mut self) -> AnimarResult<()>;

    /// Start a new frame covering the world-coordinate `viewport`, optionally
    /// cleared to `background`.
    fn begin_frame(&mut self, viewport: &Rectangle, background: Option<Rgb>) -> AnimarResult<()>;

    /// Draw a geometric value into the current frame. Style attributes are a
    /// sink concern, not part of this contract.
    fn draw(&mut self, geometry: &Geometry) -> AnimarResult<()>;

    /// Finalize the current frame into an image and append it to the output
    /// stream `hold` times (a hold of 3 shows the frame for 3 encoder ticks;
    /// a hold of 0 drops it).
    fn end_frame(&mut self, hold: u32) -> AnimarResult<()>;

    /// Flush and release encoder resources.
    fn close(&mut self) -> AnimarResult<()>;
}

/// A [`VideoSink`] that encodes nothing and logs everything.
///
/// Enforces the session ordering contract, so a test running against
/// `TraceSink` catches misuse that a real encoder would reject.
#[derive(Debug, Default)]
pub struct TraceSink {
    initialized: bool,
    in_frame: bool,
    draws_in_frame: u64,
    frames_appended: u64,
}

impl TraceSink {
    /// Create an idle sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total frames appended to the (discarded) stream, holds included.
    #[must_use]
    pub fn frames_appended(&self) -> u64 {
        self.frames_appended
    }

    fn require_open_frame(&self, operation: &str) -> AnimarResult<()> {
        if !self.in_frame {
            return Err(AnimarError::Sink {
                message: format!("{operation} called with no frame begun"),
            });
        }
        Ok(())
    }
}

impl VideoSink for TraceSink {
    fn initialize(&mut self) -> AnimarResult<()> {
        debug!("trace sink initialized");
        self.initialized = true;
        self.frames_appended = 0;
        Ok(())
    }

    fn begin_frame(&mut self, viewport: &Rectangle, background: Option<Rgb>) -> AnimarResult<()> {
        if !self.initialized {
            return Err(AnimarError::Sink {
                message: "begin_frame called before initialize".to_string(),
            });
        }
        if self.in_frame {
            // Match encoder-writer behavior: finish the dangling frame
            // rather than losing it.
            warn!("frame not ended before starting a new frame; ending previous frame");
            self.end_frame(1)?;
        }
        debug!(
            min_x = viewport.min_x(),
            min_y = viewport.min_y(),
            width = viewport.width(),
            height = viewport.height(),
            background = ?background,
            "begin frame"
        );
        self.in_frame = true;
        self.draws_in_frame = 0;
        Ok(())
    }

    fn draw(&mut self, geometry: &Geometry) -> AnimarResult<()> {
        self.require_open_frame("draw")?;
        self.draws_in_frame += 1;
        debug!(?geometry, "draw");
        Ok(())
    }

    fn end_frame(&mut self, hold: u32) -> AnimarResult<()> {
        self.require_open_frame("end_frame")?;
        debug!(draws = self.draws_in_frame, hold, "end frame");
        self.frames_appended += u64::from(hold);
        self.in_frame = false;
        Ok(())
    }

    fn close(&mut self) -> AnimarResult<()> {
        if self.in_frame {
            warn!("closing sink with an unfinished frame; dropping it");
            self.in_frame = false;
        }
        debug!(frames = self.frames_appended, "trace sink closed");
        self.initialized = false;
        Ok(())
    }
}
