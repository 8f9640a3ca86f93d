//! The fixed-count frame loop driving an animation.

use tracing::{debug, trace};

use crate::result::{AnimarError, AnimarResult};

/// Drives a fixed number of frames through a per-frame render callback.
///
/// For each frame index `f` in `0..frames`, in strictly increasing order, the
/// callback receives `f` and the fraction `f / (frames - 1)`. Frame 0 always
/// sees exactly `0.0` and the last frame exactly `1.0`; no frame is skipped,
/// reordered, or invoked twice. The loop is fully synchronous: it waits for
/// each callback to return before advancing, so frames reach an ordered
/// encoder in submission order.
///
/// # Example
///
/// ```
/// use animar::{Animator, Interpolator};
///
/// let interp = Interpolator::default();
/// let animator = Animator::new(5)?;
/// animator.run(|frame, fraction| {
///     let x = interp.between(fraction, 0.0, 100.0);
///     println!("frame {frame}: x = {x}");
///     Ok(())
/// })?;
/// # Ok::<(), animar::AnimarError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Animator {
    frames: u32,
}

impl Animator {
    /// Create an animator for a fixed number of frames.
    ///
    /// # Errors
    /// Returns [`AnimarError::InvalidFrameCount`] when `frames < 2`: a single
    /// frame leaves the fraction denominator `frames - 1` at zero.
    pub fn new(frames: u32) -> AnimarResult<Self> {
        if frames < 2 {
            return Err(AnimarError::InvalidFrameCount { frames });
        }
        Ok(Self { frames })
    }

    /// The fixed frame count.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Run the frame loop.
    ///
    /// The callback performs all per-frame work (interpolating, drawing,
    /// encoding) before returning. Returning an error aborts the loop
    /// immediately and propagates; this is also the cooperative way to
    /// cancel an animation between frames.
    ///
    /// # Errors
    /// Propagates the first error returned by the callback.
    pub fn run<F>(&self, mut render: F) -> AnimarResult<()>
    where
        F: FnMut(u32, f64) -> AnimarResult<()>,
    {
        debug!(frames = self.frames, "starting frame loop");
        let denominator = f64::from(self.frames - 1);
        for frame in 0..self.frames {
            let fraction = f64::from(frame) / denominator;
            trace!(frame, fraction, "rendering frame");
            render(frame, fraction)?;
        }
        debug!(frames = self.frames, "frame loop complete");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_five_frames_yield_quarter_fractions() {
        let animator = Animator::new(5).unwrap();
        let mut seen = Vec::new();
        animator
            .run(|frame, fraction| {
                seen.push((frame, fraction));
                Ok(())
            })
            .unwrap();
        assert_eq!(
            seen,
            vec![(0, 0.0), (1, 0.25), (2, 0.5), (3, 0.75), (4, 1.0)]
        );
    }

    #[test]
    fn test_two_frames_hit_both_endpoints() {
        let animator = Animator::new(2).unwrap();
        let mut fractions = Vec::new();
        animator
            .run(|_, fraction| {
                fractions.push(fraction);
                Ok(())
            })
            .unwrap();
        assert_eq!(fractions, vec![0.0, 1.0]);
    }

    #[test]
    fn test_single_frame_rejected_at_construction() {
        let err = Animator::new(1).unwrap_err();
        assert!(matches!(err, AnimarError::InvalidFrameCount { frames: 1 }));
    }

    #[test]
    fn test_zero_frames_rejected_at_construction() {
        assert!(Animator::new(0).is_err());
    }

    #[test]
    fn test_callback_error_aborts_loop() {
        let animator = Animator::new(10).unwrap();
        let mut invoked = 0;
        let result = animator.run(|frame, _| {
            invoked += 1;
            if frame == 3 {
                return Err(AnimarError::Sink {
                    message: "encoder gone".to_string(),
                });
            }
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(invoked, 4);
    }

    #[test]
    fn test_frame_count_accessor() {
        assert_eq!(Animator::new(42).unwrap().frame_count(), 42);
    }
}
