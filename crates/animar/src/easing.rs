//! Easing curves: reshaping a normalized frame fraction.
//!
//! An easing curve maps a fraction in `[0, 1]` to a "lambda", the eased
//! progress actually used for blending. Keeping the curve separate from the
//! blend math means switching an animation's feel never touches the
//! [`Interpolator`](crate::Interpolator) operations: every blend routes
//! through the same curve.
//!
//! Curves are expected to satisfy `f(0) == 0` and `f(1) == 1` so that blends
//! hit their endpoints exactly. This is a convention, not an enforced
//! constraint; out-of-range fractions pass through numerically and are never
//! clamped here.

/// A pluggable easing curve.
///
/// Any `Fn(f64) -> f64` closure implements this trait, so ad-hoc curves work
/// without a wrapper type:
///
/// ```
/// use animar::{EasingCurve, Interpolator};
///
/// let cubic = |t: f64| t * t * t;
/// assert_eq!(cubic.lambda(1.0), 1.0);
/// let interp = Interpolator::new(cubic);
/// assert_eq!(interp.between(1.0, 0.0, 10.0), 10.0);
/// ```
pub trait EasingCurve {
    /// Reshape a fraction into an eased lambda.
    fn lambda(&self, fraction: f64) -> f64;
}

impl<F> EasingCurve for F
where
    F: Fn(f64) -> f64,
{
    fn lambda(&self, fraction: f64) -> f64 {
        self(fraction)
    }
}

/// Identity easing: lambda equals the fraction.
///
/// This is the default curve of [`Interpolator`](crate::Interpolator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl EasingCurve for Linear {
    fn lambda(&self, fraction: f64) -> f64 {
        fraction
    }
}

/// Quadratic ease-in/ease-out.
///
/// Accelerates through the first half, decelerates through the second:
///
/// - `fraction <= 0.5`: `2 * fraction^2`
/// - `fraction > 0.5`: `1 - 2 * (1 - fraction)^2`
///
/// Both branches yield exactly `0.5` at the midpoint, so the curve is
/// continuous in value there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quadratic;

impl EasingCurve for Quadratic {
    fn lambda(&self, fraction: f64) -> f64 {
        if fraction <= 0.5 {
            2.0 * fraction * fraction
        } else {
            1.0 - 2.0 * (1.0 - fraction) * (1.0 - fraction)
        }
    }
}
