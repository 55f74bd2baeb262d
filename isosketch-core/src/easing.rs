//! Animation helpers
//!
//! Small pure functions that shape a raw phase into motion and shading. Sketches chain
//! them: [`looped`] -> [`clamped_remap`] / [`lerp`] -> [`ease_in_out`] -> geometry.

use crate::color::Color;
use crate::error::{IsoError, Result};

/// Wrap `t` into `[0, 1)`. Negative inputs wrap forwards, so `-0.25` becomes `0.75`.
pub fn looped(t: f64) -> f64 {
    let wrapped = t.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map `value` so that `lo -> 0` and `hi -> 1`, saturating outside that range.
///
/// `hi` may be below `lo`, which reverses the ramp. An empty interval is an error.
pub fn clamped_remap(value: f64, lo: f64, hi: f64) -> Result<f64> {
    if hi == lo {
        return Err(IsoError::DegenerateInterval { lo });
    }
    Ok(((value - lo) / (hi - lo)).clamp(0.0, 1.0))
}

/// Symmetric polynomial ease over `[0, 1]`.
///
/// Each half is `(2t)^power` scaled into its quarter, mirrored about `t = 0.5`.
/// `t` is clamped first and a power of zero behaves like one (linear).
pub fn ease_in_out(t: f64, power: u32) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let power = power.max(1) as i32;
    if t <= 0.5 {
        0.5 * (2.0 * t).powi(power)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powi(power)
    }
}

/// Neutral gray with brightness `amt`: 0 is black and 1 is white.
pub fn grayscale(amt: f64) -> Color {
    let value = (amt.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::gray(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_looped() {
        assert_eq!(looped(0.0), 0.0);
        assert!((looped(-0.25) - 0.75).abs() < EPS);
        assert!((looped(1.25) - 0.25).abs() < EPS);
        assert!((looped(-3.5) - 0.5).abs() < EPS);
        assert_eq!(looped(1.0), 0.0);
        assert_eq!(looped(-1e-20), 0.0);

        for i in -40..40 {
            let t = i as f64 * 0.173;
            let r = looped(t);
            assert!((0.0..1.0).contains(&r), "looped({t}) = {r}");
            let shifted = looped(t + 1.0);
            // both representatives of the same class, modulo float rounding at the wrap
            let diff = (shifted - r).abs();
            assert!(diff < 1e-9 || (diff - 1.0).abs() < 1e-9);
        }

        // exactly representable inputs shift by whole periods without rounding
        for t in [0.0, 0.25, 0.5, 0.75, -0.5, 3.125] {
            assert_eq!(looped(t + 1.0), looped(t));
            assert_eq!(looped(t - 2.0), looped(t));
        }
        assert_eq!(looped(0.5 + 1.0), 0.5);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(3.0, -7.0, 0.0), 3.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_clamped_remap() {
        assert_eq!(clamped_remap(5.0, 0.0, 10.0).unwrap(), 0.5);
        assert_eq!(clamped_remap(-5.0, 0.0, 10.0).unwrap(), 0.0);
        assert_eq!(clamped_remap(15.0, 0.0, 10.0).unwrap(), 1.0);
        assert_eq!(clamped_remap(0.25, 1.0, 0.0).unwrap(), 0.75);
    }

    #[test]
    fn test_clamped_remap_rejects_empty_interval() {
        assert_eq!(
            clamped_remap(1.0, 2.0, 2.0),
            Err(IsoError::DegenerateInterval { lo: 2.0 })
        );
    }

    #[test]
    fn test_ease_in_out_fixed_points() {
        for power in 0..6 {
            assert_eq!(ease_in_out(0.0, power), 0.0);
            assert_eq!(ease_in_out(1.0, power), 1.0);
            assert_eq!(ease_in_out(0.5, power), 0.5);
        }
    }

    #[test]
    fn test_ease_in_out_shape() {
        // flatter at the ends for higher powers
        assert!(ease_in_out(0.1, 3) < ease_in_out(0.1, 2));
        assert!(ease_in_out(0.9, 3) > ease_in_out(0.9, 2));
        // symmetric about the midpoint
        let a = ease_in_out(0.2, 4);
        let b = ease_in_out(0.8, 4);
        assert!((a + b - 1.0).abs() < EPS);
        // monotonic
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(i as f64 / 100.0, 3);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(ease_in_out(-1.0, 2), 0.0);
        assert_eq!(ease_in_out(0.3, 1), 0.3);
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(grayscale(0.0), Color::BLACK);
        assert_eq!(grayscale(1.0), Color::WHITE);
        assert_eq!(grayscale(2.0), Color::WHITE);
        let mid = grayscale(0.5);
        assert_eq!((mid.r, mid.g, mid.b), (128, 128, 128));
        assert_eq!(mid.to_string(), "rgb(128, 128, 128)");
    }
}
