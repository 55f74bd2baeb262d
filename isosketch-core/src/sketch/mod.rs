//! Sketch controllers
//!
//! A sketch owns its animation phase and nothing else. Hosts call [`Sketch::update`]
//! with the elapsed time, then [`Sketch::render`] with a surface, once per frame.

use crate::config::SketchConfig;
use crate::easing::looped;
use crate::error::{IsoError, Result};
use crate::surface::Surface;

pub mod cube;
pub mod shape;

pub use cube::{CubeConfig, CubeSketch};
pub use shape::{ColorScheme, HeightCurve, ShapeConfig, ShapeSketch, SplitTiming, MAX_SLICES};

pub trait Sketch {
    /// Simulate `dt` seconds passing
    fn update(&mut self, dt: f64);

    fn render(&self, surface: &mut dyn Surface);
}

/// Position within a repeating animation, always in `[0, 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    amt: f64,
    period: f64,
}

impl Phase {
    /// `period` is the length of one cycle in seconds
    pub fn new(period: f64) -> Result<Self> {
        if !(period.is_finite() && period > 0.0) {
            return Err(IsoError::InvalidPeriod(period));
        }
        Ok(Self { amt: 0.0, period })
    }

    pub fn amt(&self) -> f64 {
        self.amt
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn advance(&mut self, dt: f64) {
        self.amt = looped(self.amt + dt / self.period);
    }
}

/// Check a size-like setting is a usable number: finite and above zero
pub(crate) fn positive_setting(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(IsoError::InvalidConfig(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

/// The sketches a descriptor can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchKind {
    Cube,
    Shape,
}

impl SketchKind {
    pub fn name(&self) -> &'static str {
        match self {
            SketchKind::Cube => "cube",
            SketchKind::Shape => "shape",
        }
    }
}

/// Construct the sketch a config describes
pub fn build_sketch(config: &SketchConfig) -> Result<Box<dyn Sketch>> {
    log::debug!("building {} sketch: {:?}", config.kind().name(), config);
    Ok(match config {
        SketchConfig::Cube(cube) => Box::new(CubeSketch::new(cube.clone())?),
        SketchConfig::Shape(shape) => Box::new(ShapeSketch::new(shape.clone())?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_phase_advances_and_wraps() {
        let mut phase = Phase::new(3.0).unwrap();
        assert_eq!(phase.amt(), 0.0);

        phase.advance(1.5);
        assert!((phase.amt() - 0.5).abs() < 1e-12);

        phase.advance(2.25);
        assert!((phase.amt() - 0.25).abs() < 1e-12);

        phase.advance(-0.75);
        assert!(phase.amt().abs() < 1e-12 || (phase.amt() - 1.0).abs() < 1e-12);
        assert!(phase.amt() < 1.0);
    }

    #[test]
    fn test_phase_rejects_bad_period() {
        assert_eq!(Phase::new(0.0), Err(IsoError::InvalidPeriod(0.0)));
        assert!(Phase::new(-1.0).is_err());
        assert!(Phase::new(f64::INFINITY).is_err());
        assert!(Phase::new(f64::NAN).is_err());
    }

    #[test]
    fn test_positive_setting() {
        assert_eq!(positive_setting("scale", 60.0), Ok(60.0));
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                positive_setting("scale", bad),
                Err(IsoError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_build_sketch_from_config() {
        let mut sketch = build_sketch(&SketchConfig::Cube(CubeConfig::default())).unwrap();
        sketch.update(0.1);

        let mut surface = RecordingSurface::new();
        sketch.render(&mut surface);
        assert_eq!(surface.count(|c| *c == DrawCommand::Stroke), 1);
    }

    #[test]
    fn test_build_sketch_propagates_errors() {
        let config = SketchConfig::Shape(ShapeConfig {
            period: -2.0,
            ..ShapeConfig::default()
        });
        assert!(matches!(
            build_sketch(&config),
            Err(IsoError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_oversized_descriptors_fail_to_build() {
        for descriptor in ["shape:slices=4000000000", "shape:height=inf", "cube:scale=-5"] {
            let config = SketchConfig::parse(descriptor).unwrap();
            assert!(
                matches!(build_sketch(&config), Err(IsoError::InvalidConfig(_))),
                "{descriptor:?} should not build"
            );
        }
    }
}
