/// Wireframe cube sketch
use std::f64::consts::TAU;

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{cube_edges, Edge};
use crate::projection::IsometricView;
use crate::sketch::{positive_setting, Phase, Sketch};
use crate::surface::{LineCap, Surface};
use crate::transform::ViewAngles;

#[derive(Debug, Clone, PartialEq)]
pub struct CubeConfig {
    /// Seconds per animation cycle
    pub period: f64,
    /// Canvas units per world unit
    pub scale: f64,
    pub view: ViewAngles,
    /// Turn the cube once around the vertical axis per cycle
    pub spin: bool,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            period: 3.0,
            scale: 100.0,
            view: ViewAngles::zero(),
            spin: false,
        }
    }
}

pub struct CubeSketch {
    config: CubeConfig,
    phase: Phase,
    edges: Vec<Edge>,
}

impl CubeSketch {
    pub fn new(config: CubeConfig) -> Result<Self> {
        positive_setting("scale", config.scale)?;
        Ok(Self {
            phase: Phase::new(config.period)?,
            edges: cube_edges(1.0),
            config,
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The view for the current frame
    pub fn view(&self) -> IsometricView {
        let mut angles = self.config.view;
        if self.config.spin {
            angles.rotate(TAU * self.phase.amt(), 0.0);
        }
        IsometricView::from_angles(angles)
    }
}

impl Sketch for CubeSketch {
    fn update(&mut self, dt: f64) {
        self.phase.advance(dt);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let view = self.view();

        surface.begin_path();
        surface.set_stroke_color(Color::BLACK);
        surface.set_line_cap(LineCap::Round);
        surface.scale(self.config.scale, self.config.scale);
        surface.set_line_width(2.0 / self.config.scale);

        for (p1, p2) in &self.edges {
            let p1_2d = view.project(p1);
            let p2_2d = view.project(p2);
            surface.move_to(p1_2d.x, p1_2d.y);
            surface.line_to(p2_2d.x, p2_2d.y);
        }
        surface.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_renders_every_edge_once() {
        let sketch = CubeSketch::new(CubeConfig::default()).unwrap();
        let mut surface = RecordingSurface::new();
        sketch.render(&mut surface);

        assert_eq!(surface.count(|c| matches!(c, DrawCommand::MoveTo(..))), 12);
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::LineTo(..))), 12);
        assert_eq!(surface.commands.first(), Some(&DrawCommand::BeginPath));
        assert_eq!(surface.commands.last(), Some(&DrawCommand::Stroke));
        assert!(surface
            .commands
            .contains(&DrawCommand::Scale(100.0, 100.0)));
    }

    #[test]
    fn test_static_cube_ignores_phase() {
        let mut sketch = CubeSketch::new(CubeConfig::default()).unwrap();
        let mut before = RecordingSurface::new();
        sketch.render(&mut before);

        sketch.update(1.0);
        assert!((sketch.phase().amt() - 1.0 / 3.0).abs() < 1e-12);
        let mut after = RecordingSurface::new();
        sketch.render(&mut after);
        assert_eq!(before.commands, after.commands);
    }

    #[test]
    fn test_rejects_unusable_scale() {
        for scale in [0.0, -100.0, f64::INFINITY, f64::NAN] {
            assert!(
                CubeSketch::new(CubeConfig {
                    scale,
                    ..CubeConfig::default()
                })
                .is_err(),
                "scale {scale} should be rejected"
            );
        }
    }

    #[test]
    fn test_spinning_cube_turns_with_phase() {
        let mut sketch = CubeSketch::new(CubeConfig {
            spin: true,
            ..CubeConfig::default()
        })
        .unwrap();
        assert_eq!(sketch.view(), IsometricView::FLAT);

        sketch.update(0.75);
        let angles = sketch.view().angles();
        assert!((angles.xz - TAU / 4.0).abs() < 1e-12);
        assert_eq!(angles.y, 0.0);
    }
}
