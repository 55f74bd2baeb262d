//! Rising column sketch
//!
//! A square column split into stacked slabs that grow out of the ground over each
//! cycle. The variations (how a slab's height follows the phase, whether the slabs
//! move together or one after another, how faces are colored) are options on
//! [`ShapeConfig`] rather than separate sketches.

use crate::color::Color;
use crate::easing::{clamped_remap, ease_in_out, grayscale, lerp};
use crate::error::{IsoError, Result};
use crate::geometry::{FaceKind, Quad, Slab};
use crate::projection::IsometricView;
use crate::sketch::{positive_setting, Phase, Sketch};
use crate::surface::{LineCap, LineJoin, Surface};
use crate::transform::ViewAngles;

const HALF_WIDTH: f64 = 1.0;

/// More slabs than this are thinner than a stroke at any sensible scale
pub const MAX_SLICES: usize = 256;

/// How a slab's growth follows its own progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightCurve {
    Linear,
    Eased { power: u32 },
    /// Up during the first half of the progress, back down during the second
    PingPong { power: u32 },
}

impl HeightCurve {
    pub fn apply(&self, amt: f64) -> f64 {
        match *self {
            HeightCurve::Linear => amt,
            HeightCurve::Eased { power } => ease_in_out(amt, power),
            HeightCurve::PingPong { power } => {
                let there_and_back = if amt < 0.5 { 2.0 * amt } else { 2.0 - 2.0 * amt };
                ease_in_out(there_and_back, power)
            }
        }
    }
}

/// How the cycle is divided between slabs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitTiming {
    /// Every slab uses the whole cycle
    Together,
    /// Slabs take turns, bottom first. `overlap` in `[0, 1)` lets neighbouring
    /// windows run into each other; 0 gives back-to-back windows.
    Staggered { overlap: f64 },
}

impl SplitTiming {
    /// The `(start, end)` part of the cycle during which slab `index` of `count` grows
    pub fn window(&self, index: usize, count: usize) -> (f64, f64) {
        match *self {
            SplitTiming::Together => (0.0, 1.0),
            SplitTiming::Staggered { overlap } => {
                if count <= 1 {
                    return (0.0, 1.0);
                }
                let n = count as f64;
                let length = 1.0 / n + overlap * (1.0 - 1.0 / n);
                let start = index as f64 * (1.0 - length) / (n - 1.0);
                (start, start + length)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorScheme {
    /// Black strokes only
    Outline,
    /// Fixed gray levels for the top and the sides
    Grayscale { top: f64, side: f64 },
    /// Slabs brighten as they grow
    PhaseShaded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
    /// Seconds per animation cycle
    pub period: f64,
    pub slices: usize,
    /// Full height of the column once every slab has grown
    pub height: f64,
    /// Canvas units per world unit
    pub scale: f64,
    pub view: ViewAngles,
    pub curve: HeightCurve,
    pub timing: SplitTiming,
    pub colors: ColorScheme,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            period: 3.0,
            slices: 3,
            height: 2.0,
            scale: 60.0,
            view: IsometricView::classic().angles(),
            curve: HeightCurve::Eased { power: 3 },
            timing: SplitTiming::Staggered { overlap: 0.25 },
            colors: ColorScheme::Grayscale {
                top: 0.9,
                side: 0.6,
            },
        }
    }
}

pub struct ShapeSketch {
    config: ShapeConfig,
    phase: Phase,
    view: IsometricView,
}

impl ShapeSketch {
    pub fn new(config: ShapeConfig) -> Result<Self> {
        if !(1..=MAX_SLICES).contains(&config.slices) {
            return Err(IsoError::InvalidConfig(format!(
                "a shape needs between 1 and {MAX_SLICES} slices, got {}",
                config.slices
            )));
        }
        positive_setting("height", config.height)?;
        positive_setting("scale", config.scale)?;
        if let SplitTiming::Staggered { overlap } = config.timing {
            if !(0.0..1.0).contains(&overlap) {
                return Err(IsoError::InvalidConfig(format!(
                    "stagger overlap must be in [0, 1), got {overlap}"
                )));
            }
        }
        Ok(Self {
            phase: Phase::new(config.period)?,
            view: IsometricView::from_angles(config.view),
            config,
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Growth of each slab in `[0, 1]` at the current phase, after the height curve
    pub fn slab_progress(&self) -> Result<Vec<f64>> {
        let count = self.config.slices;
        (0..count)
            .map(|i| {
                let (start, end) = self.config.timing.window(i, count);
                let amt = clamped_remap(self.phase.amt(), start, end)?;
                Ok(self.config.curve.apply(amt))
            })
            .collect()
    }

    /// Slabs stacked bottom to top, each paired with its progress
    pub fn slabs(&self) -> Result<Vec<(Slab, f64)>> {
        let slice_height = self.config.height / self.config.slices as f64;
        let mut base = self.config.height / 2.0;

        let mut slabs = Vec::with_capacity(self.config.slices);
        for progress in self.slab_progress()? {
            let slab = Slab::new(HALF_WIDTH, base, lerp(0.0, slice_height, progress));
            base = slab.top();
            slabs.push((slab, progress));
        }
        Ok(slabs)
    }

    fn fill_color(&self, kind: FaceKind, progress: f64) -> Option<Color> {
        // the front face sits a little darker than the right one
        let side_shade = |amt: f64| {
            if kind == FaceKind::Front {
                amt * 0.85
            } else {
                amt
            }
        };
        match self.config.colors {
            ColorScheme::Outline => None,
            ColorScheme::Grayscale { top, side } => Some(grayscale(match kind {
                FaceKind::Top => top,
                _ => side_shade(side),
            })),
            ColorScheme::PhaseShaded => {
                let brightness = lerp(0.35, 0.95, progress);
                Some(grayscale(match kind {
                    FaceKind::Top => brightness,
                    _ => side_shade(brightness * 0.8),
                }))
            }
        }
    }

    fn draw_face(&self, surface: &mut dyn Surface, face: &Quad, fill: Option<Color>) {
        let corners = self.view.project_all(&face.corners);

        if let Some(color) = fill {
            surface.set_fill_color(color);
        }
        surface.begin_path();
        surface.move_to(corners[0].x, corners[0].y);
        for corner in corners.iter().skip(1).chain(corners.first()) {
            surface.line_to(corner.x, corner.y);
        }
        if fill.is_some() {
            surface.fill();
        }
        surface.stroke();
    }
}

impl Sketch for ShapeSketch {
    fn update(&mut self, dt: f64) {
        self.phase.advance(dt);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let slabs = match self.slabs() {
            Ok(slabs) => slabs,
            Err(e) => {
                log::warn!("skipping shape frame: {e}");
                return;
            }
        };

        surface.scale(self.config.scale, self.config.scale);
        surface.set_stroke_color(Color::BLACK);
        surface.set_line_width(1.5 / self.config.scale);
        surface.set_line_cap(LineCap::Round);
        surface.set_line_join(LineJoin::Round);

        for (slab, progress) in &slabs {
            for face in slab.visible_faces().iter() {
                self.draw_face(surface, face, self.fill_color(face.kind, *progress));
            }
        }
    }
}
