//! Drawing surface abstraction
//!
//! Sketches draw through [`Surface`], an immediate-mode 2D path API modelled on the
//! browser canvas. Hosts provide the implementation: a real canvas, a terminal
//! rasterizer, or the [`RecordingSurface`] used in tests.

use crate::color::Color;

/// How the ends of stroked lines are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    /// Canvas `lineCap` keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// How corners between joined segments are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    /// Canvas `lineJoin` keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Immediate-mode path drawing plus the style state sketches set.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);

    /// Multiply the current transform by a scale
    fn scale(&mut self, sx: f64, sy: f64);
}

/// A single call made on a [`Surface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    Fill,
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    LineCap(LineCap),
    LineJoin(LineJoin),
    Scale(f64, f64),
}

/// Surface that keeps every call, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Play the recorded calls onto another surface
    pub fn replay(&self, target: &mut dyn Surface) {
        for command in &self.commands {
            match *command {
                DrawCommand::BeginPath => target.begin_path(),
                DrawCommand::MoveTo(x, y) => target.move_to(x, y),
                DrawCommand::LineTo(x, y) => target.line_to(x, y),
                DrawCommand::Stroke => target.stroke(),
                DrawCommand::Fill => target.fill(),
                DrawCommand::StrokeColor(color) => target.set_stroke_color(color),
                DrawCommand::FillColor(color) => target.set_fill_color(color),
                DrawCommand::LineWidth(width) => target.set_line_width(width),
                DrawCommand::LineCap(cap) => target.set_line_cap(cap),
                DrawCommand::LineJoin(join) => target.set_line_join(join),
                DrawCommand::Scale(sx, sy) => target.scale(sx, sy),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.commands.push(DrawCommand::LineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.commands.push(DrawCommand::LineJoin(join));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.commands.push(DrawCommand::Scale(sx, sy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.set_line_cap(LineCap::Round);
        surface.begin_path();
        surface.move_to(0.0, 1.0);
        surface.line_to(2.0, 3.0);
        surface.stroke();

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::LineCap(LineCap::Round),
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(0.0, 1.0),
                DrawCommand::LineTo(2.0, 3.0),
                DrawCommand::Stroke,
            ]
        );
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::MoveTo(..))), 1);
    }

    #[test]
    fn test_replay_copies_commands() {
        let mut source = RecordingSurface::new();
        source.set_fill_color(Color::GRAY);
        source.scale(2.0, 2.0);
        source.fill();

        let mut target = RecordingSurface::new();
        source.replay(&mut target);
        assert_eq!(source.commands, target.commands);

        target.clear();
        assert!(target.commands.is_empty());
    }

    #[test]
    fn test_css_keywords() {
        assert_eq!(LineCap::Round.as_css(), "round");
        assert_eq!(LineJoin::Bevel.as_css(), "bevel");
        assert_eq!(LineCap::default(), LineCap::Butt);
    }
}
