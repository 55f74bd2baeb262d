/// `Surface` backed by a browser 2D canvas context
use isosketch_core::{Color, LineCap, LineJoin, Surface};
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl Surface for CanvasSurface {
    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style_str(&color.to_string());
    }

    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style_str(&color.to_string());
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.context.set_line_cap(cap.as_css());
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.context.set_line_join(join.as_css());
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        if let Err(e) = self.context.scale(sx, sy) {
            log::warn!("canvas rejected scale({sx}, {sy}): {e:?}");
        }
    }
}
