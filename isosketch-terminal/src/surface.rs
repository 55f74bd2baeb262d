/// ASCII rasterizer implementing the sketch drawing surface
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use isosketch_core::{Color, LineCap, LineJoin, Surface};
use nalgebra::{Point2, Vector2};
use std::io::Write;

/// Character luminosity ramp for fills (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Canvas pixels covered by one terminal cell. Cells are about twice as tall as wide.
const DEFAULT_CELL_SIZE: (f64, f64) = (10.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::WHITE,
    };
}

/// Style state set by sketches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke: Color,
    pub fill: Color,
    /// Kept for parity with a canvas; every line is one cell wide
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }
}

/// Surface that rasterizes paths into a grid of colored characters.
///
/// The origin sits in the middle of the grid and y grows downwards, like a canvas
/// translated to its center.
pub struct AsciiSurface {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    cell_size: Vector2<f64>,
    scale: Vector2<f64>,
    style: Style,
    subpaths: Vec<Vec<Point2<f64>>>,
}

impl AsciiSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
            cell_size: Vector2::new(DEFAULT_CELL_SIZE.0, DEFAULT_CELL_SIZE.1),
            scale: Vector2::new(1.0, 1.0),
            style: Style::default(),
            subpaths: Vec::new(),
        }
    }

    /// Override how many canvas pixels one cell covers
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_size = Vector2::new(width, height);
        self
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width * height];
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Reset cells, transform, style and path for a new frame
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.scale = Vector2::new(1.0, 1.0);
        self.style = Style::default();
        self.subpaths.clear();
    }

    /// The grid as plain text, one line per row
    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// User coordinates to fractional cell coordinates
    fn to_device(&self, x: f64, y: f64) -> Point2<f64> {
        Point2::new(
            self.width as f64 / 2.0 + x * self.scale.x / self.cell_size.x,
            self.height as f64 / 2.0 + y * self.scale.y / self.cell_size.y,
        )
    }

    fn plot(&mut self, x: i64, y: i64, cell: Cell) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let idx = y as usize * self.width + x as usize;
            self.cells[idx] = cell;
        }
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Color) {
        let delta = to - from;
        let ch = line_char(delta);

        // only the part inside the grid (plus a one cell margin) is stepped
        let lo = Point2::new(-1.0, -1.0);
        let hi = Point2::new(self.width as f64 + 1.0, self.height as f64 + 1.0);
        let Some((t0, t1)) = clip_segment(from, delta, lo, hi) else {
            return;
        };
        let start = from + delta * t0;
        let visible = delta * (t1 - t0);
        let steps = visible.x.abs().max(visible.y.abs()).ceil().max(1.0) as usize;

        for i in 0..=steps {
            let p = start + visible * (i as f64 / steps as f64);
            self.plot(p.x.floor() as i64, p.y.floor() as i64, Cell { ch, color });
        }
    }

    /// Even-odd scanline fill of every subpath, sampling cell centers
    fn fill_path(&mut self, color: Color) {
        let ramp_index = (color.luminance() * (LUMINOSITY_RAMP.len() - 1) as f64).round() as usize;
        let ch = LUMINOSITY_RAMP[ramp_index.min(LUMINOSITY_RAMP.len() - 1)];
        // an all-dark fill would be invisible as a space
        let ch = if ch == ' ' { '.' } else { ch };

        let edges: Vec<(Point2<f64>, Point2<f64>)> = self
            .subpaths
            .iter()
            .filter(|path| path.len() > 2)
            .flat_map(|path| {
                path.iter()
                    .zip(path.iter().cycle().skip(1))
                    .map(|(a, b)| (*a, *b))
                    .collect::<Vec<_>>()
            })
            .collect();

        for row in 0..self.height {
            let py = row as f64 + 0.5;
            let mut crossings: Vec<f64> = edges
                .iter()
                .filter(|(a, b)| (a.y <= py) != (b.y <= py))
                .map(|(a, b)| a.x + (py - a.y) / (b.y - a.y) * (b.x - a.x))
                .collect();
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                for col in 0..self.width {
                    let px = col as f64 + 0.5;
                    if px >= span[0] && px < span[1] {
                        self.plot(col as i64, row as i64, Cell { ch, color });
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(TermColor::Rgb {
                        r: cell.color.r,
                        g: cell.color.g,
                        b: cell.color.b,
                    }))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.ch))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Liang-Barsky clip of `from + t * delta`, `t` in `[0, 1]`, against the box `lo..hi`.
///
/// Returns the `(t0, t1)` range that lies inside, or `None` when the segment misses the
/// box or has a non-finite coordinate.
fn clip_segment(
    from: Point2<f64>,
    delta: Vector2<f64>,
    lo: Point2<f64>,
    hi: Point2<f64>,
) -> Option<(f64, f64)> {
    if !from.coords.iter().chain(delta.iter()).all(|v| v.is_finite()) {
        return None;
    }

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let bounds = [
        (-delta.x, from.x - lo.x),
        (delta.x, hi.x - from.x),
        (-delta.y, from.y - lo.y),
        (delta.y, hi.y - from.y),
    ];
    for (p, q) in bounds {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    (t0 <= t1).then_some((t0, t1))
}

/// Pick a character that follows the line's direction. y grows downwards.
fn line_char(delta: Vector2<f64>) -> char {
    let (dx, dy) = (delta.x.abs(), delta.y.abs());
    if dx < 1e-9 && dy < 1e-9 {
        // an edge seen end-on
        '+'
    } else if dy < dx * 0.5 {
        '-'
    } else if dx < dy * 0.5 {
        '|'
    } else if (delta.x > 0.0) == (delta.y > 0.0) {
        '\\'
    } else {
        '/'
    }
}

impl Surface for AsciiSurface {
    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.to_device(x, y);
        self.subpaths.push(vec![p]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.to_device(x, y);
        match self.subpaths.last_mut() {
            Some(path) => path.push(p),
            // a canvas treats a leading lineTo as a moveTo
            None => self.subpaths.push(vec![p]),
        }
    }

    fn stroke(&mut self) {
        let color = self.style.stroke;
        let segments: Vec<(Point2<f64>, Point2<f64>)> = self
            .subpaths
            .iter()
            .flat_map(|path| path.windows(2).map(|w| (w[0], w[1])).collect::<Vec<_>>())
            .collect();
        for (from, to) in segments {
            self.draw_line(from, to, color);
        }
    }

    fn fill(&mut self) {
        self.fill_path(self.style.fill);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.style.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.style.fill = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.style.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.style.line_cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.style.line_join = join;
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.scale.x *= sx;
        self.scale.y *= sy;
    }
}
