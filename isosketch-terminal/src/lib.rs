/// Terminal host for isometric sketches
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use isosketch_core::{build_sketch, IsoError, Sketch, SketchConfig};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod surface;

pub use surface::AsciiSurface;

/// Sketch errors are bad user input from the host's point of view
pub fn to_io_error(err: IsoError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}

const FRAME_BUDGET: Duration = Duration::from_millis(1000 / 30);

/// Frame timing: the `dt` handed to sketches and a once-a-second FPS average
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Instant,
    window_start: Instant,
    frames: u32,
    fps: f64,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last_tick: now,
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;
        dt
    }

    /// Count a finished frame; the average is refreshed once a full second has passed
    pub fn frame_done(&mut self, now: Instant) {
        self.frames += 1;
        let window = now.saturating_duration_since(self.window_start);
        if window >= Duration::from_secs(1) {
            self.fps = self.frames as f64 / window.as_secs_f64();
            self.frames = 0;
            self.window_start = now;
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}

/// Drives one sketch in the alternate screen until `q` or Esc
pub struct TerminalApp {
    name: &'static str,
    sketch: Box<dyn Sketch>,
    surface: AsciiSurface,
    running: bool,
    clock: FrameClock,
}

impl TerminalApp {
    pub fn new(config: &SketchConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let sketch = build_sketch(config).map_err(to_io_error)?;

        Ok(Self {
            name: config.kind().name(),
            sketch,
            surface: AsciiSurface::new(width as usize, height as usize),
            running: true,
            clock: FrameClock::new(Instant::now()),
        })
    }

    /// Take over the terminal, animate, and hand it back even if a frame failed
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        let restored = terminal::disable_raw_mode()
            .and_then(|()| execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show));
        result.and(restored)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        log::info!("running {} sketch", self.name);
        self.clock = FrameClock::new(Instant::now());

        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::ZERO)? {
                self.handle_event()?;
            }

            let dt = self.clock.tick(frame_start);
            self.sketch.update(dt);
            self.render()?;

            if let Some(spare) = FRAME_BUDGET.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(spare);
            }
            self.clock.frame_done(Instant::now());
        }

        log::info!("stopped {} sketch", self.name);
        Ok(())
    }

    fn handle_event(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => {
                self.running = false;
            }
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {width}x{height}");
                self.surface.resize(width as usize, height as usize);
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.surface.clear();
        self.sketch.render(&mut self.surface);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.surface.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "isosketch: {} | FPS: {:.1} | Q=Quit",
                self.name,
                self.clock.fps()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Render a single frame of `config` after `elapsed` seconds, without touching the
/// terminal mode.
pub fn snapshot(
    config: &SketchConfig,
    elapsed: f64,
    width: usize,
    height: usize,
) -> io::Result<AsciiSurface> {
    let mut sketch = build_sketch(config).map_err(to_io_error)?;
    sketch.update(elapsed);

    let mut surface = AsciiSurface::new(width, height);
    sketch.render(&mut surface);
    Ok(surface)
}
