/// isosketch terminal demo
///
/// Usage: isosketch-terminal [descriptor]
///
/// The descriptor picks and configures a sketch, for example `cube:spin=true` or
/// `shape:slices=4,curve=pingpong:3,colors=phase`. Defaults to `cube`.
/// Controls:
///   - Q/ESC: Quit

use std::env;
use std::io;
use isosketch_core::SketchConfig;
use isosketch_terminal::{to_io_error, TerminalApp};

fn main() -> io::Result<()> {
    env_logger::init();

    let descriptor = env::args().nth(1).unwrap_or_else(|| "cube".to_string());
    let config = SketchConfig::parse(&descriptor).map_err(to_io_error)?;

    println!("isosketch - starting {} (press Q to quit)...", config.kind().name());
    std::thread::sleep(std::time::Duration::from_millis(500));

    let mut app = TerminalApp::new(&config)?;
    app.run()?;

    Ok(())
}
