/// Example: print one frame of a sketch as plain text
///
/// Usage: cargo run --example snapshot -- [descriptor] [seconds]

use std::env;
use std::io;
use isosketch_core::SketchConfig;
use isosketch_terminal::{snapshot, to_io_error};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let descriptor = args.get(1).map(String::as_str).unwrap_or("shape");
    let seconds = match args.get(2) {
        Some(raw) => raw.parse::<f64>().map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("bad time {raw:?}: {e}"))
        })?,
        None => 1.0,
    };

    let config = SketchConfig::parse(descriptor).map_err(to_io_error)?;
    let surface = snapshot(&config, seconds, 80, 24)?;

    println!("{descriptor} at {seconds}s:");
    println!("{}", surface.to_text());
    Ok(())
}
