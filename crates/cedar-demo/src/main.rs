#![forbid(unsafe_code)]

//! Cedar demo binary entry point.

mod cli;
mod scene;

use std::fs::File;
use std::sync::Mutex;

use cedar::{
    Event, Key, KeyEvent, LayoutConfig, SessionOptions, TerminalSession, TerminalSurface, Window,
    WindowConfig,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Opts;
use crate::scene::Scene;

fn main() {
    let opts = Opts::parse();

    if let Err(e) = init_logging() {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&opts) {
        error!(error = %e, "demo failed");
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging() -> std::io::Result<()> {
    let path = std::env::var("CEDAR_LOG_FILE").unwrap_or_else(|_| "cedar-demo.log".into());
    let filter = EnvFilter::try_from_env("CEDAR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let file = File::create(path)?;
    // A second subscriber is only possible in tests; keep the first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(opts: &Opts) -> cedar::Result<()> {
    let session_options = if opts.inline {
        SessionOptions {
            hide_cursor: true,
            ..SessionOptions::default()
        }
    } else {
        SessionOptions::fullscreen()
    };
    let session = TerminalSession::new(session_options)?;

    let config = WindowConfig::default()
        .with_layout(LayoutConfig::default().with_center_rounding(opts.center));
    let mut window = Window::with_config(TerminalSurface::stdout(), config);
    let scene = Scene::build(&mut window)?;
    info!(
        inline = opts.inline,
        center = ?opts.center,
        backdrop = ?scene.backdrop,
        menu = ?scene.menu,
        "demo started"
    );

    loop {
        let stats = window.render()?;
        if stats.resized {
            info!(size = ?window.last_size(), "terminal resized");
        }

        if !session.poll_event(opts.poll)? {
            continue;
        }
        match session.read_event()? {
            Some(Event::Key(key)) if is_quit(&key) => break,
            Some(Event::Key(key)) if is_cycle(&key) => {
                let color = scene.cycle_color(&mut window)?;
                info!(?color, "menu recolored");
            }
            _ => {}
        }
    }

    info!("demo finished");
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.key == Key::Escape || key.is_char_ignore_case('q')
}

fn is_cycle(key: &KeyEvent) -> bool {
    key.key == Key::Tab || key.is_char_ignore_case('c')
}
