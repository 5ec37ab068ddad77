//! Pong against a ball-tracking opponent

mod app;
mod camera;
mod error;
mod input;
mod menu;
mod mesh;
mod renderer;

use std::path::Path;
use std::process::ExitCode;

use winit::event_loop::{ControlFlow, EventLoop};

use app::App;
use error::InitError;
use renderer::text::load_font;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn run() -> Result<ExitCode, InitError> {
    let font = load_font(Path::new(app::FONT_PATH))?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(font);
    event_loop.run_app(&mut app)?;
    Ok(app.exit_code())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(%err, "startup failed");
            ExitCode::FAILURE
        }
    }
}
