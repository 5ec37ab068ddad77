use std::path::PathBuf;

use game_core::ConfigError;
use thiserror::Error;

/// Anything that stops the game from reaching its first frame
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter")]
    NoAdapter,

    #[error("surface reports no texture formats")]
    NoSurfaceFormat,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to read font {}: {source}", path.display())]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse font {}: {reason}", path.display())]
    FontParse { path: PathBuf, reason: &'static str },

    #[error("invalid playfield: {0}")]
    Session(#[from] ConfigError),
}
