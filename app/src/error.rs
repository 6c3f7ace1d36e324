//! Application shell error type.

use std::fmt;

use softras_graphics::GraphicsError;

/// Errors that can occur while bootstrapping the application shell.
///
/// Each variant corresponds to one acquisition step; once the main loop is
/// running no further failure paths exist.
#[derive(Debug)]
pub enum AppError {
    /// The OS event loop could not be created.
    EventLoop(String),
    /// The window could not be created.
    Window(String),
    /// A graphics resource could not be acquired.
    Graphics(GraphicsError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(msg) => write!(f, "event loop creation failed: {msg}"),
            AppError::Window(msg) => write!(f, "window creation failed: {msg}"),
            AppError::Graphics(err) => write!(f, "graphics initialization failed: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Graphics(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphicsError> for AppError {
    fn from(err: GraphicsError) -> Self {
        AppError::Graphics(err)
    }
}
