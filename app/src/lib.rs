//! # softras app
//!
//! Application shell for the softras rasterizer.
//!
//! This crate provides a generic [`App`] struct that handles window creation,
//! the event loop, and graphics initialization with fail-fast unwinding. It
//! is designed to be used with custom handlers for lifecycle events and draw
//! requests.
//!
//! ## Overview
//!
//! - [`AppHandler`] - Trait for handling lifecycle events and draw requests
//! - [`AppArgs`] - Trait for parsing command line arguments
//! - [`App`] - Main application struct that manages the window and graphics
//!
//! ## Example
//!
//! ```ignore
//! use softras_app::{App, AppArgs, AppHandler, DefaultAppArgs, DrawContext};
//! use softras_graphics::ClearColor;
//!
//! struct MyApp;
//!
//! impl AppHandler for MyApp {
//!     fn on_draw(&mut self, ctx: &mut DrawContext<'_>) {
//!         let _ = ctx.clear(ClearColor::BLACK);
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     match App::run(MyApp, DefaultAppArgs::parse()) {
//!         Ok(()) => std::process::ExitCode::SUCCESS,
//!         Err(_) => std::process::ExitCode::FAILURE,
//!     }
//! }
//! ```

mod app;
mod args;
mod context;
mod error;
mod handler;

pub use app::App;
pub use args::{AppArgs, CliBackend, DefaultAppArgs};
pub use context::{AppContext, DrawContext};
pub use error::AppError;
pub use handler::AppHandler;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
///
/// This should be called before using any app functionality.
pub fn init() {
    log::info!("softras app v{} initialized", VERSION);
}
