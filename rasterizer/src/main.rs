//! # Software rasterizer bootstrap
//!
//! Opens a window, clears it to a constant color every frame, and exits when
//! the window is closed. The software framebuffer and raster pipeline will
//! render into this shell later; for now the empty scene is the product.
//!
//! Exit code is 0 on a normal quit and non-zero when any startup step
//! (event loop, window, graphics) fails.

use std::process::ExitCode;

use softras_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs, DrawContext};
use softras_graphics::ClearColor;

/// Background color of the empty scene, a dark blue-gray.
const CLEAR_COLOR: ClearColor = ClearColor::from_rgba8(20, 20, 30, 255);

/// Handler for the bootstrap shell: no scene, just the clear.
struct RasterizerShell;

impl AppHandler for RasterizerShell {
    fn on_init(&mut self, ctx: &mut AppContext) {
        log::info!(
            "Shell ready: {} ({}x{})",
            ctx.device().name(),
            ctx.width(),
            ctx.height()
        );
    }

    fn on_draw(&mut self, ctx: &mut DrawContext<'_>) {
        if let Err(e) = ctx.clear(CLEAR_COLOR) {
            log::warn!("Failed to clear frame: {}", e);
        }

        // The software framebuffer upload will go here.
    }

    fn on_shutdown(&mut self, ctx: &mut AppContext) {
        log::info!("Shutting down after {} frames", ctx.frame_number());
    }
}

fn main() -> ExitCode {
    let args = DefaultAppArgs::parse();

    match App::run(RasterizerShell, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("Startup failed: {}", error);
            ExitCode::FAILURE
        }
    }
}
