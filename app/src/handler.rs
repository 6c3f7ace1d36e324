//! Application handler trait.

use crate::context::{AppContext, DrawContext};

/// Trait for handling application lifecycle events and draw requests.
///
/// Implement this trait to create custom application logic.
///
/// # Lifecycle
///
/// 1. `on_init` - Called once when the application starts
/// 2. `on_resize` - Called when the window is resized
/// 3. `on_update` - Called every frame before drawing
/// 4. `on_draw` - Called every frame to render
/// 5. `on_shutdown` - Called once when the application is closing
pub trait AppHandler {
    /// Called once when the application initializes.
    fn on_init(&mut self, _ctx: &mut AppContext) {}

    /// Called when the window is resized.
    ///
    /// The new size is available in `ctx.width()` and `ctx.height()`.
    fn on_resize(&mut self, _ctx: &mut AppContext) {}

    /// Called every frame before drawing.
    ///
    /// Returns `true` to continue running, `false` to exit.
    fn on_update(&mut self, _ctx: &mut AppContext) -> bool {
        true
    }

    /// Called every frame to render into the acquired swapchain texture.
    ///
    /// The shell presents the frame after this returns.
    fn on_draw(&mut self, ctx: &mut DrawContext<'_>);

    /// Called when the user requests to close the window (e.g. clicking the
    /// close button).
    ///
    /// Return `true` to allow the close (the default), `false` to cancel it.
    fn on_close_requested(&mut self, _ctx: &mut AppContext) -> bool {
        true
    }

    /// Called once when the application is closing.
    fn on_shutdown(&mut self, _ctx: &mut AppContext) {}
}
