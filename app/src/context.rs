//! Application and draw contexts.

use std::sync::Arc;

use softras_graphics::{
    ClearColor, GraphicsDevice, GraphicsError, GraphicsInstance, Surface, SurfaceTexture,
    TextureFormat,
};

/// Application context providing access to the acquired graphics resources.
///
/// This context is available during all application callbacks.
pub struct AppContext {
    // Drop order: the surface and device are released before the
    // subsystem instance.
    /// The surface for presenting to the window.
    pub(crate) surface: Arc<Surface>,
    /// The graphics device.
    pub(crate) device: Arc<GraphicsDevice>,
    /// The graphics instance.
    pub(crate) instance: Arc<GraphicsInstance>,
    /// Current window width in physical pixels.
    pub(crate) width: u32,
    /// Current window height in physical pixels.
    pub(crate) height: u32,
    /// The surface texture format being used.
    pub(crate) surface_format: TextureFormat,
    /// Number of frames presented so far.
    pub(crate) frame_number: u64,
}

impl AppContext {
    /// Get the graphics instance.
    pub fn instance(&self) -> &Arc<GraphicsInstance> {
        &self.instance
    }

    /// Get the graphics device.
    pub fn device(&self) -> &Arc<GraphicsDevice> {
        &self.device
    }

    /// Get the surface.
    pub fn surface(&self) -> &Arc<Surface> {
        &self.surface
    }

    /// Get the current window width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the current window height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the window aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Get the surface texture format.
    pub fn surface_format(&self) -> TextureFormat {
        self.surface_format
    }

    /// Get the number of frames presented so far.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

/// Draw context for rendering a frame.
///
/// This context is provided during `on_draw` callbacks and wraps the
/// swapchain texture acquired for the current frame. The shell presents the
/// texture once the callback returns.
pub struct DrawContext<'a> {
    pub(crate) app: &'a mut AppContext,
    pub(crate) frame: Option<SurfaceTexture>,
}

impl DrawContext<'_> {
    /// Get the current window width.
    pub fn width(&self) -> u32 {
        self.app.width
    }

    /// Get the current window height.
    pub fn height(&self) -> u32 {
        self.app.height
    }

    /// Get the number of frames presented so far.
    pub fn frame_number(&self) -> u64 {
        self.app.frame_number
    }

    /// Get the surface texture format.
    pub fn surface_format(&self) -> TextureFormat {
        self.app.surface_format
    }

    /// Clear the frame to a solid color.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is no longer available or the clear
    /// submission fails.
    pub fn clear(&mut self, color: ClearColor) -> Result<(), GraphicsError> {
        let frame = self.frame.as_ref().ok_or_else(|| {
            GraphicsError::Internal("frame already presented".to_string())
        })?;
        self.app.device.clear_frame(frame, color)
    }

    /// Present the frame. Called by the shell after `on_draw` returns.
    pub(crate) fn finish(mut self) {
        if let Some(frame) = self.frame.take() {
            frame.present();
        }
    }
}
