//! Swapchain and surface management.
//!
//! This module provides abstractions for presenting rendered frames to a window.
//!
//! # Overview
//!
//! - [`Surface`] - Represents a window surface that can display rendered content
//! - [`SurfaceConfiguration`] - Configuration for the surface (format, size, present mode)
//! - [`SurfaceTexture`] - A texture from the swapchain that will be presented
//! - [`PresentMode`] - Controls vsync behavior
//!
//! # Example
//!
//! ```ignore
//! let instance = GraphicsInstance::new()?;
//! let surface = instance.create_surface(window)?;
//! let device = instance.create_device_for_surface(&surface)?;
//!
//! let config = SurfaceConfiguration::new(800, 600)
//!     .with_format(surface.preferred_format());
//! surface.configure(&device, &config)?;
//!
//! // In render loop:
//! let frame = surface.acquire_texture()?;
//! device.clear_frame(&frame, ClearColor::BLACK)?;
//! frame.present();
//! ```

use std::sync::{Arc, RwLock};

use winit::window::Window;

#[cfg(feature = "wgpu-backend")]
use crate::backend::GpuBackend;
use crate::error::GraphicsError;
use crate::instance::GraphicsInstance;
use crate::types::TextureFormat;

/// Presentation mode for the swapchain.
///
/// Controls how frames are synchronized with the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentMode {
    /// No synchronization. May cause tearing but has lowest latency.
    Immediate,
    /// Triple buffering. Low latency without tearing.
    Mailbox,
    /// VSync enabled. No tearing, but may have higher latency.
    #[default]
    Fifo,
}

/// Configuration for a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfiguration {
    /// The texture format for the swapchain.
    pub format: TextureFormat,
    /// Width of the surface in pixels.
    pub width: u32,
    /// Height of the surface in pixels.
    pub height: u32,
    /// Presentation mode (vsync behavior).
    pub present_mode: PresentMode,
}

impl SurfaceConfiguration {
    /// Create a new surface configuration.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            format: TextureFormat::Bgra8Unorm,
            width,
            height,
            present_mode: PresentMode::default(),
        }
    }

    /// Set the texture format.
    pub fn with_format(mut self, format: TextureFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the present mode.
    pub fn with_present_mode(mut self, present_mode: PresentMode) -> Self {
        self.present_mode = present_mode;
        self
    }
}

/// A surface for presenting rendered frames to a window.
///
/// The surface is created from a window using [`GraphicsInstance::create_surface`].
/// It must be configured with [`Surface::configure`] before use.
pub struct Surface {
    // Drop order: the swapchain is destroyed before the window handle it
    // presents to, and the instance is released last.
    /// The underlying wgpu surface (only when using the wgpu backend).
    #[cfg(feature = "wgpu-backend")]
    wgpu_surface: Option<wgpu::Surface<'static>>,
    /// Current configuration, set by [`Surface::configure`].
    config: RwLock<Option<SurfaceConfiguration>>,
    /// The window this surface presents to. Held so the OS window outlives
    /// the swapchain.
    window: Arc<Window>,
    instance: Arc<GraphicsInstance>,
}

impl Surface {
    /// Create a new surface from a window.
    pub(crate) fn new(
        instance: Arc<GraphicsInstance>,
        window: Arc<Window>,
    ) -> Result<Self, GraphicsError> {
        log::info!("Creating surface from window");

        #[cfg(feature = "wgpu-backend")]
        let wgpu_surface = match instance.backend() {
            GpuBackend::Wgpu(backend) => {
                let surface = backend
                    .instance()
                    .create_surface(Arc::clone(&window))
                    .map_err(|e| {
                        GraphicsError::ResourceCreationFailed(format!(
                            "failed to create wgpu surface: {e}"
                        ))
                    })?;
                Some(surface)
            }
            GpuBackend::Dummy(_) => None,
        };

        Ok(Self {
            #[cfg(feature = "wgpu-backend")]
            wgpu_surface,
            config: RwLock::new(None),
            window,
            instance,
        })
    }

    /// Get the instance that created this surface.
    pub fn instance(&self) -> &Arc<GraphicsInstance> {
        &self.instance
    }

    /// Get the window this surface presents to.
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Get the underlying wgpu surface, if any.
    #[cfg(feature = "wgpu-backend")]
    pub(crate) fn wgpu_surface(&self) -> Option<&wgpu::Surface<'static>> {
        self.wgpu_surface.as_ref()
    }

    /// Get the preferred texture format for this surface.
    pub fn preferred_format(&self) -> TextureFormat {
        #[cfg(feature = "wgpu-backend")]
        if let GpuBackend::Wgpu(backend) = self.instance.backend() {
            if let Some(wgpu_surface) = &self.wgpu_surface {
                let caps = wgpu_surface.get_capabilities(backend.adapter());
                if let Some(format) = caps
                    .formats
                    .iter()
                    .find_map(|f| crate::backend::wgpu_backend::convert_wgpu_texture_format(*f))
                {
                    return format;
                }
            }
        }

        TextureFormat::default()
    }

    /// Get the texture formats this surface supports.
    pub fn supported_formats(&self) -> Vec<TextureFormat> {
        #[cfg(feature = "wgpu-backend")]
        if let GpuBackend::Wgpu(backend) = self.instance.backend() {
            if let Some(wgpu_surface) = &self.wgpu_surface {
                let caps = wgpu_surface.get_capabilities(backend.adapter());
                return caps
                    .formats
                    .iter()
                    .filter_map(|f| crate::backend::wgpu_backend::convert_wgpu_texture_format(*f))
                    .collect();
            }
        }

        // The dummy backend accepts anything we expose.
        vec![
            TextureFormat::Bgra8Unorm,
            TextureFormat::Bgra8UnormSrgb,
            TextureFormat::Rgba8Unorm,
            TextureFormat::Rgba8UnormSrgb,
        ]
    }

    /// Configure the surface.
    ///
    /// Must be called before the first [`Surface::acquire_texture`] and again
    /// whenever the window is resized.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero or the format is not
    /// supported by this surface.
    pub fn configure(
        &self,
        device: &crate::device::GraphicsDevice,
        config: &SurfaceConfiguration,
    ) -> Result<(), GraphicsError> {
        if config.width == 0 || config.height == 0 {
            return Err(GraphicsError::InvalidParameter(
                "surface dimensions cannot be zero".to_string(),
            ));
        }

        if !self.supported_formats().contains(&config.format) {
            return Err(GraphicsError::InvalidParameter(format!(
                "unsupported surface format: {:?}",
                config.format
            )));
        }

        log::info!(
            "Configuring surface: {}x{} {:?} {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode
        );

        #[cfg(feature = "wgpu-backend")]
        if let Some(wgpu_surface) = &self.wgpu_surface {
            use crate::backend::wgpu_backend::{convert_present_mode, convert_texture_format};

            let wgpu_device = device.wgpu_device().ok_or_else(|| {
                GraphicsError::InvalidParameter(
                    "device does not match the surface backend".to_string(),
                )
            })?;

            let wgpu_config = wgpu::SurfaceConfiguration {
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                format: convert_texture_format(config.format),
                width: config.width,
                height: config.height,
                present_mode: convert_present_mode(config.present_mode),
                alpha_mode: wgpu::CompositeAlphaMode::Auto,
                view_formats: vec![],
                desired_maximum_frame_latency: 2,
            };
            wgpu_surface.configure(wgpu_device, &wgpu_config);
        }

        #[cfg(not(feature = "wgpu-backend"))]
        let _ = device;

        if let Ok(mut current) = self.config.write() {
            *current = Some(config.clone());
        }

        Ok(())
    }

    /// Get the current configuration, if set.
    pub fn config(&self) -> Option<SurfaceConfiguration> {
        self.config.read().ok().and_then(|c| c.clone())
    }

    /// Get the current width, if configured.
    pub fn width(&self) -> Option<u32> {
        self.config().map(|c| c.width)
    }

    /// Get the current height, if configured.
    pub fn height(&self) -> Option<u32> {
        self.config().map(|c| c.height)
    }

    /// Acquire the next texture from the swapchain.
    ///
    /// The returned [`SurfaceTexture`] must be presented or dropped before
    /// the next frame can be acquired.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The surface is not configured
    /// - The surface is outdated (window was resized)
    /// - The surface was lost
    pub fn acquire_texture(&self) -> Result<SurfaceTexture, GraphicsError> {
        let config = self
            .config()
            .ok_or_else(|| GraphicsError::InvalidParameter("surface not configured".to_string()))?;

        #[cfg(feature = "wgpu-backend")]
        let frame = match &self.wgpu_surface {
            Some(wgpu_surface) => {
                let texture = wgpu_surface.get_current_texture().map_err(|e| match e {
                    wgpu::SurfaceError::Outdated => GraphicsError::SurfaceOutdated,
                    wgpu::SurfaceError::Lost => GraphicsError::SurfaceLost,
                    wgpu::SurfaceError::OutOfMemory => GraphicsError::OutOfMemory,
                    other => {
                        GraphicsError::Internal(format!("surface texture acquire failed: {other}"))
                    }
                })?;
                let view = texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                Some((texture, view))
            }
            None => None,
        };

        Ok(SurfaceTexture {
            #[cfg(feature = "wgpu-backend")]
            frame,
            format: config.format,
            width: config.width,
            height: config.height,
        })
    }
}

/// A texture acquired from the swapchain.
///
/// Render into it, then call [`SurfaceTexture::present`] to display the
/// result. Dropping it without presenting skips the frame.
pub struct SurfaceTexture {
    #[cfg(feature = "wgpu-backend")]
    frame: Option<(wgpu::SurfaceTexture, wgpu::TextureView)>,
    format: TextureFormat,
    width: u32,
    height: u32,
}

impl SurfaceTexture {
    /// Get the texture format.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Get the texture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the texture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the wgpu view for this texture, if any.
    #[cfg(feature = "wgpu-backend")]
    pub(crate) fn wgpu_view(&self) -> Option<&wgpu::TextureView> {
        self.frame.as_ref().map(|(_, view)| view)
    }

    /// Present the texture to the window.
    pub fn present(#[allow(unused_mut)] mut self) {
        #[cfg(feature = "wgpu-backend")]
        if let Some((texture, _view)) = self.frame.take() {
            texture.present();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_configuration_builder() {
        let config = SurfaceConfiguration::new(800, 600)
            .with_format(TextureFormat::Rgba8Unorm)
            .with_present_mode(PresentMode::Immediate);

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.format, TextureFormat::Rgba8Unorm);
        assert_eq!(config.present_mode, PresentMode::Immediate);
    }

    #[test]
    fn test_default_present_mode_is_vsync() {
        assert_eq!(SurfaceConfiguration::new(1, 1).present_mode, PresentMode::Fifo);
    }
}
