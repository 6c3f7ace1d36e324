//! Graphics instance.
//!
//! The [`GraphicsInstance`] is the top-level entry point for the graphics
//! system: the process-wide subsystem handle that everything else is scoped
//! to. It is created once at startup and must outlive every surface and
//! device it hands out; both hold an `Arc` back to it, so the subsystem is
//! torn down last no matter which exit path runs.

use std::sync::Arc;

use winit::window::Window;

use crate::backend::{self, BackendType, GpuBackend};
use crate::device::GraphicsDevice;
use crate::error::GraphicsError;
use crate::swapchain::Surface;

/// Parameters for creating a [`GraphicsInstance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstanceParameters {
    /// Which backend to create.
    pub backend: BackendType,
}

impl InstanceParameters {
    /// Create default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend to use.
    pub fn with_backend(mut self, backend: BackendType) -> Self {
        self.backend = backend;
        self
    }
}

/// The graphics instance manages the GPU backend.
///
/// # Example
///
/// ```ignore
/// let instance = GraphicsInstance::new()?;
/// let surface = instance.create_surface(window)?;
/// let device = instance.create_device_for_surface(&surface)?;
/// ```
pub struct GraphicsInstance {
    backend: GpuBackend,
}

impl GraphicsInstance {
    /// Create a new graphics instance with default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the graphics system cannot be initialized.
    pub fn new() -> Result<Arc<Self>, GraphicsError> {
        Self::with_parameters(InstanceParameters::default())
    }

    /// Create a new graphics instance with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested backend cannot be created.
    pub fn with_parameters(params: InstanceParameters) -> Result<Arc<Self>, GraphicsError> {
        log::info!("Creating GraphicsInstance");

        let backend = backend::create_backend(params.backend)?;
        log::info!("Using GPU backend: {}", backend.name());

        Ok(Arc::new(Self { backend }))
    }

    /// Get the GPU backend (internal use only).
    pub(crate) fn backend(&self) -> &GpuBackend {
        &self.backend
    }

    /// Get the name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Create a surface for presenting to a window.
    ///
    /// The surface keeps the window alive for as long as it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if surface creation fails.
    pub fn create_surface(
        self: &Arc<Self>,
        window: Arc<Window>,
    ) -> Result<Arc<Surface>, GraphicsError> {
        Surface::new(Arc::clone(self), window).map(Arc::new)
    }

    /// Create a graphics device compatible with the given surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter cannot present to the surface or if
    /// device creation fails.
    pub fn create_device_for_surface(
        &self,
        surface: &Surface,
    ) -> Result<Arc<GraphicsDevice>, GraphicsError> {
        match &self.backend {
            #[cfg(feature = "wgpu-backend")]
            GpuBackend::Wgpu(backend) => {
                let wgpu_surface = surface.wgpu_surface().ok_or_else(|| {
                    GraphicsError::InvalidParameter(
                        "surface was not created by this backend".to_string(),
                    )
                })?;

                // An adapter that cannot present to the surface reports no formats.
                let caps = wgpu_surface.get_capabilities(backend.adapter());
                if caps.formats.is_empty() {
                    return Err(GraphicsError::FeatureNotSupported(
                        "adapter cannot present to this surface".to_string(),
                    ));
                }

                let (device, queue) = backend.request_device()?;
                log::info!("Created graphics device: {}", backend.adapter_name());

                Ok(Arc::new(GraphicsDevice::new_wgpu(
                    backend.adapter_name(),
                    device,
                    queue,
                )))
            }
            GpuBackend::Dummy(_) => {
                let _ = surface;
                Ok(Arc::new(GraphicsDevice::new_dummy()))
            }
        }
    }
}

impl std::fmt::Debug for GraphicsInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsInstance")
            .field("backend", &self.backend)
            .finish()
    }
}
