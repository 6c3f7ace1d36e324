//! GPU backend abstraction layer.
//!
//! # Available Backends
//!
//! - `wgpu-backend` (default): Cross-platform backend using wgpu
//! - `dummy`: No-op backend for testing and machines without a GPU

#[cfg(feature = "wgpu-backend")]
pub mod wgpu_backend;

pub mod dummy;

use crate::error::GraphicsError;

/// Which GPU backend to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendType {
    /// Automatically select the best available backend.
    #[default]
    Auto,
    /// Cross-platform backend via wgpu.
    Wgpu,
    /// No-op backend for testing and CI environments.
    Dummy,
}

/// A created GPU backend.
pub enum GpuBackend {
    /// wgpu backend.
    #[cfg(feature = "wgpu-backend")]
    Wgpu(wgpu_backend::WgpuBackend),
    /// Dummy backend (no GPU access).
    Dummy(dummy::DummyBackend),
}

impl GpuBackend {
    /// Get the backend name.
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "wgpu-backend")]
            Self::Wgpu(backend) => backend.name(),
            Self::Dummy(backend) => backend.name(),
        }
    }
}

impl std::fmt::Debug for GpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "wgpu-backend")]
            Self::Wgpu(backend) => backend.fmt(f),
            Self::Dummy(backend) => backend.fmt(f),
        }
    }
}

/// Create the requested backend.
///
/// `BackendType::Auto` tries the wgpu backend first and falls back to the
/// dummy backend when no GPU is available. Requesting a specific backend
/// fails instead of falling back.
pub fn create_backend(backend_type: BackendType) -> Result<GpuBackend, GraphicsError> {
    match backend_type {
        BackendType::Wgpu => {
            #[cfg(feature = "wgpu-backend")]
            {
                wgpu_backend::WgpuBackend::new().map(GpuBackend::Wgpu)
            }
            #[cfg(not(feature = "wgpu-backend"))]
            {
                Err(GraphicsError::FeatureNotSupported(
                    "wgpu backend is not compiled in".to_string(),
                ))
            }
        }
        BackendType::Dummy => Ok(GpuBackend::Dummy(dummy::DummyBackend::new())),
        BackendType::Auto => {
            #[cfg(feature = "wgpu-backend")]
            {
                match wgpu_backend::WgpuBackend::new() {
                    Ok(backend) => {
                        log::info!("Using wgpu backend");
                        return Ok(GpuBackend::Wgpu(backend));
                    }
                    Err(e) => {
                        log::warn!("Failed to create wgpu backend: {}", e);
                    }
                }
            }

            log::info!("Using dummy backend");
            Ok(GpuBackend::Dummy(dummy::DummyBackend::new()))
        }
    }
}
