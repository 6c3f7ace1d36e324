//! # softras graphics
//!
//! Graphics subsystem for the softras shell.
//!
//! ## Overview
//!
//! This crate wraps the GPU stack behind three handles with strict lifetime
//! ordering:
//!
//! - [`GraphicsInstance`] - the process-wide subsystem, acquired first and
//!   released last
//! - [`Surface`] - the window-scoped swapchain
//! - [`GraphicsDevice`] - the rendering device, acquired last and released
//!   first
//!
//! Backends: wgpu (default) and a no-op dummy backend for machines without
//! a GPU.

pub mod backend;

mod device;
mod error;
mod instance;
mod swapchain;
mod types;

pub use backend::BackendType;
pub use device::GraphicsDevice;
pub use error::GraphicsError;
pub use instance::{GraphicsInstance, InstanceParameters};
pub use swapchain::{PresentMode, Surface, SurfaceConfiguration, SurfaceTexture};
pub use types::{ClearColor, TextureFormat};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("softras graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
