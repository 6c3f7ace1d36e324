//! Graphics device.
//!
//! The [`GraphicsDevice`] is the rendering half of the graphics system. It is
//! created by [`GraphicsInstance::create_device_for_surface`] and owns the
//! GPU device and submission queue for the wgpu backend.
//!
//! [`GraphicsInstance::create_device_for_surface`]: crate::GraphicsInstance::create_device_for_surface

#[cfg(feature = "wgpu-backend")]
use std::sync::Arc;

use crate::error::GraphicsError;
use crate::swapchain::SurfaceTexture;
use crate::types::ClearColor;

enum DeviceInner {
    #[cfg(feature = "wgpu-backend")]
    Wgpu {
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
    },
    Dummy,
}

/// A graphics device for rendering to a surface.
///
/// The only rendering operation the shell needs is clearing an acquired
/// frame to a solid color; anything more (the software framebuffer upload,
/// draw commands) will layer on top of this type.
pub struct GraphicsDevice {
    name: String,
    inner: DeviceInner,
}

impl GraphicsDevice {
    #[cfg(feature = "wgpu-backend")]
    pub(crate) fn new_wgpu(name: String, device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            name,
            inner: DeviceInner::Wgpu {
                device: Arc::new(device),
                queue: Arc::new(queue),
            },
        }
    }

    pub(crate) fn new_dummy() -> Self {
        Self {
            name: "Dummy Device".to_string(),
            inner: DeviceInner::Dummy,
        }
    }

    /// Get the device name (the adapter name for real backends).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the underlying wgpu device, if this is a wgpu device.
    #[cfg(feature = "wgpu-backend")]
    pub(crate) fn wgpu_device(&self) -> Option<&Arc<wgpu::Device>> {
        match &self.inner {
            DeviceInner::Wgpu { device, .. } => Some(device),
            DeviceInner::Dummy => None,
        }
    }

    /// Clear an acquired frame to a solid color.
    ///
    /// Encodes a render pass whose only work is the clear load operation and
    /// submits it. The frame still has to be presented by the caller.
    pub fn clear_frame(
        &self,
        frame: &SurfaceTexture,
        color: ClearColor,
    ) -> Result<(), GraphicsError> {
        match &self.inner {
            #[cfg(feature = "wgpu-backend")]
            DeviceInner::Wgpu { device, queue } => {
                let view = frame.wgpu_view().ok_or_else(|| {
                    GraphicsError::InvalidParameter(
                        "frame was not acquired from a wgpu surface".to_string(),
                    )
                })?;

                let mut encoder =
                    device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                        label: Some("clear frame"),
                    });

                // The pass has no draws; the clear happens via the load op.
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color {
                                r: color.r,
                                g: color.g,
                                b: color.b,
                                a: color.a,
                            }),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

                queue.submit(std::iter::once(encoder.finish()));
                Ok(())
            }
            DeviceInner::Dummy => {
                log::trace!(
                    "DummyBackend: clear frame {}x{} to ({:.3}, {:.3}, {:.3}, {:.3})",
                    frame.width(),
                    frame.height(),
                    color.r,
                    color.g,
                    color.b,
                    color.a
                );
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for GraphicsDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsDevice")
            .field("name", &self.name)
            .finish()
    }
}
