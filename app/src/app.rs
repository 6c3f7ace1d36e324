//! Main application struct and event loop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use softras_graphics::{GraphicsInstance, InstanceParameters, PresentMode, SurfaceConfiguration};

use crate::args::AppArgs;
use crate::context::{AppContext, DrawContext};
use crate::error::AppError;
use crate::handler::AppHandler;

/// Main application struct that manages the window and graphics.
///
/// The `App` struct is generic over:
/// - `H`: The handler type that implements [`AppHandler`]
/// - `A`: The arguments type that implements [`AppArgs`]
///
/// # Example
///
/// ```ignore
/// use softras_app::{App, AppHandler, DefaultAppArgs, DrawContext};
///
/// struct MyApp;
///
/// impl AppHandler for MyApp {
///     fn on_draw(&mut self, ctx: &mut DrawContext<'_>) {
///         // Render frame
///     }
/// }
///
/// fn main() -> std::process::ExitCode {
///     match App::run(MyApp, DefaultAppArgs::parse()) {
///         Ok(()) => std::process::ExitCode::SUCCESS,
///         Err(_) => std::process::ExitCode::FAILURE,
///     }
/// }
/// ```
pub struct App<H, A>
where
    H: AppHandler,
    A: AppArgs,
{
    handler: H,
    args: A,
    // context is declared before window: dropping the app releases the
    // renderer state before the window handle.
    context: Option<AppContext>,
    window: Option<Arc<Window>>,
    running: bool,
    initialized: bool,
    shutdown_complete: bool,
    init_error: Option<AppError>,
}

/// Whether the frame cap has been hit.
fn frame_limit_reached(frame_number: u64, max_frames: Option<u64>) -> bool {
    matches!(max_frames, Some(max) if frame_number >= max)
}

impl<H, A> App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    /// Create a new application.
    pub fn new(handler: H, args: A) -> Self {
        Self {
            handler,
            args,
            context: None,
            window: None,
            running: true,
            initialized: false,
            shutdown_complete: false,
            init_error: None,
        }
    }

    /// Run the application with the given handler and arguments.
    ///
    /// This is the main entry point. It creates the event loop, window, and
    /// graphics context, then runs the main loop until the user quits or the
    /// frame cap is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop, window, or any graphics resource
    /// cannot be created. Everything acquired before the failing step has
    /// already been released when this returns.
    pub fn run(handler: H, args: A) -> Result<(), AppError> {
        // Initialize logging
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .try_init();

        softras_graphics::init();
        crate::init();

        let event_loop =
            EventLoop::new().map_err(|e| AppError::EventLoop(e.to_string()))?;

        let mut app = Self::new(handler, args);
        event_loop
            .run_app(&mut app)
            .map_err(|e| AppError::EventLoop(e.to_string()))?;

        app.into_result()
    }

    /// Surface any startup failure recorded while the loop was running.
    fn into_result(self) -> Result<(), AppError> {
        match self.init_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Initialize graphics after window creation.
    ///
    /// Acquisition order is instance, then surface, then device. On any
    /// failure the locals drop in reverse order before the error propagates.
    fn init_graphics(&mut self) -> Result<(), AppError> {
        let window = self.window.as_ref().ok_or_else(|| {
            AppError::Window("no window available for graphics init".to_string())
        })?;

        let params = InstanceParameters::new().with_backend(self.args.backend());
        let instance = GraphicsInstance::with_parameters(params)?;
        let surface = instance.create_surface(Arc::clone(window))?;
        let device = instance.create_device_for_surface(&surface)?;

        let physical_size = window.inner_size();
        let width = physical_size.width.max(1);
        let height = physical_size.height.max(1);

        let surface_format = surface.preferred_format();
        let config = SurfaceConfiguration::new(width, height)
            .with_format(surface_format)
            .with_present_mode(self.present_mode());
        surface.configure(&device, &config)?;

        log::info!(
            "Graphics initialized: {} ({}x{}, format {:?})",
            device.name(),
            width,
            height,
            surface_format
        );

        self.context = Some(AppContext {
            surface,
            device,
            instance,
            width,
            height,
            surface_format,
            frame_number: 0,
        });

        Ok(())
    }

    fn present_mode(&self) -> PresentMode {
        if self.args.vsync() {
            PresentMode::Fifo
        } else {
            PresentMode::Immediate
        }
    }

    /// Abort startup: log, unwind everything acquired so far (renderer state
    /// first), record the error, and leave the event loop.
    fn fail_startup(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.context = None;
        self.window = None;
        self.running = false;
        self.init_error = Some(error);
        event_loop.exit();
    }

    /// Handle a close request from the window system.
    ///
    /// Sets the stop flag and runs the shutdown hook unless the handler
    /// cancels the close.
    fn process_close_request(&mut self) {
        let allow = match &mut self.context {
            Some(ctx) => self.handler.on_close_requested(ctx),
            None => true,
        };

        if allow {
            self.running = false;
            self.shutdown();
        } else {
            log::info!("Close request cancelled by handler");
        }
    }

    /// Run the shutdown hook. Safe to call from every exit path.
    fn shutdown(&mut self) {
        if self.shutdown_complete {
            return;
        }
        if let Some(ctx) = &mut self.context {
            self.handler.on_shutdown(ctx);
        }
        self.shutdown_complete = true;
    }

    /// Reconfigure the swapchain and notify the handler of a resize.
    fn apply_resize(&mut self, width: u32, height: u32) {
        // winit reports zero-sized events while the window is minimized
        if width == 0 || height == 0 {
            return;
        }

        let present_mode = self.present_mode();
        let ctx = match &mut self.context {
            Some(c) => c,
            None => return,
        };

        if ctx.width == width && ctx.height == height {
            return;
        }
        ctx.width = width;
        ctx.height = height;

        let config = SurfaceConfiguration::new(width, height)
            .with_format(ctx.surface_format)
            .with_present_mode(present_mode);
        if let Err(e) = ctx.surface.configure(&ctx.device, &config) {
            log::error!("Failed to reconfigure surface: {}", e);
        }

        self.handler.on_resize(ctx);
    }

    /// Render a frame: update, acquire, draw, present.
    fn render_frame(&mut self) {
        let max_frames = self.args.max_frames();
        let ctx = match &mut self.context {
            Some(c) => c,
            None => return,
        };

        if !self.handler.on_update(ctx) {
            self.running = false;
            return;
        }

        let frame = match ctx.surface.acquire_texture() {
            Ok(f) => f,
            Err(e) => {
                log::warn!("Failed to acquire swapchain texture: {}", e);
                return;
            }
        };

        let mut draw_ctx = DrawContext {
            app: &mut *ctx,
            frame: Some(frame),
        };
        self.handler.on_draw(&mut draw_ctx);
        draw_ctx.finish();

        ctx.frame_number += 1;

        if frame_limit_reached(ctx.frame_number, max_frames) {
            log::info!(
                "Reached max frames limit ({}), exiting",
                ctx.frame_number
            );
            self.running = false;
        }
    }
}

impl<H, A> ApplicationHandler for App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.args.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.args.window_width(),
                self.args.window_height(),
            ));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                log::info!("Window created");
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                self.fail_startup(event_loop, AppError::Window(e.to_string()));
                return;
            }
        }

        if let Err(e) = self.init_graphics() {
            self.fail_startup(event_loop, e);
            return;
        }

        if let Some(ctx) = &mut self.context {
            self.handler.on_init(ctx);
        }
        self.initialized = true;

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.process_close_request();
                if !self.running {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                self.apply_resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                if self.initialized && self.running {
                    self.render_frame();
                }

                if !self.running {
                    self.shutdown();
                    event_loop.exit();
                } else if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.running {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
