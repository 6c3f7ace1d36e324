//! Window and swapchain integration test.
//!
//! This test verifies the full resource lifecycle against a real window:
//! instance, then surface, then device are acquired, five frames are cleared
//! to the shell's background color and presented, and everything is released
//! in reverse order when the app is dropped.
//!
//! # CI Compatibility
//!
//! If the event loop or window cannot be created (e.g. on headless CI
//! systems), the test passes gracefully. This ensures the test suite doesn't
//! fail on machines without display hardware.
//!
//! # Running This Test
//!
//! ```bash
//! cargo test --test window_test
//! ```

use std::sync::Arc;

use rstest::rstest;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use softras_graphics::{
    BackendType, ClearColor, GraphicsDevice, GraphicsInstance, InstanceParameters, PresentMode,
    Surface, SurfaceConfiguration,
};

/// Number of frames to render before exiting.
const FRAMES_TO_RENDER: u32 = 5;

/// The shell's background color.
const CLEAR_COLOR: ClearColor = ClearColor::from_rgba8(20, 20, 30, 255);

/// Test result that can be shared across the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestResult {
    /// Test is still running.
    Running,
    /// Test passed successfully.
    Passed,
    /// Test was skipped (window/device not available).
    Skipped,
    /// Test failed with an error.
    Failed,
}

/// Application state for the window test.
struct WindowTestApp {
    /// Test result.
    result: TestResult,
    /// Instance parameters for backend selection.
    params: InstanceParameters,
    /// Window handle (created on resume).
    window: Option<Arc<Window>>,
    /// Graphics instance.
    instance: Option<Arc<GraphicsInstance>>,
    /// Graphics device.
    device: Option<Arc<GraphicsDevice>>,
    /// Surface for the window.
    surface: Option<Arc<Surface>>,
    /// Current frame count.
    frame_count: u32,
    /// Window size.
    window_size: (u32, u32),
}

impl WindowTestApp {
    fn new(params: InstanceParameters) -> Self {
        Self {
            result: TestResult::Running,
            params,
            window: None,
            instance: None,
            device: None,
            surface: None,
            frame_count: 0,
            window_size: (320, 240), // Small window for tests
        }
    }

    /// Initialize graphics after the window is created.
    ///
    /// Acquisition order under test: instance, then surface, then device.
    fn init_graphics(&mut self) -> bool {
        let window = match &self.window {
            Some(w) => Arc::clone(w),
            None => {
                log::warn!("No window available for graphics init");
                return false;
            }
        };

        let instance = match GraphicsInstance::with_parameters(self.params) {
            Ok(i) => i,
            Err(e) => {
                log::warn!("Failed to create graphics instance: {}", e);
                return false;
            }
        };

        let surface = match instance.create_surface(window) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to create surface: {}", e);
                return false;
            }
        };

        let device = match instance.create_device_for_surface(&surface) {
            Ok(d) => d,
            Err(e) => {
                log::warn!(
                    "Failed to create graphics device compatible with surface: {}",
                    e
                );
                return false;
            }
        };

        let config = SurfaceConfiguration::new(self.window_size.0, self.window_size.1)
            .with_format(surface.preferred_format())
            .with_present_mode(PresentMode::Fifo);

        if let Err(e) = surface.configure(&device, &config) {
            log::warn!("Failed to configure surface: {}", e);
            return false;
        }

        log::info!(
            "Graphics initialized: {} ({}x{})",
            device.name(),
            self.window_size.0,
            self.window_size.1
        );

        self.instance = Some(instance);
        self.device = Some(device);
        self.surface = Some(surface);

        true
    }

    /// Render a single frame: acquire, clear, present.
    fn render_frame(&mut self) -> bool {
        let device = match &self.device {
            Some(d) => d,
            None => return false,
        };
        let surface = match &self.surface {
            Some(s) => s,
            None => return false,
        };

        let frame = match surface.acquire_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to acquire swapchain texture: {}", e);
                return false;
            }
        };

        if let Err(e) = device.clear_frame(&frame, CLEAR_COLOR) {
            log::warn!("Failed to clear frame: {}", e);
            return false;
        }

        frame.present();

        self.frame_count += 1;
        log::info!("Frame {} cleared and presented", self.frame_count);
        true
    }

    /// Check if the test is complete.
    fn is_complete(&self) -> bool {
        !matches!(self.result, TestResult::Running)
    }
}

impl ApplicationHandler for WindowTestApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title("softras window test")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.window_size.0,
                    self.window_size.1,
                ))
                .with_visible(true); // Need a visible window for events

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    log::info!("Test window created");
                    self.window = Some(Arc::new(window));

                    if !self.init_graphics() {
                        log::info!("Graphics initialization failed, skipping test");
                        self.result = TestResult::Skipped;
                        event_loop.exit();
                    }
                }
                Err(e) => {
                    log::info!("Window creation failed (expected on CI): {}", e);
                    self.result = TestResult::Skipped;
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.result = TestResult::Failed; // Unexpected close
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                self.window_size = (size.width, size.height);

                // Reconfigure the surface on resize
                if let (Some(device), Some(surface)) = (&self.device, &self.surface) {
                    let config = SurfaceConfiguration::new(self.window_size.0, self.window_size.1)
                        .with_format(surface.preferred_format())
                        .with_present_mode(PresentMode::Fifo);
                    let _ = surface.configure(device, &config);
                }
            }
            WindowEvent::RedrawRequested => {
                if self.surface.is_some() {
                    if !self.render_frame() {
                        log::warn!("Frame rendering failed");
                        self.result = TestResult::Failed;
                        event_loop.exit();
                        return;
                    }

                    if self.frame_count >= FRAMES_TO_RENDER {
                        log::info!(
                            "Successfully rendered {} frames, test passed!",
                            FRAMES_TO_RENDER
                        );
                        self.result = TestResult::Passed;
                        event_loop.exit();
                        return;
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Request redraw on each iteration to drive rendering
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Try to create an event loop off the main thread.
///
/// Returns `None` when the platform refuses (headless CI, or an event loop
/// already exists in this process), which callers treat as a skip.
fn build_event_loop() -> Option<EventLoop<()>> {
    #[cfg(target_os = "windows")]
    {
        use winit::platform::windows::EventLoopBuilderExtWindows;

        let mut builder = EventLoop::builder();
        builder.with_any_thread(true);
        match builder.build() {
            Ok(el) => Some(el),
            Err(e) => {
                log::info!("Event loop creation failed (expected on CI): {}", e);
                None
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        use winit::platform::wayland::EventLoopBuilderExtWayland;
        use winit::platform::x11::EventLoopBuilderExtX11;

        // Tests run on worker threads; both Linux backends need an explicit
        // opt-in for that.
        let mut builder = EventLoop::builder();
        EventLoopBuilderExtX11::with_any_thread(&mut builder, true);
        EventLoopBuilderExtWayland::with_any_thread(&mut builder, true);
        match builder.build() {
            Ok(el) => Some(el),
            Err(e) => {
                log::info!("Event loop creation failed (expected on CI): {}", e);
                None
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        // On macOS the event loop must be created on the main thread; detect
        // the panic and skip instead of failing the suite.
        #[allow(clippy::redundant_closure)]
        let result = std::panic::catch_unwind(|| EventLoop::new());
        match result {
            Ok(Ok(el)) => Some(el),
            Ok(Err(e)) => {
                log::info!("Event loop creation failed (expected on CI): {}", e);
                None
            }
            Err(_) => {
                log::info!("Event loop creation panicked (non-main thread), skipping");
                None
            }
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        match EventLoop::new() {
            Ok(el) => Some(el),
            Err(e) => {
                log::info!("Event loop creation failed (expected on CI): {}", e);
                None
            }
        }
    }
}

/// Run the window test with event pumping (test-friendly approach).
///
/// Returns true if the test passed or was skipped (CI compatibility).
fn run_window_test(params: InstanceParameters) -> bool {
    // Initialize logging for test output
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();

    log::info!(
        "Starting window integration test with backend: {:?}",
        params.backend
    );

    let mut event_loop = match build_event_loop() {
        Some(el) => el,
        None => return true, // Skip test, consider passed
    };

    let mut app = WindowTestApp::new(params);

    // Use pump_events for controlled iteration so the test cannot block
    // forever.
    let max_iterations = 1000;
    let mut iterations = 0;

    loop {
        let status = event_loop.pump_app_events(None, &mut app);

        if let PumpStatus::Exit(_code) = status {
            break;
        }

        if app.is_complete() {
            break;
        }

        iterations += 1;
        if iterations >= max_iterations {
            log::warn!("Test timed out after {} iterations", max_iterations);
            break;
        }
    }

    match app.result {
        TestResult::Passed => true,
        TestResult::Skipped => {
            log::info!("Test skipped (no window/device available)");
            true
        }
        TestResult::Failed => false,
        TestResult::Running => {
            log::warn!("Test did not complete");
            false
        }
    }
}

#[rstest]
#[case::dummy(BackendType::Dummy)]
#[case::auto(BackendType::Auto)]
fn test_window_clear_and_present(#[case] backend: BackendType) {
    let params = InstanceParameters::new().with_backend(backend);
    assert!(run_window_test(params));
}
