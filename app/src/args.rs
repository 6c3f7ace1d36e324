//! Command line arguments trait and default implementation.
//!
//! Uses clap for CLI parsing with:
//! - Help text (`--help`)
//! - Validation and clear error messages

use clap::Parser;

use softras_graphics::BackendType;

/// Trait for parsing command line arguments.
///
/// Implement this trait to customize how your application handles command
/// line arguments. The trait provides defaults for all methods except
/// [`parse`](AppArgs::parse), making it easy to override only the options
/// you need.
pub trait AppArgs: Sized {
    /// Parse command line arguments.
    fn parse() -> Self;

    /// Get the graphics backend to use.
    ///
    /// Default: `BackendType::Auto` (automatically select best available)
    fn backend(&self) -> BackendType {
        BackendType::Auto
    }

    /// Get the initial window width.
    ///
    /// Default: 800
    fn window_width(&self) -> u32 {
        800
    }

    /// Get the initial window height.
    ///
    /// Default: 600
    fn window_height(&self) -> u32 {
        600
    }

    /// Get the window title.
    ///
    /// Default: "Software Rasterizer"
    fn window_title(&self) -> &str {
        "Software Rasterizer"
    }

    /// Get whether VSync is enabled.
    ///
    /// Default: true
    fn vsync(&self) -> bool {
        true
    }

    /// Get the maximum number of frames to render before auto-exit.
    ///
    /// This is useful for automated testing to verify that the application
    /// can start and render without errors.
    ///
    /// Default: `None` (run until quit)
    fn max_frames(&self) -> Option<u64> {
        None
    }
}

/// Graphics backend selection for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CliBackend {
    /// Automatically select the best available backend (wgpu preferred).
    #[default]
    Auto,
    /// Cross-platform GPU backend via wgpu.
    Wgpu,
    /// No-op backend for testing and CI environments.
    Dummy,
}

impl From<CliBackend> for BackendType {
    fn from(cli: CliBackend) -> Self {
        match cli {
            CliBackend::Auto => BackendType::Auto,
            CliBackend::Wgpu => BackendType::Wgpu,
            CliBackend::Dummy => BackendType::Dummy,
        }
    }
}

/// Software rasterizer shell arguments.
#[derive(Parser, Debug)]
#[command(
    name = "rasterizer",
    about = "Software rasterizer bootstrap shell",
    version
)]
struct ClapArgs {
    /// Graphics backend to use.
    #[arg(long, default_value = "auto", value_enum)]
    backend: CliBackend,

    /// Initial window width in pixels.
    #[arg(long, default_value = "800")]
    width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "600")]
    height: u32,

    /// Disable vertical sync (may cause tearing).
    #[arg(long)]
    no_vsync: bool,

    /// Exit after rendering N frames (useful for testing).
    #[arg(long)]
    max_frames: Option<u64>,
}

/// Default command line arguments implementation.
#[derive(Debug, Clone)]
pub struct DefaultAppArgs {
    backend: BackendType,
    width: u32,
    height: u32,
    title: String,
    vsync: bool,
    max_frames: Option<u64>,
}

impl Default for DefaultAppArgs {
    fn default() -> Self {
        Self {
            backend: BackendType::Auto,
            width: 800,
            height: 600,
            title: "Software Rasterizer".to_string(),
            vsync: true,
            max_frames: None,
        }
    }
}

impl DefaultAppArgs {
    /// Create default args with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the graphics backend.
    pub fn with_backend(mut self, backend: BackendType) -> Self {
        self.backend = backend;
        self
    }

    /// Set the maximum number of frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }
}

impl From<ClapArgs> for DefaultAppArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            backend: args.backend.into(),
            width: args.width,
            height: args.height,
            title: "Software Rasterizer".to_string(),
            vsync: !args.no_vsync,
            max_frames: args.max_frames,
        }
    }
}

impl AppArgs for DefaultAppArgs {
    fn parse() -> Self {
        ClapArgs::parse().into()
    }

    fn backend(&self) -> BackendType {
        self.backend
    }

    fn window_width(&self) -> u32 {
        self.width
    }

    fn window_height(&self) -> u32 {
        self.height
    }

    fn window_title(&self) -> &str {
        &self.title
    }

    fn vsync(&self) -> bool {
        self.vsync
    }

    fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_bootstrap_window() {
        let args: DefaultAppArgs = ClapArgs::try_parse_from(["rasterizer"]).unwrap().into();

        assert_eq!(args.window_width(), 800);
        assert_eq!(args.window_height(), 600);
        assert_eq!(args.window_title(), "Software Rasterizer");
        assert_eq!(args.backend(), BackendType::Auto);
        assert!(args.vsync());
        assert_eq!(args.max_frames(), None);
    }

    #[test]
    fn test_flags_are_parsed() {
        let args: DefaultAppArgs = ClapArgs::try_parse_from([
            "rasterizer",
            "--backend",
            "dummy",
            "--width",
            "320",
            "--height",
            "240",
            "--no-vsync",
            "--max-frames",
            "5",
        ])
        .unwrap()
        .into();

        assert_eq!(args.backend(), BackendType::Dummy);
        assert_eq!(args.window_width(), 320);
        assert_eq!(args.window_height(), 240);
        assert!(!args.vsync());
        assert_eq!(args.max_frames(), Some(5));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(ClapArgs::try_parse_from(["rasterizer", "--backend", "metal"]).is_err());
    }

    #[test]
    fn test_builders() {
        let args = DefaultAppArgs::with_title("test")
            .with_size(64, 64)
            .with_backend(BackendType::Dummy)
            .with_max_frames(3);

        assert_eq!(args.window_title(), "test");
        assert_eq!(args.window_width(), 64);
        assert_eq!(args.window_height(), 64);
        assert_eq!(args.backend(), BackendType::Dummy);
        assert_eq!(args.max_frames(), Some(3));
    }
}
