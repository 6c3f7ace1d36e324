//! Dummy GPU backend for testing and development.
//!
//! This backend doesn't perform actual GPU operations but provides
//! a valid implementation for exercising the shell without requiring
//! GPU hardware.

/// Dummy GPU backend.
#[derive(Debug)]
pub struct DummyBackend;

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self
    }

    /// Get the backend name.
    pub fn name(&self) -> &'static str {
        "Dummy Backend"
    }
}

impl Default for DummyBackend {
    fn default() -> Self {
        Self::new()
    }
}
