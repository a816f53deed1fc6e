//! Configuration constants for ferris-cycles
//!
//! This module contains the defaults used by the command-line front end.
//! Command flags can be overridden through `FERRIS_CYCLES_*` environment
//! variables.

use std::time::Duration;

/// Progress indicator configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Circuits enumerated between two counter refreshes
    pub const CIRCUIT_REFRESH_STRIDE: usize = 256;

    /// Spinner frames for the ferris wheel animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎡 ", // Standard ferris wheel
        "🎡⊙", // With center dot
        "🎡◐", // Quarter filled
        "🎡◓", // Half filled
        "🎡◑", // Three quarters
        "🎡◒", // Another quarter
        "🎡○", // Empty circle
        "🎡●", // Full circle
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default traversal orientation for `find`
    pub const DEFAULT_ORIENTATION: &str = "original";
}
