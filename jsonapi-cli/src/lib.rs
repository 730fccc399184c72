//! Library entry for jsonapi-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// Output formatting used by normalize
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    Compact,
    /// Indented JSON
    Pretty,
}
