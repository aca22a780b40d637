//! Export format generators module.

pub mod markdown;

// Re-export for convenience
pub use markdown::MarkdownExporter;
