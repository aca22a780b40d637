// Middleware module

pub mod cors;

// Re-export for convenience
pub use cors::create_cors_layer;
