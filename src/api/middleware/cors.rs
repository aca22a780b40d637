//! CORS middleware configuration.

use tower_http::cors::CorsLayer;

/// Create a permissive CORS layer.
///
/// The conversion endpoints are typically called from a documentation
/// frontend served on a different origin, so all origins, methods and
/// headers are allowed. Tighten this for locked-down deployments.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
