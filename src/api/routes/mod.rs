//! API routes module - organizes all route handlers.

pub mod convert;
pub mod error;
pub mod openapi;

use axum::Router;

/// Create the main API router combining all route modules
pub fn create_api_router() -> Router {
    Router::new()
        .nest("/convert", convert::convert_router())
        .merge(openapi::openapi_router())
}
