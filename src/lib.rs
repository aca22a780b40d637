// API module for the conversion service
pub mod api;

// Export module for report renderers
pub mod export;

// Re-export api modules at crate root so the binary and tests can use
// sql_schema_api::routes, sql_schema_api::services, ...
pub use api::middleware;
pub use api::models;
pub use api::routes;
pub use api::services;

// The core contract: SQL text in, ordered table schemas out.
pub use api::services::sql_parser::parse_sql_source;
