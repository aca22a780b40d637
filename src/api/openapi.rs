//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::convert::convert_sql,
        crate::api::routes::convert::convert_sql_text,
        crate::api::routes::convert::convert_sql_report,
    ),
    components(schemas(
        crate::api::models::TableSchema,
        crate::api::models::ColumnSchema,
        crate::api::models::SkippedClause,
        crate::api::models::SkipReason,
        crate::api::routes::convert::SqlTextRequest,
        crate::api::routes::convert::ConvertResponse,
    )),
    tags(
        (name = "Convert", description = "SQL DDL to schema conversion endpoints")
    ),
    info(
        title = "SQL Schema API",
        description = "Extracts table schemas from SQL CREATE TABLE statements and renders documentation reports"
    )
)]
pub struct ApiDoc;
