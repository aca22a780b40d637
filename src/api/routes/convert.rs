//! Conversion routes - SQL DDL in, structured schemas or a rendered report out.

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart},
    http::header,
    response::{IntoResponse, Json, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use super::error::ApiError;
use crate::api::models::{SkippedClause, TableSchema};
use crate::api::services::SchemaParser;
use crate::export::MarkdownExporter;

/// Maximum accepted SQL source size.
const MAX_SQL_BYTES: usize = 10 * 1024 * 1024;

/// Request body ceiling: the SQL cap plus headroom for JSON or multipart
/// framing, so oversized SQL reaches the handler and gets a 400 instead of
/// being cut off by the transport with a 413.
const MAX_BODY_BYTES: usize = MAX_SQL_BYTES + 1024 * 1024;

/// Request for SQL text conversion
#[derive(Debug, Deserialize, ToSchema)]
pub struct SqlTextRequest {
    pub content: String,
    #[serde(default)]
    pub dialect: Option<String>, // SQL dialect name (e.g., "generic", "mysql", "postgres")
}

/// Conversion result: tables in source order plus non-fatal diagnostics.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub tables: Vec<TableSchema>,
    pub skipped: Vec<SkippedClause>,
    pub warnings: Vec<String>,
}

/// Create the conversion router
pub fn convert_router() -> Router {
    Router::new()
        .route("/sql", post(convert_sql))
        .route("/sql/text", post(convert_sql_text))
        .route("/sql/report", post(convert_sql_report))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

fn sanitize(content: &str) -> Result<String, ApiError> {
    let content = content.replace('\x00', "");
    if content.len() > MAX_SQL_BYTES {
        return Err(ApiError::bad_request("SQL source exceeds the 10 MiB limit"));
    }
    Ok(content)
}

fn convert(content: &str, dialect: Option<&str>) -> ConvertResponse {
    let parser = SchemaParser::with_dialect_name(dialect.unwrap_or("generic"));
    let (tables, skipped) = parser.parse(content);

    // Distinguish "wrong input file" from "parsing gap" for the caller.
    let mut warnings = Vec::new();
    if tables.is_empty() {
        warnings.push("no CREATE TABLE statements found in input".to_string());
    }
    for table in &tables {
        if table.columns.is_empty() {
            warnings.push(format!(
                "table '{}' was found but no columns could be parsed",
                table.table_name
            ));
        }
    }

    ConvertResponse {
        tables,
        skipped,
        warnings,
    }
}

/// POST /convert/sql - Convert an uploaded SQL file
#[utoipa::path(
    post,
    path = "/convert/sql",
    tag = "Convert",
    request_body(content = String, description = "Multipart form with a 'file' field and an optional 'dialect' field"),
    responses(
        (status = 200, description = "SQL file converted", body = ConvertResponse),
        (status = 400, description = "Bad request - empty or oversized file")
    )
)]
pub async fn convert_sql(mut multipart: Multipart) -> Result<Json<ConvertResponse>, ApiError> {
    let mut sql_content = String::new();
    let mut dialect = "generic".to_string();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("");

        if name == "file" {
            if let Ok(content) = field.bytes().await {
                sql_content = String::from_utf8_lossy(&content).to_string();
            }
        } else if name == "dialect" {
            if let Ok(d) = field.text().await {
                dialect = d;
            }
        }
    }

    if sql_content.is_empty() {
        warn!("[Convert] empty SQL upload rejected");
        return Err(ApiError::bad_request("SQL file is empty"));
    }

    let content = sanitize(&sql_content)?;
    info!(
        "[Convert] SQL file conversion ({} bytes, dialect '{}')",
        content.len(),
        dialect
    );
    Ok(Json(convert(&content, Some(&dialect))))
}

/// POST /convert/sql/text - Convert SQL text to table schemas
#[utoipa::path(
    post,
    path = "/convert/sql/text",
    tag = "Convert",
    request_body = SqlTextRequest,
    responses(
        (status = 200, description = "SQL text converted", body = ConvertResponse),
        (status = 400, description = "Bad request - oversized input")
    )
)]
pub async fn convert_sql_text(
    Json(request): Json<SqlTextRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let content = sanitize(&request.content)?;
    info!("[Convert] SQL text conversion ({} bytes)", content.len());
    Ok(Json(convert(&content, request.dialect.as_deref())))
}

/// POST /convert/sql/report - Convert SQL text and render a markdown report
#[utoipa::path(
    post,
    path = "/convert/sql/report",
    tag = "Convert",
    request_body = SqlTextRequest,
    responses(
        (status = 200, description = "Rendered markdown report", body = String),
        (status = 400, description = "Bad request - oversized input")
    )
)]
pub async fn convert_sql_report(Json(request): Json<SqlTextRequest>) -> Result<Response, ApiError> {
    let content = sanitize(&request.content)?;
    let response = convert(&content, request.dialect.as_deref());
    info!(
        "[Convert] report render for {} tables",
        response.tables.len()
    );

    let report = MarkdownExporter::export_report(&response.tables);
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        report,
    )
        .into_response())
}
