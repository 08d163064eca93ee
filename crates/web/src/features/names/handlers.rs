use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use toolkit::dto::name::{FormatInfo, FormatNameRequest, FormatNameResponse};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/names/formats",
    responses(
        (status = 200, description = "Supported name formats in display order", body = Vec<FormatInfo>)
    ),
    tag = "names"
)]
pub async fn list_formats() -> WebResult<Response> {
    Ok(Json(services::list_formats()).into_response())
}

#[utoipa::path(
    get,
    path = "/api/names/samples",
    responses(
        (status = 200, description = "Sample names for quick testing", body = Vec<String>)
    ),
    tag = "names"
)]
pub async fn list_samples() -> WebResult<Response> {
    Ok(Json(services::list_samples()).into_response())
}

#[utoipa::path(
    post,
    path = "/api/names/format",
    request_body = FormatNameRequest,
    responses(
        (status = 200, description = "Name formatted successfully", body = FormatNameResponse),
        (status = 400, description = "Invalid request or unknown format")
    ),
    tag = "names"
)]
pub async fn format_name(
    payload: Result<Json<FormatNameRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let formats = req.requested_formats()?;
    tracing::debug!(
        formats = formats.len(),
        chars = req.full_name.chars().count(),
        "Formatting name"
    );

    let response = services::format_name(&req.full_name, &formats);

    Ok(Json(response).into_response())
}
