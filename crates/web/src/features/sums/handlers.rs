use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use toolkit::{dto::sum::ComputeSumRequest, models::SumReport};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/sums/compute",
    request_body = ComputeSumRequest,
    responses(
        (status = 200, description = "Sum computed and verified", body = SumReport),
        (status = 400, description = "n outside 1..=10000")
    ),
    tag = "sums"
)]
pub async fn compute_sum(
    payload: Result<Json<ComputeSumRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    tracing::debug!(n = req.n, "Computing series sum");
    let report = services::compute_sum(req.n);

    Ok(Json(report).into_response())
}
