use axum::{Router, routing::post};

use super::handlers::compute_sum;

pub fn routes() -> Router {
    Router::new().route("/compute", post(compute_sum))
}
