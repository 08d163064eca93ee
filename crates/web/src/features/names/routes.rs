use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{format_name, list_formats, list_samples};

pub fn routes() -> Router {
    Router::new()
        .route("/formats", get(list_formats))
        .route("/samples", get(list_samples))
        .route("/format", post(format_name))
}
