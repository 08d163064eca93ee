use axum::Router;

use crate::features::{names, sums};

pub fn router() -> Router {
    Router::new().nest(
        "/api",
        Router::new()
            .nest("/names", names::routes::routes())
            .nest("/sums", sums::routes::routes()),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use toolkit::dto::sum::MAX_BOUND;
    use tower::ServiceExt;

    use super::router;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = router().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    async fn get_json(path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request");
        send(request).await
    }

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        send(request).await
    }

    #[tokio::test]
    async fn test_list_formats() {
        let (status, body) = get_json("/api/names/formats").await;
        assert_eq!(status, StatusCode::OK);

        let formats = body.as_array().expect("array");
        assert_eq!(formats.len(), 12);
        assert_eq!(formats[0]["format"], "original");
        assert_eq!(formats[1]["format"], "first_last");
        assert_eq!(formats[1]["label"], "First Last");
        assert_eq!(formats[11]["format"], "formal");
    }

    #[tokio::test]
    async fn test_list_samples() {
        let (status, body) = get_json("/api/names/samples").await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body.as_array()
                .expect("array")
                .contains(&json!("Jean-Claude Van Damme"))
        );
    }

    #[tokio::test]
    async fn test_format_all() {
        let (status, body) =
            post_json("/api/names/format", json!({ "full_name": " John Michael Smith " })).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(body["original"], "John Michael Smith");
        assert_eq!(body["parts"]["first"], "John");
        assert_eq!(body["parts"]["middle"], json!(["Michael"]));
        assert_eq!(body["parts"]["last"], "Smith");
        assert_eq!(body["formats"]["formal"], "Smith, John M.");
        assert_eq!(body["formats"]["initials_only"], "J.M.S.");
        assert_eq!(body["formats"]["title_case"], "John Michael Smith");
        assert_eq!(body["formats"].as_object().expect("object").len(), 12);
        assert_eq!(body["statistics"]["word_count"], 3);
        assert_eq!(body["statistics"]["format_count"], 12);
        assert_eq!(body["statistics"]["initial_count"], 3);
    }

    #[tokio::test]
    async fn test_format_selected() {
        let (status, body) = post_json(
            "/api/names/format",
            json!({ "full_name": "John Doe", "formats": ["last_first", "initials_only"] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let formats = body["formats"].as_object().expect("object");
        assert_eq!(formats.len(), 2);
        assert_eq!(formats["last_first"], "Doe, John");
        assert_eq!(formats["initials_only"], "J.D.");
        assert_eq!(body["statistics"]["format_count"], 2);
    }

    #[tokio::test]
    async fn test_format_empty_name() {
        let (status, body) = post_json("/api/names/format", json!({ "full_name": "" })).await;
        assert_eq!(status, StatusCode::OK);

        for (format, value) in body["formats"].as_object().expect("object") {
            assert_eq!(value, "", "{} should be empty", format);
        }
    }

    #[tokio::test]
    async fn test_format_unknown_format_rejected() {
        let (status, body) = post_json(
            "/api/names/format",
            json!({ "full_name": "John Doe", "formats": ["nickname"] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().expect("message").contains("nickname"));
    }

    #[tokio::test]
    async fn test_format_too_long_rejected() {
        let (status, body) =
            post_json("/api/names/format", json!({ "full_name": "x".repeat(1025) })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let (status, body) = post_json("/api/names/format", json!({ "name": "John" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_compute_sum_with_trace() {
        let (status, body) = post_json("/api/sums/compute", json!({ "n": 10 })).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(body["total"], 55);
        assert_eq!(body["formula_total"], 55);
        assert_eq!(body["verified"], true);
        assert_eq!(body["steps"].as_array().expect("steps").len(), 10);
        assert_eq!(body["steps"][9]["running_sum"], 55);
        assert!(body["breakdown"].is_string());
    }

    #[tokio::test]
    async fn test_compute_sum_thresholds() {
        let (_, medium) = post_json("/api/sums/compute", json!({ "n": 15 })).await;
        assert!(medium["breakdown"].is_string());
        assert!(medium.get("steps").is_none());

        let (_, large) = post_json("/api/sums/compute", json!({ "n": 100 })).await;
        assert_eq!(large["total"], 5050);
        assert!(large.get("breakdown").is_none());
        assert!(large.get("steps").is_none());
    }

    #[tokio::test]
    async fn test_compute_sum_threshold_boundaries() {
        let (_, eleven) = post_json("/api/sums/compute", json!({ "n": 11 })).await;
        assert!(eleven.get("steps").is_none());
        assert!(eleven["breakdown"].is_string());

        let (_, twenty) = post_json("/api/sums/compute", json!({ "n": 20 })).await;
        assert_eq!(twenty["total"], 210);
        assert!(twenty["breakdown"].is_string());

        let (_, twenty_one) = post_json("/api/sums/compute", json!({ "n": 21 })).await;
        assert_eq!(twenty_one["total"], 231);
        assert!(twenty_one.get("breakdown").is_none());
    }

    #[tokio::test]
    async fn test_compute_sum_upper_bound() {
        let (status, body) = post_json("/api/sums/compute", json!({ "n": MAX_BOUND })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 50_005_000);
        assert_eq!(body["formatted_total"], "50,005,000");
    }

    #[tokio::test]
    async fn test_compute_sum_out_of_range_rejected() {
        for n in [0, MAX_BOUND + 1] {
            let (status, body) = post_json("/api/sums/compute", json!({ "n": n })).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "n={} should be rejected", n);
            assert_eq!(body["error"], "Validation failed");
        }
    }
}
