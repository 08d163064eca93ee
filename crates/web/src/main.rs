use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::names::handlers::list_formats,
        features::names::handlers::list_samples,
        features::names::handlers::format_name,
        features::sums::handlers::compute_sum,
    ),
    components(
        schemas(
            toolkit::dto::name::FormatNameRequest,
            toolkit::dto::name::FormatNameResponse,
            toolkit::dto::name::FormatInfo,
            toolkit::dto::name::NameParts,
            toolkit::dto::name::NameStatistics,
            toolkit::dto::sum::ComputeSumRequest,
            toolkit::models::NameFormat,
            toolkit::models::SeriesStep,
            toolkit::models::SumReport,
        )
    ),
    tags(
        (name = "names", description = "Name parsing and formatting endpoints"),
        (name = "sums", description = "Arithmetic series endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting name & series toolkit API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
