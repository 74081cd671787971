use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use meal_core::constants::DEFAULT_LISTEN_ADDR;
use meal_core::{CoreConfig, MealService};

/// Main entry point for the meal menu viewer
///
/// Serves the meal page, the JSON API and the Swagger UI on one HTTP listener.
///
/// # Environment Variables
/// - `MEAL_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `NEIS_BASE_URL`: NEIS meal service endpoint
/// - `NEIS_OFFICE_CODE`: Office of education code (default: "B10")
/// - `NEIS_SCHOOL_CODE`: School code (default: "7010806")
/// - `SCHOOL_NAME` / `SCHOOL_FULL_NAME`: Names shown in the page title and footer
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration overrides are invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("meal_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("meal_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEAL_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into());

    let cfg = Arc::new(CoreConfig::from_overrides(
        std::env::var("NEIS_BASE_URL").ok(),
        std::env::var("NEIS_OFFICE_CODE").ok(),
        std::env::var("NEIS_SCHOOL_CODE").ok(),
        std::env::var("SCHOOL_NAME").ok(),
        std::env::var("SCHOOL_FULL_NAME").ok(),
    )?);

    tracing::info!(
        office = cfg.office_code(),
        school = cfg.school_code(),
        "using NEIS endpoint {}",
        cfg.neis_base_url()
    );

    let meal_service = MealService::new(cfg)?;
    let app = router(AppState::new(meal_service));

    tracing::info!("++ Starting meal menu server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Meal menu server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
