use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod dataset;
mod routes;

use dataset::CountyDataset;

#[derive(Clone)]
pub struct AppState {
    /// County feature collection; `None` until the data file is available,
    /// in which case the API serves placeholder scales.
    pub dataset: Arc<Option<CountyDataset>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "futurerisk_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Full county dataset via COUNTY_DATA_PATH; the bundled four-county
    // sample keeps a fresh checkout rendering real scales.
    let data_path = std::env::var("COUNTY_DATA_PATH")
        .unwrap_or_else(|_| "data/counties.sample.geojson".to_string());
    let dataset = match CountyDataset::load(&data_path) {
        Ok(dataset) => Some(dataset),
        Err(err) => {
            tracing::warn!("county dataset unavailable ({err}); serving placeholder scales");
            None
        }
    };

    let state = AppState {
        dataset: Arc::new(dataset),
    };

    let api_routes = Router::new()
        .route("/legend", get(routes::get_legend))
        .route("/choropleth", get(routes::get_choropleth))
        .route("/counties/:fips", get(routes::get_county))
        .with_state(state);

    let app = Router::new()
        .route("/health", get(routes::health))
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive());

    // Static file serving for UI (if dist exists)
    let ui_path = std::path::Path::new("ui/map/dist");
    let app = if ui_path.exists() {
        tracing::info!("Serving UI from {}", ui_path.display());
        app.nest_service("/", ServeDir::new(ui_path))
    } else {
        app
    };

    let port = std::env::var("FUTURERISK_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "18080".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("Future Risk gateway starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
