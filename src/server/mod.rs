pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::ErrorResponse;

use crate::{
    Result,
    config::Config,
    llm,
    planner::{AccommodationQuery, ActivityQuery, FlightQuery, Planner, TripPreferences},
};
use axum::{
    Router,
    routing::{get_service, post},
};
use std::{net::SocketAddr, path::Path};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

/// Planning API plus the static landing page served from `static_dir`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route(
            "/api/generate-itinerary",
            post(handlers::plan::<TripPreferences>),
        )
        .route("/api/flights", post(handlers::plan::<FlightQuery>))
        .route(
            "/api/accommodations",
            post(handlers::plan::<AccommodationQuery>),
        )
        .route("/api/activities", post(handlers::plan::<ActivityQuery>))
        .route(
            "/",
            get_service(ServeFile::new(static_dir.join("index.html"))),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = llm::create_client(&config.llm);
    let planner = Planner::new(client, config.llm.model.clone());

    let app = router(AppState::new(planner), &config.server.static_dir);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Server is running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
