use super::MockLlmClient;
use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use travel_relay::{
    config::{Config, LlmConfig, LlmProvider, LogsConfig, ServerConfig},
    planner::Planner,
    server::{AppState, router},
};

pub const TEST_MODEL: &str = "gemini-1.5-flash";
pub const LANDING_PAGE: &str = "<!DOCTYPE html><html><body><h1>Travel Planner</h1></body></html>";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        llm: LlmConfig {
            provider: LlmProvider::Gemini,
            base_url: None,
            api_key: "test-api-key".to_string(),
            model: TEST_MODEL.to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: "public".to_string(),
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Write `content` as config.yaml inside `dir` and return its path
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

/// Static directory holding a landing page
pub fn create_static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("index.html"), LANDING_PAGE).expect("Failed to write index.html");
    dir
}

/// Router wired to `mock`; keep the returned TempDir alive for the test.
pub fn create_test_app(mock: Arc<MockLlmClient>) -> (Router, TempDir) {
    let static_dir = create_static_dir();
    let planner = Planner::new(mock, TEST_MODEL);
    let app = router(AppState::new(planner), static_dir.path());
    (app, static_dir)
}

/// Wraps a JSON value in the fenced block models usually answer with.
pub fn fenced(value: &Value) -> String {
    format!(
        "Here are my recommendations:\n```json\n{}\n```\nLet me know if you need anything else!",
        serde_json::to_string_pretty(value).unwrap()
    )
}

pub fn sample_flight() -> Value {
    json!({
        "airline": "IndiGo",
        "flightNumber": "6E2134",
        "departureTime": "06:10",
        "arrivalTime": "08:20",
        "duration": "2h 10m",
        "price": "65 USD",
        "stops": 0,
        "departureAirport": "DEL",
        "arrivalAirport": "BOM"
    })
}

pub fn sample_itinerary() -> Value {
    json!({
        "destination": "Goa, India",
        "duration": "2 days",
        "totalEstimatedCost": "18000 INR",
        "itinerary": [
            {
                "day": 1,
                "date": "2024-12-20",
                "activities": [
                    {
                        "time": "Morning",
                        "activity": "Calangute Beach",
                        "description": "Relax by the sea",
                        "estimatedCost": "0 INR",
                        "location": "Calangute",
                        "travelTime": "20 minutes from previous location"
                    }
                ],
                "meals": [
                    {
                        "type": "Lunch",
                        "recommendation": "Britto's",
                        "cuisine": "Goan",
                        "estimatedCost": "900 INR",
                        "location": "Baga"
                    }
                ],
                "accommodation": {
                    "name": "Casa Anjuna",
                    "type": "Hotel",
                    "estimatedCost": "5000 INR",
                    "location": "Anjuna"
                }
            }
        ],
        "additionalTips": ["Rent a scooter"]
    })
}
