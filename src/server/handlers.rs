use super::types::ErrorResponse;
use crate::planner::{PlanRequest, Planner};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Planner>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

/// Shared handler for every planning route; `R` selects the prompt and the
/// expected response shape.
pub async fn plan<R: PlanRequest>(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, HandlerError> {
    info!("Received {} request", R::KIND);

    let request: R = parse_body(&headers, &body)?;

    match state.planner.plan(&request).await {
        Ok(value) => {
            info!("Successfully generated {}", R::KIND);
            Ok(Json(value))
        }
        Err(e) => {
            error!("Error generating {}: {}", R::KIND, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// JSON bodies are parsed; an empty body or one sent with another content
/// type is treated as `{}` so every field renders as `undefined`.
fn parse_body<R: PlanRequest>(headers: &HeaderMap, body: &Bytes) -> Result<R, HandlerError> {
    let parsed = if is_json(headers) && !body.is_empty() {
        serde_json::from_slice(body)
    } else {
        serde_json::from_value(Value::Object(Default::default()))
    };

    parsed.map_err(|e| {
        warn!("Rejected {} request body: {}", R::KIND, e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid JSON body: {}", e),
            }),
        )
    })
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
