use crate::http::AppState;
use crate::session::ws_handler;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use serde_json::json;
use tracing::error;

pub fn routes(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/ws", get(ws_handler))
        .route("/iceservers", get(ice_servers_handler))
        .with_state(state)
}

async fn ice_servers_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.ice.fetch().await {
        Ok(servers) => Json(servers).into_response(),
        Err(e) => {
            error!("ICE credential lookup failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
