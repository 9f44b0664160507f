use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::client::Client;
use crate::jsonrpc;
use crate::Result;

/// Single JSON-RPC route: POST `/` relays, anything else is refused.
/// Request bodies are read unbounded; payload size is the remote
/// endpoint's concern, not the relay's.
pub fn router(client: Client) -> Router {
    Router::new()
        .route("/", post(handle_rpc).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::disable())
        .with_state(client)
}

/// Serves the relay on `addr` until ctrl-c.
pub async fn serve(addr: &str, client: Client) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}

async fn handle_rpc(State(client): State<Client>, body: Bytes) -> Response {
    let request = match jsonrpc::decode_request(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("rejecting request: {e}");
            return error_response(jsonrpc::Error::parse_error(), Value::Null);
        }
    };
    match client.forward(&request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::error!("forward failed: {e}");
            error_response(jsonrpc::Error::internal(e.to_string()), request.id)
        }
    }
}

async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
}

/// Relay-originated errors always go out as HTTP 400 with an error
/// envelope; upstream envelopes pass through as 200 regardless of their
/// contents.
fn error_response(error: jsonrpc::Error, id: Value) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(jsonrpc::Response::from_error(error, id)),
    )
        .into_response()
}
