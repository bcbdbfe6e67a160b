//! Local development server
//!
//! Serves the same dispatcher over plain HTTP so the API can be exercised
//! without a Lambda runtime. The resource path is the request URI path.

use anyhow::Result;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::router;

/// Create the router that forwards every request to the dispatcher
pub fn create_local_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/{*path}", any(handle_local_request))
        .route("/", any(handle_local_request))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process exits
pub async fn serve(config: &AppConfig) -> Result<()> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Local server listening on {}", addr);

    axum::serve(listener, create_local_router()).await?;
    Ok(())
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn handle_local_request(request: Request) -> Response {
    let query: HashMap<String, String> = request
        .uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let sdk_request = movies_lambda_sdk::Request {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query,
        request_id: Uuid::new_v4().to_string(),
    };

    let sdk_response = router::dispatch(&sdk_request);

    let mut builder = Response::builder()
        .status(StatusCode::from_u16(sdk_response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in &sdk_response.headers {
        builder = builder.header(key, value);
    }

    match builder.body(Body::from(sdk_response.body)) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(request_id = %sdk_request.request_id, "Failed to build response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
        }
    }
}
