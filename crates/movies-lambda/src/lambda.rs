//! AWS Lambda adapter
//!
//! Converts API Gateway events delivered by `lambda_http` into SDK requests
//! and SDK responses back into Lambda responses. All routing happens in
//! [`router::dispatch`].

use std::collections::HashMap;

use lambda_http::request::RequestContext;
use lambda_http::{service_fn, Body, Error, RequestExt};
use movies_lambda_sdk::{Request, Response};
use uuid::Uuid;

use crate::router;

/// Register the dispatcher with the Lambda runtime and serve invocations
/// until the runtime shuts the process down.
pub async fn run() -> Result<(), Error> {
    tracing::info!("Registering handler with the Lambda runtime");
    lambda_http::run(service_fn(function_handler)).await
}

/// Handle a single Lambda invocation.
pub async fn function_handler(event: lambda_http::Request) -> Result<lambda_http::Response<Body>, Error> {
    let req = to_sdk_request(&event);
    let res = router::dispatch(&req);

    tracing::info!(
        request_id = %req.request_id,
        resource = %req.path,
        status = res.status,
        "Request handled"
    );

    into_lambda_response(res)
}

/// Logical resource path of an API Gateway event.
///
/// REST APIs carry the matched resource in the request context. HTTP APIs
/// carry a route key such as `"GET /api/movies"`. Anything else, including
/// the `$default` catch-all route key, falls back to the request URI path.
fn resource_path(event: &lambda_http::Request) -> String {
    let from_context = match event.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx.resource_path.clone(),
        Some(RequestContext::ApiGatewayV2(ctx)) => ctx
            .route_key
            .as_deref()
            .and_then(|key| key.split_once(' '))
            .map(|(_, path)| path.to_string()),
        _ => None,
    };

    from_context.unwrap_or_else(|| event.uri().path().to_string())
}

fn to_sdk_request(event: &lambda_http::Request) -> Request {
    // Repeated keys keep the last value, like API Gateway's single-value map
    let query: HashMap<String, String> = event
        .query_string_parameters()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let request_id = event
        .lambda_context_ref()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Request {
        method: event.method().to_string(),
        path: resource_path(event),
        query,
        request_id,
    }
}

fn into_lambda_response(res: Response) -> Result<lambda_http::Response<Body>, Error> {
    let mut builder = lambda_http::Response::builder().status(res.status);

    for (key, value) in &res.headers {
        builder = builder.header(key, value);
    }

    let response = builder.body(Body::Text(res.body)).map_err(Box::new)?;
    Ok(response)
}
