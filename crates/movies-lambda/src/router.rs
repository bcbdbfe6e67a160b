//! Request dispatcher - maps a resource path and query parameters to a handler
//!
//! Routing is an exact match on the resource path and ignores the HTTP method.
//! Hosting adapters build the SDK [`Request`] and call [`dispatch`].

use movies_lambda_sdk::prelude::*;

use crate::handlers;

pub const MOVIES: &str = "/api/movies";
pub const MOVIE_SUMMARY: &str = "/api/movies/summary";

/// Dispatch a request to its handler and render the envelope response.
pub fn dispatch(req: &Request) -> Response {
    tracing::debug!(
        request_id = %req.request_id,
        method = %req.method,
        resource = %req.path,
        query = ?req.query,
        "Dispatching request"
    );

    match route(req) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(
                request_id = %req.request_id,
                resource = %req.path,
                status = err.status_code(),
                "{}", err
            );
            err.to_response()
        }
    }
}

fn route(req: &Request) -> Result<Response, HandlerError> {
    match req.path.as_str() {
        MOVIES => match req.query_param("year") {
            Some(year) => handlers::get_movies_by_year(year),
            None => handlers::get_movies(),
        },
        MOVIE_SUMMARY => {
            let movie_id = req.require_query_param("movieId", "movieId query param missing")?;
            handlers::get_movie_summary(movie_id)
        }
        _ => Err(HandlerError::Internal("Wrong path provided".into())),
    }
}
