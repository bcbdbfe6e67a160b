//! Movie handlers
//!
//! These are placeholders for catalog queries: they validate their input and
//! echo it back in the envelope message, always with a null payload.

use movies_lambda_sdk::prelude::*;

/// List all movies.
pub fn get_movies() -> Result<Response, HandlerError> {
    tracing::debug!("get_movies");
    Ok(Response::envelope(200, true, "getMovies works", None::<()>))
}

/// List movies released in `year`.
///
/// Only called when the `year` parameter is present, so an empty value means
/// `?year=` was sent without a value.
pub fn get_movies_by_year(year: &str) -> Result<Response, HandlerError> {
    tracing::debug!(year, "get_movies_by_year");
    if year.is_empty() {
        return Err(HandlerError::BadRequest("year field missing".into()));
    }
    Ok(Response::envelope(200, true, format!("Year: {}", year), None::<()>))
}

/// Look up the summary of a single movie.
pub fn get_movie_summary(movie_id: &str) -> Result<Response, HandlerError> {
    tracing::debug!(movie_id, "get_movie_summary");
    if movie_id.is_empty() {
        return Err(HandlerError::BadRequest("movieId cannot be empty".into()));
    }
    Ok(Response::envelope(200, true, format!("movieId: {}", movie_id), None::<()>))
}
