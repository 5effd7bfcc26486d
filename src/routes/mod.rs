//! HTTP route handlers.

use actix_web::HttpResponse;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;

/// Maps a service failure onto an HTTP response.
///
/// Caller errors become `400 Bad Request` with the reason in the body; anything
/// else is logged and reported as `500` without details.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    if err.is_client_error() {
        log::warn!("Rejected grid request: {err}");
        HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()))
    } else {
        log::error!("Failed to serve grid request: {err}");
        HttpResponse::InternalServerError().json(ErrorResponse::new("internal server error"))
    }
}
