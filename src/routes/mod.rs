//! HTTP handlers.

use actix_web::HttpResponse;

use crate::dto::api::ErrorBody;
use crate::services::ServiceError;

pub mod api;

/// Maps a service failure onto a JSON error response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidCondition(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorBody::new(message))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("not found")),
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().json(ErrorBody::new("internal error"))
        }
    }
}
