use actix_web::{error, web, HttpResponse};
use journal_types::ErrorResponse;

use crate::notes::JournalError;

pub mod calendar;
pub mod frontend;
pub mod health;
pub mod notes;
pub mod photos;
pub mod trash;

/// Map a journal failure onto the JSON error body and status the API uses.
pub(crate) fn error_response(err: &JournalError) -> HttpResponse {
    let body = ErrorResponse::new(err.to_string());
    match err {
        JournalError::Validation(_) => HttpResponse::BadRequest().json(body),
        JournalError::NotFound(_) => HttpResponse::NotFound().json(body),
        JournalError::Persistence { .. } | JournalError::Serialization(_) => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// JSON extractor settings shared by every route. Oversized bodies get the
/// API's error shape instead of actix's plain-text 413.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            log::warn!("[API] Rejected JSON body: {}", err);
            let status = match &err {
                error::JsonPayloadError::Overflow { .. } | error::JsonPayloadError::OverflowKnownLength { .. } => {
                    actix_web::http::StatusCode::PAYLOAD_TOO_LARGE
                }
                _ => actix_web::http::StatusCode::BAD_REQUEST,
            };
            let response = HttpResponse::build(status).json(ErrorResponse::new(err.to_string()));
            error::InternalError::from_response(err, response).into()
        })
}
