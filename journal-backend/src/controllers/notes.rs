//! Notes REST API — list, create, and move notes to the trash.

use actix_web::{web, HttpResponse, Responder};
use journal_types::{MessageResponse, NewNote};
use serde::Deserialize;

use super::error_response;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::delete().to(trash_note)),
    );
}

#[derive(Debug, Deserialize)]
struct ListNotesQuery {
    /// Exact calendar day, `YYYY-MM-DD`
    date: Option<String>,
}

/// All notes (trashed included), optionally for one day
async fn list_notes(
    state: web::Data<AppState>,
    query: web::Query<ListNotesQuery>,
) -> impl Responder {
    let notes = match query.date.as_deref().filter(|d| !d.is_empty()) {
        Some(date) => state.journal.notes_by_date(date),
        None => state.journal.all_notes(),
    };
    HttpResponse::Ok().json(notes)
}

async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<NewNote>,
) -> impl Responder {
    match state.journal.add_note(body.into_inner(), &chrono::Local::now()) {
        Ok(note) => {
            log::info!("[NOTES] Created note {} ({})", note.id, note.mood);
            HttpResponse::Created().json(MessageResponse::with_note("Success", note))
        }
        Err(e) => error_response(&e),
    }
}

/// Soft delete
async fn trash_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.journal.trash_note(path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Moved to trash")),
        Err(e) => error_response(&e),
    }
}
