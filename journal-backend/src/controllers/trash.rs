//! Trash API — list, restore and permanently delete trashed notes.

use actix_web::{web, HttpResponse, Responder};
use journal_types::MessageResponse;

use super::error_response;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/trash")
            .route("", web::get().to(get_trash))
            .route("/{id}/restore", web::post().to(restore_note))
            .route("/{id}", web::delete().to(permanently_delete)),
    );
}

async fn get_trash(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.journal.trashed_notes())
}

async fn restore_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.journal.restore_note(path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Note restored")),
        Err(e) => error_response(&e),
    }
}

/// Works on any note, not only trashed ones
async fn permanently_delete(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match state.journal.purge_note(id) {
        Ok(()) => {
            log::info!("[NOTES] Permanently deleted note {}", id);
            HttpResponse::Ok().json(MessageResponse::new("Permanently deleted"))
        }
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::notes;
    use crate::controllers::test_support::state_in;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use journal_types::Note;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[actix_web::test]
    async fn test_trash_lifecycle() {
        let dir = tempdir().unwrap();
        let state = state_in(dir.path());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(notes::config)
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/notes")
            .set_json(json!({ "id": 5, "text": "Good day", "mood": "happy" }))
            .to_request();
        test::call_service(&app, req).await;

        // Restoring an active note is a miss
        let req = test::TestRequest::post().uri("/api/trash/5/restore").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not found in trash");

        let req = test::TestRequest::delete().uri("/api/notes/5").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/trash").to_request();
        let trashed: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(trashed.len(), 1);
        assert!(trashed[0].deleted);

        let req = test::TestRequest::post().uri("/api/trash/5/restore").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Note restored");

        let req = test::TestRequest::get().uri("/api/trash").to_request();
        let trashed: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert!(trashed.is_empty());

        let req = test::TestRequest::delete().uri("/api/trash/5").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Permanently deleted");
        assert_eq!(state.journal.len(), 0);

        let req = test::TestRequest::delete().uri("/api/trash/5").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
