//! Photo gallery API

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::notes::PhotoQuery;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/photos").route(web::get().to(list_photos)));
}

#[derive(Debug, Deserialize)]
struct PhotoParams {
    /// `all`, `today`, `week` or `month`
    date_filter: Option<String>,
    /// Exact mood or `all`
    mood_filter: Option<String>,
}

/// Photos of active notes, filtered by date window and mood
async fn list_photos(
    state: web::Data<AppState>,
    params: web::Query<PhotoParams>,
) -> impl Responder {
    let query = PhotoQuery::parse(params.date_filter.as_deref(), params.mood_filter.as_deref());
    let today = chrono::Local::now().date_naive();
    HttpResponse::Ok().json(state.journal.photos(&query, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::state_in;
    use actix_web::{test, App};
    use journal_types::{NewNote, PhotoEntry};
    use tempfile::tempdir;

    fn with_photo(id: i64, mood: &str, date: String) -> NewNote {
        NewNote {
            id: Some(id),
            text: Some(format!("note {}", id)),
            mood: Some(mood.to_string()),
            date: Some(date),
            photos: Some(vec![format!("photo-{}", id)]),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_gallery_filters() {
        let dir = tempdir().unwrap();
        let state = state_in(dir.path());
        let now = chrono::Local::now();
        let today = now.format("%Y-%m-%dT%H:%M:%S").to_string();

        state.journal.add_note(with_photo(1, "happy", "2001-01-01T10:00:00".to_string()), &now).unwrap();
        state.journal.add_note(with_photo(2, "happy", today.clone()), &now).unwrap();
        state.journal.add_note(with_photo(3, "sad", today), &now).unwrap();
        state.journal.add_note(with_photo(4, "happy", "2001-01-02T10:00:00".to_string()), &now).unwrap();
        state.journal.trash_note(4).unwrap();

        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/api/photos").to_request();
        let all: Vec<PhotoEntry> = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<i64> = all.iter().map(|p| p.note_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let req = test::TestRequest::get()
            .uri("/api/photos?date_filter=today&mood_filter=happy")
            .to_request();
        let filtered: Vec<PhotoEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].src, "photo-2");
        assert_eq!(filtered[0].mood, "happy");
        assert!(!filtered[0].deleted);
    }
}
