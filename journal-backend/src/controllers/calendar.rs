//! Calendar API — a month of active notes grouped by day

use actix_web::{web, HttpResponse, Responder};

use super::error_response;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/calendar/{year}/{month}").route(web::get().to(get_calendar_data)),
    );
}

async fn get_calendar_data(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
) -> impl Responder {
    let (year, month) = path.into_inner();
    match state.journal.calendar(year, month) {
        Ok(days) => HttpResponse::Ok().json(days),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::state_in;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use journal_types::NewNote;
    use serde_json::Value;
    use tempfile::tempdir;

    #[actix_web::test]
    async fn test_leap_day_lands_in_february_only() {
        let dir = tempdir().unwrap();
        let state = state_in(dir.path());
        let request = NewNote {
            text: Some("Leap".to_string()),
            mood: Some("happy".to_string()),
            date: Some("2024-02-29T10:00:00".to_string()),
            ..Default::default()
        };
        state.journal.add_note(request, &chrono::Local::now()).unwrap();

        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/api/calendar/2024/2").to_request();
        let feb: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(feb["2024-02-29"]["notes"][0]["text"], "Leap");
        assert_eq!(feb.as_object().unwrap().len(), 1);

        let req = test::TestRequest::get().uri("/api/calendar/2024/3").to_request();
        let march: Value = test::call_and_read_body_json(&app, req).await;
        assert!(march.get("2024-02-29").is_none());
        assert!(march.as_object().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_month_is_rejected() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(state_in(dir.path())).configure(config)).await;

        let req = test::TestRequest::get().uri("/api/calendar/2024/13").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
