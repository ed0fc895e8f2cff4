use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
    cfg.service(web::resource("/api/version").route(web::get().to(get_version)));
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": VERSION,
        "notes": state.journal.len(),
        "data_file": state.config.data_file.display().to_string(),
        "uptime_secs": state.started_at.elapsed().as_secs(),
    }))
}

async fn get_version() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "version": VERSION
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::state_in;
    use actix_web::{test, App};
    use tempfile::tempdir;

    #[actix_web::test]
    async fn test_health_reports_note_count() {
        let dir = tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(state_in(dir.path())).configure(config_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["notes"], 0);
        assert_eq!(body["version"], VERSION);
        assert_eq!(
            body["data_file"],
            dir.path().join("journal_data.json").display().to_string()
        );
    }
}
