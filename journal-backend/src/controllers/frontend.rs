//! Static frontend: `/` serves `index.html`, any other path the matching file.

use actix_files::Files;
use std::path::Path;

/// Whether `static_dir` exists and can be served.
pub fn available(static_dir: &Path) -> bool {
    if !static_dir.is_dir() {
        log::warn!("Static directory {} not found, frontend disabled", static_dir.display());
        return false;
    }
    log::info!("Serving frontend from: {}", static_dir.display());
    true
}

/// File service for the frontend directory.
/// Must be registered after every `/api` route.
pub fn service(static_dir: &Path) -> Files {
    Files::new("/", static_dir).index_file("index.html")
}
