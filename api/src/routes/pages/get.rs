use crate::response::error_response;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use include_dir::{Dir, include_dir};

static PAGES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/pages");

fn serve(file: &str) -> Response {
    match PAGES.get_file(file).and_then(|f| f.contents_utf8()) {
        Some(html) => Html(html).into_response(),
        None => {
            tracing::error!(page = file, "Embedded page missing");
            error_response(StatusCode::NOT_FOUND, "Not found")
        }
    }
}

pub async fn index_page() -> Response {
    serve("index.html")
}

pub async fn admin_page() -> Response {
    serve("admin.html")
}

pub async fn stats_page() -> Response {
    serve("stats.html")
}
