use api::{app::build_app, state::AppState};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::{
    config::AppConfig,
    paths::{ensure_dir, results_dir, storage_root, uploads_dir},
};

#[tokio::main]
async fn main() {
    let config = AppConfig::global().clone();

    // Initialize logging
    let _log_guard = init_logging(&config);

    // Create storage directories
    let root = storage_root();
    for dir in [uploads_dir(&root), results_dir(&root)] {
        if let Err(err) = ensure_dir(&dir) {
            tracing::warn!(dir = %dir.display(), error = %err, "Could not create storage directory");
        }
    }

    let app_state = AppState::from_root(&root);

    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_DISPOSITION, CONTENT_TYPE]);
    let app = build_app(app_state, config.max_upload_bytes()).layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!(
        env = %config.env,
        storage_root = %root.display(),
        "Starting {} on http://{}",
        config.project_name,
        addr
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config.log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("api=info,services=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
