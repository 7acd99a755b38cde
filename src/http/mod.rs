//! JSON HTTP surface for both boards and the photo store.
//!
//! Publishers identify themselves with the `x-edit-token` header; the
//! browser keeps tokens in its own storage.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use handlers::EDIT_TOKEN_HEADER;
pub use state::{AdoptionBoard, AppState, Backends, PostBoard, StateError};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::{io, time::Duration};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(EDIT_TOKEN_HEADER)])
        .max_age(CORS_MAX_AGE);
    let upload_limit = DefaultBodyLimit::max(state.max_image_bytes.saturating_add(1));

    Router::new()
        .route(
            "/api/posts",
            get(handlers::posts::list_posts).post(handlers::posts::create_post),
        )
        .route("/api/posts/{id}", get(handlers::posts::get_post))
        .route(
            "/api/posts/{id}/resolve",
            post(handlers::posts::resolve_post),
        )
        .route(
            "/api/adoptions",
            get(handlers::adoptions::list_adoptions).post(handlers::adoptions::create_adoption),
        )
        .route("/api/adoptions/{id}", get(handlers::adoptions::get_adoption))
        .route("/api/adoptions/{id}/adopt", post(handlers::adoptions::adopt))
        .route(
            "/api/adoptions/{id}/report",
            post(handlers::adoptions::report),
        )
        .route(
            "/api/images",
            post(handlers::media::upload_image).layer(upload_limit),
        )
        .route("/media/{key}", get(handlers::media::get_media))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serves the application on `listener` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!(%address, "listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(err) => {
                error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
