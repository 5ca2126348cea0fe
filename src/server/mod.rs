//! HTTP server for gpic.
//!
//! Routes:
//!
//! - `GET /` redirects to the review page
//! - `GET /similar` lists the images in the root folder
//! - `GET /compare-similar?<file>=&...` shows the named images side by side
//! - `POST /delete-similar` quarantines the rejected candidates of a group
//! - `GET /static/<file>` serves files from the root folder
//! - `GET /assets/<name>` serves the bundled stylesheet and script
//!
//! Request state is immutable and shared; the only mutable resource is the
//! filesystem under the root folder, which is not locked.

mod assets;
pub mod bind;
mod handlers;


use crate::context::FolderContext;
use crate::error::{GpicError, Result};
use crate::render::Pages;
use crate::scan::ImageMatcher;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use bind::{bind_with_fallback, public_url};

/// Shared, read-only state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub folder: Arc<FolderContext>,
    pub matcher: Arc<ImageMatcher>,
    pub pages: Arc<Pages>,
    pub recursive: bool,
}

impl AppState {
    pub fn new(folder: FolderContext, matcher: ImageMatcher, pages: Pages, recursive: bool) -> Self {
        Self {
            folder: Arc::new(folder),
            matcher: Arc::new(matcher),
            pages: Arc::new(pages),
            recursive,
        }
    }
}

/// Build the router for `state`.
pub fn router(state: AppState) -> Router {
    let thumbnails = ServeDir::new(&state.folder.root);

    Router::new()
        .route("/", get(handlers::index))
        .route("/similar", get(handlers::review))
        .route("/compare-similar", get(handlers::compare))
        .route("/delete-similar", post(handlers::delete))
        .route("/assets/:name", get(assets::asset))
        .nest_service("/static", thumbnails)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve requests on `listener` until the server stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| GpicError::ServerError(format!("server stopped: {}", e)))
}
