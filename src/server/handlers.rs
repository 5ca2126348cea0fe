//! Request handlers.

use super::AppState;
use crate::error::{GpicError, Result};
use crate::relocate::relocate_rejected;
use crate::render::review_location;
use crate::scan::scan_images;
use crate::survivors::resolve;
use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use std::collections::BTreeSet;
use tokio::task;
use tracing::info;

pub async fn index() -> Redirect {
    Redirect::permanent("/similar")
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Page not found.")
}

/// Review page: every image in the root folder.
pub async fn review(State(state): State<AppState>) -> Result<Html<String>> {
    let folder = state.folder.clone();
    let matcher = state.matcher.clone();
    let recursive = state.recursive;

    let pictures = task::spawn_blocking(move || scan_images(&folder, &matcher, recursive))
        .await
        .map_err(|e| GpicError::ServerError(format!("scan task failed: {}", e)))??;

    let html = state.pages.render_review(&state.folder.root, &pictures)?;
    Ok(Html(html))
}

/// Comparison page: the distinct query keys, sorted, in a fixed-size grid.
pub async fn compare(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>> {
    let pictures: Vec<String> = params
        .into_iter()
        .map(|(name, _)| name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let html = state.pages.render_compare(&pictures)?;
    Ok(Html(html))
}

/// Quarantine the rejected candidates of a group, then return to the review page.
pub async fn delete(
    State(state): State<AppState>,
    form: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Redirect> {
    let Form(fields) = form.map_err(|e| GpicError::FormError(e.body_text()))?;

    let resolution = resolve(&fields);
    info!(
        "delete request: {} candidate(s), kept={:?}",
        resolution.candidates.len(),
        resolution.kept
    );

    let folder = state.folder.clone();
    let kept = resolution.kept.clone();
    let report = task::spawn_blocking(move || relocate_rejected(&folder, &resolution))
        .await
        .map_err(|e| GpicError::ServerError(format!("relocation task failed: {}", e)))??;
    info!(
        "quarantined {} image(s), kept {} survivor(s) in place",
        report.moved.len(),
        report.skipped.len()
    );

    Ok(Redirect::to(&review_location(kept.as_deref())))
}
