use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, WithRejection};
use serde::Deserialize;
use serde_json::json;

use crate::{
    AppState, auth,
    error::{AppError, AppResult},
    models::{Movie, MoviePayload, current_year, filter_movies},
    templates,
};

pub async fn index() -> Redirect {
    Redirect::to("/movies")
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    q: Option<String>,
}

/// Server-rendered catalog page. A store failure degrades to an empty list
/// so the page still renders.
pub async fn catalog(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    let movies = match state.store.list().await {
        Ok(movies) => movies,
        Err(err) => {
            tracing::error!(error = %err, "listing movies for catalog page");
            Vec::new()
        }
    };

    let principal = auth::current_principal(&state.config, &headers, &jar);
    let q = query.q.unwrap_or_default();
    let shown: Vec<Movie> = filter_movies(&movies, &q).into_iter().cloned().collect();

    Html(templates::catalog_page(&shown, auth::is_admin(principal.as_ref()), &q))
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.list().await?))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<MoviePayload>, AppError>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let new = payload.validate(current_year())?;
    let movie = state.store.insert(new).await?;
    tracing::debug!(id = %movie.id, title = %movie.title, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie not found"))?;
    Ok(Json(movie))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<MoviePayload>, AppError>,
) -> AppResult<Json<Movie>> {
    let principal = auth::current_principal(&state.config, &headers, &jar);
    if !auth::is_admin(principal.as_ref()) {
        return Err(AppError::Unauthorized);
    }

    let new = payload.validate(current_year())?;

    // Existence pre-check so a bad id reads as 404 rather than a bare
    // update failure.
    if state.store.get(&id).await?.is_none() {
        return Err(AppError::not_found("Movie not found"));
    }

    let movie = state.store.update(&id, new).await?;
    tracing::debug!(id = %movie.id, "movie updated");
    Ok(Json(movie))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let principal = auth::current_principal(&state.config, &headers, &jar);
    if !auth::is_admin(principal.as_ref()) {
        return Err(AppError::Unauthorized);
    }

    if state.store.get(&id).await?.is_none() {
        return Err(AppError::not_found("Movie not found"));
    }

    state.store.delete(&id).await?;
    tracing::debug!(id = %id, "movie deleted");
    Ok(Json(json!({ "message": "Movie deleted successfully" })))
}

/// `/api/movies/` with nothing after the slash.
pub async fn missing_movie_id() -> AppError {
    AppError::validation("Movie ID is required")
}

pub async fn collection_method_not_allowed() -> Response {
    method_not_allowed("GET, POST")
}

pub async fn item_method_not_allowed() -> Response {
    method_not_allowed("GET, PUT, DELETE")
}

fn method_not_allowed(allow: &'static str) -> Response {
    let mut resp = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method not allowed" })),
    )
        .into_response();
    resp.headers_mut().insert(header::ALLOW, HeaderValue::from_static(allow));
    resp
}
