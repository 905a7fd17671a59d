pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/movies", get(routes::catalog))
        .route(
            "/api/movies",
            get(routes::list_movies)
                .post(routes::create_movie)
                .fallback(routes::collection_method_not_allowed),
        )
        .route("/api/movies/", any(routes::missing_movie_id))
        .route(
            "/api/movies/{id}",
            get(routes::get_movie)
                .put(routes::update_movie)
                .delete(routes::delete_movie)
                .fallback(routes::item_method_not_allowed),
        )
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
