use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, patch, put},
    Json, Router,
};

use shopdesk_core::EntityId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/active", get(active_categories))
        .route("/root", get(root_categories))
        .route("/search", get(search_categories))
        .route("/parent/:name", get(categories_by_parent))
        .route("/:id", get(get_category))
        .route("/:id", put(update_category))
        .route("/:id", delete(delete_category))
        .route("/:id/toggle-status", patch(toggle_status))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.categories.list())).into_response()
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<EntityId>,
) -> axum::response::Response {
    match services.categories.get(id) {
        Some(category) => (StatusCode::OK, Json(category)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "category not found"),
    }
}

pub async fn active_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.categories.active())).into_response()
}

pub async fn root_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.categories.roots())).into_response()
}

pub async fn categories_by_parent(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.categories.children_of(&name))).into_response()
}

pub async fn search_categories(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.categories.search(&params.name))).into_response()
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CategoryRequest>,
) -> axum::response::Response {
    match services.categories.create(body.into()) {
        Ok(category) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/categories/{}", category.id))],
            Json(category),
        )
            .into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<EntityId>,
    Json(body): Json<dto::CategoryRequest>,
) -> axum::response::Response {
    match services.categories.update(id, body.into()) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<EntityId>,
) -> axum::response::Response {
    match services.categories.delete(id, &services.products) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn toggle_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<EntityId>,
) -> axum::response::Response {
    match services.categories.toggle_active(id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
