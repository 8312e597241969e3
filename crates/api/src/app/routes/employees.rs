use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, put},
    Json, Router,
};

use shopdesk_core::EntityId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/:id", get(get_employee))
        .route("/:id", put(update_employee))
        .route("/:id", delete(delete_employee))
}

pub async fn list_employees(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.employees.list())).into_response()
}

pub async fn get_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<EntityId>,
) -> axum::response::Response {
    match services.employees.get(id) {
        Some(employee) => (StatusCode::OK, Json(employee)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "employee not found"),
    }
}

pub async fn create_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::EmployeeRequest>,
) -> axum::response::Response {
    match services.employees.create(body.into()) {
        Ok(employee) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/employees/{}", employee.id))],
            Json(employee),
        )
            .into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<EntityId>,
    Json(body): Json<dto::EmployeeRequest>,
) -> axum::response::Response {
    match services.employees.update(id, body.into()) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<EntityId>,
) -> axum::response::Response {
    match services.employees.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
