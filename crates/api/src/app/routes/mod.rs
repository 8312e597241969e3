use axum::Router;

pub mod categories;
pub mod employees;
pub mod products;
pub mod system;
pub mod users;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/employees", employees::router())
        .nest("/users", users::router())
}
