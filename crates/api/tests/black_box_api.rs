use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port. Each spawn gets its
        // own freshly seeded stores, so tests are isolated.
        let app = shopdesk_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn category_create_returns_location_and_body() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/categories", srv.base_url))
        .json(&json!({ "name": "Laptops", "parent_category_name": "Electronics" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let body: serde_json::Value = res.json().await.unwrap();
    // Seed data occupies ids 1 and 2.
    assert_eq!(body["id"], 3);
    assert_eq!(location, "/api/categories/3");
    assert_eq!(body["parent_category_name"], "Electronics");

    let res = client
        .get(format!("{}{}", srv.base_url, location))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_category_name_is_rejected_case_insensitively() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/categories", srv.base_url))
        .json(&json!({ "name": "ELECTRONICS" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn unknown_parent_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/categories", srv.base_url))
        .json(&json!({ "name": "Orphan", "parent_category_name": "Nope" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_reference");
}

#[tokio::test]
async fn reparenting_under_a_descendant_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Electronics (id 1) is the seeded parent of Smartphones; re-parenting it
    // under its own child must fail with a cyclic_reference reason.
    let res = client
        .put(format!("{}/api/categories/1", srv.base_url))
        .json(&json!({ "name": "Electronics", "parent_category_name": "Smartphones" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "cyclic_reference");
}

#[tokio::test]
async fn toggle_status_respects_active_children() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Electronics has the active child Smartphones: deactivation is blocked.
    let res = client
        .patch(format!("{}/api/categories/1/toggle-status", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Deactivate the child first, then the parent.
    let res = client
        .patch(format!("{}/api/categories/2/toggle-status", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .patch(format!("{}/api/categories/1/toggle-status", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let body: serde_json::Value = client
        .get(format!("{}/api/categories/1", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["is_active"], false);
}

#[tokio::test]
async fn delete_is_gated_by_children_and_products() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Electronics has a child: 400.
    let res = client
        .delete(format!("{}/api/categories/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // A childless category with an associated product: still 400.
    let created: serde_json::Value = client
        .post(format!("{}/api/categories", srv.base_url))
        .json(&json!({ "name": "Books" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let category_id = created["id"].as_u64().unwrap();

    let product: serde_json::Value = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({ "name": "Paperback", "price": 9.99, "category": "books" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let product_id = product["id"].as_u64().unwrap();

    let res = client
        .delete(format!("{}/api/categories/{}", srv.base_url, category_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "precondition_failed");

    // Remove the product; the category becomes deletable.
    let res = client
        .delete(format!("{}/api/products/{}", srv.base_url, product_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .delete(format!("{}/api/categories/{}", srv.base_url, category_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/api/categories/{}", srv.base_url, category_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_filter_endpoints() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let roots: serde_json::Value = client
        .get(format!("{}/api/categories/root", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let root_names: Vec<_> = roots
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(root_names, vec!["Electronics"]);

    // Parent lookup is case-insensitive.
    let children: serde_json::Value = client
        .get(format!("{}/api/categories/parent/electronics", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(children.as_array().unwrap().len(), 1);
    assert_eq!(children[0]["name"], "Smartphones");

    let hits: serde_json::Value = client
        .get(format!("{}/api/categories/search?name=phone", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "Smartphones");
}

#[tokio::test]
async fn login_checks_credentials() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users/login", srv.base_url))
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["username"], "admin");

    let res = client
        .post(format!("{}/api/users/login", srv.base_url))
        .json(&json!({ "username": "admin", "password": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users", srv.base_url))
        .json(&json!({ "username": "admin", "password": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn available_products_require_flag_and_stock() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Seeded sample product: available, 100 in stock.
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({
            "name": "Display Unit",
            "price": 1.0,
            "category": "Electronics",
            "is_available": false,
            "stock_quantity": 5
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: serde_json::Value = client
        .get(format!("{}/api/products/available", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Sample Product"]);
}

#[tokio::test]
async fn employee_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/employees", srv.base_url))
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Roe",
            "email": "jane.roe@example.com",
            "department": "Sales",
            "salary": 64000.0,
            "hire_date": "2023-06-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["id"].as_u64().unwrap();
    assert_eq!(id, 2); // after the seeded employee

    let res = client
        .put(format!("{}/api/employees/{}", srv.base_url, id))
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Roe",
            "department": "Marketing",
            "hire_date": "2023-06-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .delete(format!("{}/api/employees/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/api/employees/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_ids_return_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for path in [
        "/api/categories/999",
        "/api/products/999",
        "/api/employees/999",
        "/api/users/999",
    ] {
        let res = client
            .get(format!("{}{}", srv.base_url, path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {path}");
    }

    let res = client
        .put(format!("{}/api/categories/999", srv.base_url))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
