use chrono::{DateTime, Utc};
use serde::Deserialize;

use shopdesk_catalog::{CategoryDraft, ProductDraft};
use shopdesk_directory::{EmployeeDraft, UserDraft};

fn default_true() -> bool {
    true
}

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub parent_category_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<CategoryRequest> for CategoryDraft {
    fn from(req: CategoryRequest) -> Self {
        CategoryDraft {
            name: req.name,
            description: req.description,
            is_active: req.is_active,
            parent_category_name: req.parent_category_name,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: i64,
    pub category: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        ProductDraft {
            name: req.name,
            description: req.description,
            price: req.price,
            stock_quantity: req.stock_quantity,
            category: req.category,
            is_available: req.is_available,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeDraft {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            department: req.department,
            salary: req.salary,
            hire_date: req.hire_date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<UserRequest> for UserDraft {
    fn from(req: UserRequest) -> Self {
        UserDraft {
            username: req.username,
            password: req.password,
            email: req.email,
            full_name: req.full_name,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}
