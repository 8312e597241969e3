//! Store construction and seed data.

use chrono::TimeZone;
use chrono::Utc;

use shopdesk_catalog::{CategoryDraft, CategoryStore, ProductDraft, ProductStore};
use shopdesk_directory::{EmployeeDraft, EmployeeStore, UserDraft, UserStore};

/// The four in-memory stores behind the HTTP surface.
pub struct AppServices {
    pub categories: CategoryStore,
    pub products: ProductStore,
    pub employees: EmployeeStore,
    pub users: UserStore,
}

/// Build freshly seeded stores.
///
/// The seed rows mirror the demo dataset the service has always shipped with:
/// an Electronics/Smartphones category pair, one sample product, one employee,
/// and the admin user.
pub fn build_services() -> AppServices {
    let services = AppServices {
        categories: CategoryStore::new(),
        products: ProductStore::new(),
        employees: EmployeeStore::new(),
        users: UserStore::new(),
    };
    seed(&services);
    services
}

fn seed(services: &AppServices) {
    let categories = [
        CategoryDraft {
            name: "Electronics".to_string(),
            description: "Electronic devices and accessories".to_string(),
            is_active: true,
            parent_category_name: None,
            image_url: None,
        },
        CategoryDraft {
            name: "Smartphones".to_string(),
            description: "Mobile phones and accessories".to_string(),
            is_active: true,
            parent_category_name: Some("Electronics".to_string()),
            image_url: None,
        },
    ];
    for draft in categories {
        if let Err(err) = services.categories.create(draft) {
            tracing::warn!(%err, "skipping category seed row");
        }
    }

    if let Err(err) = services.products.create(ProductDraft {
        name: "Sample Product".to_string(),
        description: "This is a sample product".to_string(),
        price: 29.99,
        stock_quantity: 100,
        category: "Electronics".to_string(),
        is_available: true,
    }) {
        tracing::warn!(%err, "skipping product seed row");
    }

    if let Err(err) = services.employees.create(EmployeeDraft {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        department: "IT".to_string(),
        salary: 75_000.0,
        hire_date: Utc
            .with_ymd_and_hms(2022, 1, 15, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }) {
        tracing::warn!(%err, "skipping employee seed row");
    }

    if let Err(err) = services.users.create(UserDraft {
        username: "admin".to_string(),
        password: "admin123".to_string(),
        email: "admin@example.com".to_string(),
        full_name: "System Administrator".to_string(),
        is_active: true,
    }) {
        tracing::warn!(%err, "skipping user seed row");
    }
}
