//! End-to-end tests over the in-memory document store.
//!
//! Each test builds its own gateway so state never leaks between
//! tests, seeds an admin through the repository layer, and drives
//! the full service stack the way the UI layer would.

use std::sync::Arc;

use chrono::{Duration, Utc};

use salesdesk::config::StoreConfig;
use salesdesk::domain::{
    CreateUser, CustomerPatch, NewCustomer, NewProduct, Password, ProductPatch, Role, SaleDraft,
    Session,
};
use salesdesk::errors::AppError;
use salesdesk::infra::store::Gateway;
use salesdesk::infra::{Persistence, Repositories};
use salesdesk::services::{ServiceContainer, Services, SessionState};

struct Harness {
    repos: Arc<Persistence>,
    services: Services,
}

impl Harness {
    fn new() -> Self {
        let gateway = Gateway::connect(&StoreConfig::default());
        Self {
            repos: Arc::new(Persistence::new(gateway.clone())),
            services: Services::from_gateway(gateway),
        }
    }

    /// Seed a user through the repository layer and return a live
    /// session for them.
    async fn seeded_session(&self, username: &str, role: Role) -> Session {
        let hash = Password::new("secret-pass").unwrap().into_string();
        let user = self
            .repos
            .users()
            .create("Seeded".into(), username.into(), hash, role)
            .await
            .unwrap();
        Session::new(user)
    }
}

#[tokio::test]
async fn test_record_sale_totals_and_decrements_stock() {
    let h = Harness::new();
    let session = h.seeded_session("amit", Role::User).await;

    let product = h
        .services
        .products()
        .create(
            &session,
            NewProduct {
                name: "T-Shirt".into(),
                sku: "TSH-001".into(),
                price: 299.0,
                stock: 100,
                description: String::new(),
            },
        )
        .await
        .unwrap();
    let customer = h
        .services
        .customers()
        .create(
            &session,
            NewCustomer {
                name: "Amit".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let receipt = h
        .services
        .sales()
        .record_sale(
            &session,
            SaleDraft {
                product_id: product.id,
                customer_id: customer.id,
                quantity: 2,
                unit_price: 299.0,
                date: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(receipt.total, 598.0);
    assert!(receipt.stock_adjusted);
    assert!(receipt.stock_error.is_none());

    let reloaded = h
        .services
        .products()
        .get(&session, &product.id.to_string())
        .await
        .unwrap();
    assert_eq!(reloaded.stock, 98);

    let sales = h.services.sales().list_sales(&session).await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].product_name, "T-Shirt");
    assert_eq!(sales[0].customer_name, "Amit");
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields_untouched() {
    let h = Harness::new();
    let session = h.seeded_session("amit", Role::User).await;

    let product = h
        .services
        .products()
        .create(
            &session,
            NewProduct {
                name: "Mug".into(),
                sku: "MUG-001".into(),
                price: 99.0,
                stock: 10,
                description: "Ceramic".into(),
            },
        )
        .await
        .unwrap();

    let updated = h
        .services
        .products()
        .update(
            &session,
            &product.id.to_string(),
            ProductPatch {
                price: Some(79.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 79.0);
    assert_eq!(updated.sku, "MUG-001");
    assert_eq!(updated.stock, 10);
    assert_eq!(updated.description, "Ceramic");
}

#[tokio::test]
async fn test_delete_is_idempotent_and_update_after_delete_fails() {
    let h = Harness::new();
    let session = h.seeded_session("amit", Role::User).await;

    let customer = h
        .services
        .customers()
        .create(
            &session,
            NewCustomer {
                name: "Priya".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let id = customer.id.to_string();

    h.services
        .customers()
        .delete(&session, &id)
        .await
        .unwrap();
    // second delete of the same id is a silent no-op
    h.services
        .customers()
        .delete(&session, &id)
        .await
        .unwrap();

    let result = h
        .services
        .customers()
        .update(
            &session,
            &id,
            CustomerPatch {
                name: Some("Priya K".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_deleted_customer_keeps_old_sales_but_blocks_new_ones() {
    let h = Harness::new();
    let session = h.seeded_session("amit", Role::User).await;

    let product = h
        .services
        .products()
        .create(
            &session,
            NewProduct {
                name: "Cap".into(),
                sku: "CAP-001".into(),
                price: 150.0,
                stock: 5,
                description: String::new(),
            },
        )
        .await
        .unwrap();
    let customer = h
        .services
        .customers()
        .create(
            &session,
            NewCustomer {
                name: "Ravi".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let draft = SaleDraft {
        product_id: product.id,
        customer_id: customer.id,
        quantity: 1,
        unit_price: 150.0,
        date: None,
    };
    h.services
        .sales()
        .record_sale(&session, draft.clone())
        .await
        .unwrap();

    h.services
        .customers()
        .delete(&session, &customer.id.to_string())
        .await
        .unwrap();

    // the recorded sale keeps its dangling reference and name snapshot
    let sales = h.services.sales().list_sales(&session).await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].customer_id, customer.id);
    assert_eq!(sales[0].customer_name, "Ravi");

    // but a new sale against the deleted customer is rejected
    let result = h.services.sales().record_sale(&session, draft).await;
    assert!(matches!(result, Err(AppError::InvalidReference(_))));
}

#[tokio::test]
async fn test_rename_does_not_rewrite_sale_snapshots() {
    let h = Harness::new();
    let session = h.seeded_session("amit", Role::User).await;

    let product = h
        .services
        .products()
        .create(
            &session,
            NewProduct {
                name: "Notebook".into(),
                sku: "NTB-001".into(),
                price: 45.0,
                stock: 20,
                description: String::new(),
            },
        )
        .await
        .unwrap();
    let customer = h
        .services
        .customers()
        .create(
            &session,
            NewCustomer {
                name: "Sara".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    h.services
        .sales()
        .record_sale(
            &session,
            SaleDraft {
                product_id: product.id,
                customer_id: customer.id,
                quantity: 3,
                unit_price: 45.0,
                date: None,
            },
        )
        .await
        .unwrap();

    h.services
        .products()
        .update(
            &session,
            &product.id.to_string(),
            ProductPatch {
                name: Some("Notebook A5".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let sales = h.services.sales().list_sales(&session).await.unwrap();
    assert_eq!(sales[0].product_name, "Notebook");
}

#[tokio::test]
async fn test_duplicate_username_leaves_user_count_unchanged() {
    let h = Harness::new();
    let admin = h.seeded_session("root", Role::Admin).await;

    h.services
        .auth()
        .create_user(
            &admin,
            CreateUser {
                name: "Amit".into(),
                username: "amit".into(),
                password: "secret-pass".into(),
                role: Role::User,
            },
        )
        .await
        .unwrap();
    let count_before = h.repos.users().count().await.unwrap();

    let result = h
        .services
        .auth()
        .create_user(
            &admin,
            CreateUser {
                name: "Another Amit".into(),
                username: "amit".into(),
                password: "secret-pass".into(),
                role: Role::User,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DuplicateUsername(_))));
    assert_eq!(h.repos.users().count().await.unwrap(), count_before);
}

#[tokio::test]
async fn test_login_round_trip_and_role_gate() {
    let h = Harness::new();
    let admin = h.seeded_session("root", Role::Admin).await;

    h.services
        .auth()
        .create_user(
            &admin,
            CreateUser {
                name: "Amit".into(),
                username: "amit".into(),
                password: "secret-pass".into(),
                role: Role::User,
            },
        )
        .await
        .unwrap();

    let mut state = SessionState::new();

    // claiming the wrong role fails even with the right password
    let wrong_role = state
        .login(h.services.auth().as_ref(), "amit", "secret-pass", Role::Admin)
        .await;
    assert!(matches!(wrong_role, Err(AppError::RoleMismatch { .. })));
    assert!(state.current().is_none());

    let session = state
        .login(h.services.auth().as_ref(), "amit", "secret-pass", Role::User)
        .await
        .unwrap();
    assert_eq!(session.user().username, "amit");

    state.logout();
    assert!(state.current().is_none());
}

#[tokio::test]
async fn test_non_admin_cannot_manage_users() {
    let h = Harness::new();
    let session = h.seeded_session("amit", Role::User).await;

    let result = h
        .services
        .auth()
        .create_user(
            &session,
            CreateUser {
                name: "Eve".into(),
                username: "eve".into(),
                password: "secret-pass".into(),
                role: Role::Admin,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Forbidden)));
    assert!(h.services.auth().list_users(&session).await.is_err());
}

#[tokio::test]
async fn test_dashboard_and_grouped_reports() {
    let h = Harness::new();
    let session = h.seeded_session("amit", Role::User).await;

    let shirt = h
        .services
        .products()
        .create(
            &session,
            NewProduct {
                name: "T-Shirt".into(),
                sku: "TSH-001".into(),
                price: 299.0,
                stock: 100,
                description: String::new(),
            },
        )
        .await
        .unwrap();
    let mug = h
        .services
        .products()
        .create(
            &session,
            NewProduct {
                name: "Mug".into(),
                sku: "MUG-001".into(),
                price: 99.0,
                stock: 50,
                description: String::new(),
            },
        )
        .await
        .unwrap();
    let customer = h
        .services
        .customers()
        .create(
            &session,
            NewCustomer {
                name: "Amit".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let now = Utc::now();
    for (product_id, price, qty, age) in [
        (shirt.id, 299.0, 2, Duration::hours(2)),
        (mug.id, 99.0, 1, Duration::hours(1)),
        (shirt.id, 299.0, 1, Duration::zero()),
    ] {
        h.services
            .sales()
            .record_sale(
                &session,
                SaleDraft {
                    product_id,
                    customer_id: customer.id,
                    quantity: qty,
                    unit_price: price,
                    date: Some(now - age),
                },
            )
            .await
            .unwrap();
    }

    let reports = h.services.reports();

    let total = reports.total_sales(&session).await.unwrap();
    assert_eq!(total, 996.0);

    // grouped by snapshot name, sorted by total descending
    let by_product = reports.sales_by_product(&session).await.unwrap();
    assert_eq!(
        by_product,
        vec![("T-Shirt".to_string(), 897.0), ("Mug".to_string(), 99.0)]
    );

    let by_customer = reports.sales_by_customer(&session).await.unwrap();
    assert_eq!(by_customer, vec![("Amit".to_string(), 996.0)]);

    // newest first, capped at n
    let recent = reports.recent_sales(&session, 2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].product_name, "T-Shirt");
    assert_eq!(recent[0].quantity, 1);
    assert_eq!(recent[1].product_name, "Mug");

    let dashboard = reports.dashboard(&session).await.unwrap();
    assert_eq!(dashboard.product_count, 2);
    assert_eq!(dashboard.customer_count, 1);
    assert_eq!(dashboard.total_sales, 996.0);
}
