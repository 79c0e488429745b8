//! Product/customer service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use salesdesk::domain::{NewProduct, Product, ProductPatch, Role, Session, User};
use salesdesk::errors::AppError;
use salesdesk::infra::store::DocId;
use salesdesk::infra::{
    CustomerRepository, MockCustomerRepository, MockProductRepository, MockSaleRepository,
    MockUserRepository, ProductRepository, Repositories, SaleRepository, UserRepository,
};
use salesdesk::services::{ProductManager, ProductService};

struct TestRepos {
    users: Arc<MockUserRepository>,
    products: Arc<MockProductRepository>,
    customers: Arc<MockCustomerRepository>,
    sales: Arc<MockSaleRepository>,
}

impl TestRepos {
    fn with_products(products: MockProductRepository) -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            products: Arc::new(products),
            customers: Arc::new(MockCustomerRepository::new()),
            sales: Arc::new(MockSaleRepository::new()),
        }
    }
}

impl Repositories for TestRepos {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn customers(&self) -> Arc<dyn CustomerRepository> {
        self.customers.clone()
    }

    fn sales(&self) -> Arc<dyn SaleRepository> {
        self.sales.clone()
    }
}

fn session() -> Session {
    Session::new(User {
        id: DocId::new(),
        name: "Amit".into(),
        username: "amit".into(),
        password_hash: "hash".into(),
        role: Role::User,
    })
}

fn new_product() -> NewProduct {
    NewProduct {
        name: "T-Shirt".into(),
        sku: "TSH-001".into(),
        price: 299.0,
        stock: 100,
        description: "Cotton T-Shirt".into(),
    }
}

#[tokio::test]
async fn test_create_product() {
    let mut products = MockProductRepository::new();
    products.expect_insert().returning(|new| {
        Ok(Product {
            id: DocId::new(),
            name: new.name,
            sku: new.sku,
            price: new.price,
            stock: new.stock,
            description: new.description,
        })
    });

    let service = ProductManager::new(Arc::new(TestRepos::with_products(products)));
    let product = service.create(&session(), new_product()).await.unwrap();

    assert_eq!(product.sku, "TSH-001");
    assert_eq!(product.stock, 100);
}

#[tokio::test]
async fn test_create_product_validation_precedes_write() {
    let mut products = MockProductRepository::new();
    products.expect_insert().times(0);

    let service = ProductManager::new(Arc::new(TestRepos::with_products(products)));
    let mut missing_name = new_product();
    missing_name.name.clear();

    let result = service.create(&session(), missing_name).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_get_malformed_id_is_invalid_input() {
    let mut products = MockProductRepository::new();
    products.expect_find().times(0);

    let service = ProductManager::new(Arc::new(TestRepos::with_products(products)));
    let result = service.get(&session(), "not-an-id").await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let id = DocId::new();

    let mut products = MockProductRepository::new();
    products
        .expect_update()
        .with(eq(id), mockall::predicate::always())
        .returning(|_, _| Err(AppError::NotFound));

    let service = ProductManager::new(Arc::new(TestRepos::with_products(products)));
    let patch = ProductPatch {
        price: Some(199.0),
        ..Default::default()
    };
    let result = service.update(&session(), &id.to_string(), patch).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_rejects_negative_price_before_write() {
    let mut products = MockProductRepository::new();
    products.expect_update().times(0);

    let service = ProductManager::new(Arc::new(TestRepos::with_products(products)));
    let patch = ProductPatch {
        price: Some(-1.0),
        ..Default::default()
    };
    let result = service
        .update(&session(), &DocId::new().to_string(), patch)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_delete_missing_product_is_noop() {
    let mut products = MockProductRepository::new();
    products.expect_delete().returning(|_| Ok(()));

    let service = ProductManager::new(Arc::new(TestRepos::with_products(products)));
    let result = service.delete(&session(), &DocId::new().to_string()).await;

    assert!(result.is_ok());
}
