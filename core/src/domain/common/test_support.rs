//! In-memory repositories for exercising `Service` without a database.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    authentication::{
        entities::AccessToken,
        ports::{AccessTokenRepository, MockTokenSigner},
        value_objects::Identity,
    },
    category::{
        entities::{Category, NewCategory},
        ports::CategoryRepository,
    },
    common::{
        entities::{
            app_errors::CoreError,
            pagination::{Page, PageRequest},
        },
        services::{ResourceFilters, Service},
    },
    crypto::ports::MockHasherRepository,
    filter::entities::Predicate,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    product::{
        entities::{NewProduct, Product},
        ports::ProductRepository,
    },
    user::{
        entities::{Role, User, UserCredentials},
        ports::UserRepository,
        value_objects::CreateUserRequest,
    },
};

#[derive(Default)]
struct Store {
    next_id: i64,
    users: Vec<UserCredentials>,
    tokens: Vec<AccessToken>,
    categories: Vec<Category>,
    products: Vec<Product>,
    category_predicates: Vec<Predicate>,
    product_predicates: Vec<Predicate>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn category_name(&self, category_id: i64) -> Option<String> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.name.clone())
    }

    fn insert_product(&mut self, product: NewProduct) -> Product {
        let now = Utc::now();
        let product = Product {
            id: self.next_id(),
            category_name: self.category_name(product.category_id),
            category_id: product.category_id,
            name: product.name,
            sku: product.sku,
            description: product.description,
            purchase_price: product.purchase_price,
            sale_price: product.sale_price,
            stock: product.stock,
            featured_image: product.featured_image,
            status: product.status,
            created_at: now,
            updated_at: now,
        };
        self.products.push(product.clone());
        product
    }

    fn insert_category(&mut self, category: NewCategory) -> Category {
        let now = Utc::now();
        let category = Category {
            id: self.next_id(),
            name: category.name,
            description: category.description,
            featured_image: category.featured_image,
            status: category.status,
            created_at: now,
            updated_at: now,
            products: None,
        };
        self.categories.push(category.clone());
        category
    }
}

#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Store>>);

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.0.lock().unwrap()
    }
}

fn paginate<T: Clone>(mut items: Vec<T>, page: PageRequest) -> Page<T> {
    // newest first: later inserts carry larger ids
    items.reverse();
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.per_page as usize)
        .collect();
    Page::new(items, page, total)
}

pub struct InMemoryUserRepository(Shared);

impl InMemoryUserRepository {
    pub fn insert(&self, user: User, password_hash: &str) {
        self.0.lock().users.push(UserCredentials {
            user,
            password_hash: password_hash.to_string(),
        });
    }

    pub fn credentials(&self, email: &str) -> Option<UserCredentials> {
        self.0
            .lock()
            .users
            .iter()
            .find(|credentials| credentials.user.email == email)
            .cloned()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let mut store = self.0.lock();
        if store.users.iter().any(|c| c.user.email == request.email) {
            return Err(CoreError::Validation(
                "The email has already been taken.".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: store.next_id(),
            name: request.name,
            email: request.email,
            role: request.role,
            created_at: now,
            updated_at: now,
        };
        store.users.push(UserCredentials {
            user: user.clone(),
            password_hash: request.password_hash,
        });
        Ok(user)
    }

    async fn get_by_id(&self, user_id: i64) -> Result<Option<User>, CoreError> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.user.clone()))
    }

    async fn get_credentials_by_email(
        &self,
        email: String,
    ) -> Result<Option<UserCredentials>, CoreError> {
        Ok(self.credentials(&email))
    }
}

pub struct InMemoryAccessTokenRepository(Shared);

impl InMemoryAccessTokenRepository {
    pub fn count_for(&self, user_id: i64) -> usize {
        self.0
            .lock()
            .tokens
            .iter()
            .filter(|token| token.user_id == user_id)
            .count()
    }
}

impl AccessTokenRepository for InMemoryAccessTokenRepository {
    async fn create(&self, token: AccessToken) -> Result<AccessToken, CoreError> {
        self.0.lock().tokens.push(token.clone());
        Ok(token)
    }

    async fn get_by_id(&self, token_id: Uuid) -> Result<Option<AccessToken>, CoreError> {
        Ok(self
            .0
            .lock()
            .tokens
            .iter()
            .find(|token| token.id == token_id)
            .cloned())
    }

    async fn revoke_all_for_user(&self, user_id: i64) -> Result<u64, CoreError> {
        let mut store = self.0.lock();
        let before = store.tokens.len();
        store.tokens.retain(|token| token.user_id != user_id);
        Ok((before - store.tokens.len()) as u64)
    }
}

pub struct InMemoryCategoryRepository(Shared);

impl InMemoryCategoryRepository {
    pub fn seed(&self, name: &str) -> i64 {
        self.0
            .lock()
            .insert_category(NewCategory {
                name: name.to_string(),
                description: None,
                featured_image: None,
                status: true,
            })
            .id
    }

    pub fn len(&self) -> usize {
        self.0.lock().categories.len()
    }

    pub fn last_predicates(&self) -> Vec<Predicate> {
        self.0.lock().category_predicates.clone()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    async fn fetch_categories(
        &self,
        predicates: Vec<Predicate>,
        page: PageRequest,
    ) -> Result<Page<Category>, CoreError> {
        let mut store = self.0.lock();
        store.category_predicates = predicates;
        Ok(paginate(store.categories.clone(), page))
    }

    async fn get_by_id(&self, category_id: i64) -> Result<Option<Category>, CoreError> {
        Ok(self
            .0
            .lock()
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned())
    }

    async fn create(&self, category: NewCategory) -> Result<Category, CoreError> {
        Ok(self.0.lock().insert_category(category))
    }

    async fn create_many(&self, categories: Vec<NewCategory>) -> Result<Vec<i64>, CoreError> {
        let mut store = self.0.lock();
        Ok(categories
            .into_iter()
            .map(|category| store.insert_category(category).id)
            .collect())
    }

    async fn update(&self, category: Category) -> Result<Category, CoreError> {
        let mut store = self.0.lock();
        let slot = store
            .categories
            .iter_mut()
            .find(|stored| stored.id == category.id)
            .ok_or(CoreError::NotFound)?;
        *slot = category.clone();
        Ok(category)
    }

    async fn delete(&self, category_id: i64) -> Result<(), CoreError> {
        let mut store = self.0.lock();
        if store.products.iter().any(|p| p.category_id == category_id) {
            return Err(CoreError::Conflict("category in use".to_string()));
        }
        store.categories.retain(|category| category.id != category_id);
        Ok(())
    }
}

pub struct InMemoryProductRepository(Shared);

impl InMemoryProductRepository {
    pub fn seed(&self, category_id: i64, name: &str) -> i64 {
        self.0
            .lock()
            .insert_product(NewProduct {
                category_id,
                name: name.to_string(),
                sku: Uuid::new_v4().simple().to_string()[..10].to_uppercase(),
                description: None,
                purchase_price: Decimal::new(1000, 2),
                sale_price: Decimal::new(2000, 2),
                stock: 4,
                featured_image: None,
                status: true,
            })
            .id
    }

    pub fn len(&self) -> usize {
        self.0.lock().products.len()
    }

    pub fn last_predicates(&self) -> Vec<Predicate> {
        self.0.lock().product_predicates.clone()
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn fetch_products(
        &self,
        predicates: Vec<Predicate>,
        page: PageRequest,
    ) -> Result<Page<Product>, CoreError> {
        let mut store = self.0.lock();
        store.product_predicates = predicates;
        Ok(paginate(store.products.clone(), page))
    }

    async fn fetch_by_categories(&self, category_ids: Vec<i64>) -> Result<Vec<Product>, CoreError> {
        Ok(self
            .0
            .lock()
            .products
            .iter()
            .filter(|product| category_ids.contains(&product.category_id))
            .cloned()
            .collect())
    }

    async fn count_by_category(&self, category_id: i64) -> Result<u64, CoreError> {
        Ok(self
            .0
            .lock()
            .products
            .iter()
            .filter(|product| product.category_id == category_id)
            .count() as u64)
    }

    async fn get_by_id(&self, product_id: i64) -> Result<Option<Product>, CoreError> {
        Ok(self
            .0
            .lock()
            .products
            .iter()
            .find(|product| product.id == product_id)
            .cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        Ok(self.0.lock().insert_product(product))
    }

    async fn create_many(&self, products: Vec<NewProduct>) -> Result<Vec<i64>, CoreError> {
        let mut store = self.0.lock();
        Ok(products
            .into_iter()
            .map(|product| store.insert_product(product).id)
            .collect())
    }

    async fn update(&self, product: Product) -> Result<Product, CoreError> {
        let mut store = self.0.lock();
        let category_name = store.category_name(product.category_id);
        let slot = store
            .products
            .iter_mut()
            .find(|stored| stored.id == product.id)
            .ok_or(CoreError::NotFound)?;
        *slot = Product {
            category_name,
            ..product
        };
        Ok(slot.clone())
    }

    async fn delete(&self, product_id: i64) -> Result<(), CoreError> {
        self.0
            .lock()
            .products
            .retain(|product| product.id != product_id);
        Ok(())
    }
}

pub struct InMemoryHealthCheckRepository;

impl HealthCheckRepository for InMemoryHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "up".to_string(),
            response_time_ms: 0,
        })
    }
}

pub type TestService = Service<
    InMemoryUserRepository,
    InMemoryAccessTokenRepository,
    InMemoryCategoryRepository,
    InMemoryProductRepository,
    MockHasherRepository,
    MockTokenSigner,
    InMemoryHealthCheckRepository,
>;

pub struct ServiceBuilder {
    hasher: MockHasherRepository,
    signer: MockTokenSigner,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self {
            hasher: MockHasherRepository::new(),
            signer: MockTokenSigner::new(),
        }
    }

    pub fn hasher(mut self, hasher: MockHasherRepository) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn signer(mut self, signer: MockTokenSigner) -> Self {
        self.signer = signer;
        self
    }

    pub fn build(self) -> TestService {
        let shared = Shared::default();

        Service::new(
            InMemoryUserRepository(shared.clone()),
            InMemoryAccessTokenRepository(shared.clone()),
            InMemoryCategoryRepository(shared.clone()),
            InMemoryProductRepository(shared),
            self.hasher,
            self.signer,
            InMemoryHealthCheckRepository,
            ResourceFilters::load().unwrap(),
            Duration::minutes(60),
        )
    }
}

fn identity(id: i64, role: Role) -> Identity {
    let now = Utc::now();
    Identity {
        user: User {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            role,
            created_at: now,
            updated_at: now,
        },
        token_id: Uuid::new_v4(),
    }
}

pub fn admin_identity() -> Identity {
    identity(1000, Role::Admin)
}

pub fn user_identity() -> Identity {
    identity(2000, Role::User)
}
