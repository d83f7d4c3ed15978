use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};
use tracing::{debug, error};

use crate::domain::{
    common::entities::{
        app_errors::CoreError,
        pagination::{Page, PageRequest},
    },
    filter::entities::Predicate,
    product::{
        entities::{NewProduct, Product},
        ports::ProductRepository,
    },
};
use crate::entity::{
    categories::Entity as CategoryEntity,
    products::{ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as ProductEntity},
};
use crate::infrastructure::filter::query_builder::build_condition;

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn category_name(&self, category_id: i64) -> Result<Option<String>, CoreError> {
        let category = CategoryEntity::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load product category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(category.map(|category| category.name))
    }
}

fn insert_model(product: NewProduct) -> ProductActiveModel {
    let now = Utc::now().naive_utc();

    ProductActiveModel {
        category_id: Set(product.category_id),
        name: Set(product.name),
        sku: Set(product.sku),
        description: Set(product.description),
        purchase_price: Set(product.purchase_price),
        sale_price: Set(product.sale_price),
        stock: Set(product.stock),
        featured_image: Set(product.featured_image),
        status: Set(product.status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn write_error(action: &str, e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CoreError::Conflict("A product with this SKU already exists.".to_string())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            CoreError::Validation("The selected category id is invalid.".to_string())
        }
        _ => {
            error!("Failed to {} product: {}", action, e);
            CoreError::InternalServerError
        }
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn fetch_products(
        &self,
        predicates: Vec<Predicate>,
        page: PageRequest,
    ) -> Result<Page<Product>, CoreError> {
        let paginator = ProductEntity::find()
            .filter(build_condition::<ProductEntity>(&predicates)?)
            .find_also_related(CategoryEntity)
            .order_by_desc(ProductColumn::CreatedAt)
            .order_by_desc(ProductColumn::Id)
            .paginate(&self.db, page.per_page);

        let total = paginator.num_items().await.map_err(|e| {
            error!("Failed to count products: {}", e);
            CoreError::InternalServerError
        })?;

        let rows = paginator.fetch_page(page.page - 1).await.map_err(|e| {
            error!("Failed to list products: {}", e);
            CoreError::InternalServerError
        })?;

        debug!(total, returned = rows.len(), "products fetched");

        Ok(Page::new(
            rows.into_iter().map(Product::from).collect(),
            page,
            total,
        ))
    }

    async fn fetch_by_categories(&self, category_ids: Vec<i64>) -> Result<Vec<Product>, CoreError> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ProductEntity::find()
            .filter(ProductColumn::CategoryId.is_in(category_ids))
            .find_also_related(CategoryEntity)
            .order_by_desc(ProductColumn::CreatedAt)
            .order_by_desc(ProductColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list products by category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn count_by_category(&self, category_id: i64) -> Result<u64, CoreError> {
        ProductEntity::find()
            .filter(ProductColumn::CategoryId.eq(category_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count products of category: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_id(&self, product_id: i64) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find_by_id(product_id)
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        let created = ProductEntity::insert(insert_model(product))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| write_error("create", e))?;

        let mut product = Product::from(created);
        product.category_name = self.category_name(product.category_id).await?;
        Ok(product)
    }

    async fn create_many(&self, products: Vec<NewProduct>) -> Result<Vec<i64>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let mut ids = Vec::with_capacity(products.len());
        for product in products {
            let created = ProductEntity::insert(insert_model(product))
                .exec_with_returning(&txn)
                .await
                .map_err(|e| write_error("bulk create", e))?;
            ids.push(created.id);
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit bulk product insert: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ids)
    }

    async fn update(&self, product: Product) -> Result<Product, CoreError> {
        let updated = ProductEntity::update(ProductActiveModel {
            id: Set(product.id),
            category_id: Set(product.category_id),
            name: Set(product.name),
            sku: Set(product.sku),
            description: Set(product.description),
            purchase_price: Set(product.purchase_price),
            sale_price: Set(product.sale_price),
            stock: Set(product.stock),
            featured_image: Set(product.featured_image),
            status: Set(product.status),
            created_at: Set(product.created_at.naive_utc()),
            updated_at: Set(product.updated_at.naive_utc()),
        })
        .filter(ProductColumn::Id.eq(product.id))
        .exec(&self.db)
        .await
        .map_err(|e| write_error("update", e))?;

        let mut product = Product::from(updated);
        product.category_name = self.category_name(product.category_id).await?;
        Ok(product)
    }

    async fn delete(&self, product_id: i64) -> Result<(), CoreError> {
        let result = ProductEntity::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
