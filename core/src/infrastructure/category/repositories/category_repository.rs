use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr, TransactionTrait,
};
use tracing::{debug, error};

use crate::domain::{
    category::{
        entities::{Category, NewCategory},
        ports::CategoryRepository,
    },
    common::entities::{
        app_errors::CoreError,
        pagination::{Page, PageRequest},
    },
    filter::entities::Predicate,
};
use crate::entity::categories::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as CategoryEntity,
};
use crate::infrastructure::filter::query_builder::build_condition;

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn insert_model(category: NewCategory) -> CategoryActiveModel {
    let now = Utc::now().naive_utc();

    CategoryActiveModel {
        name: Set(category.name),
        description: Set(category.description),
        featured_image: Set(category.featured_image),
        status: Set(category.status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn fetch_categories(
        &self,
        predicates: Vec<Predicate>,
        page: PageRequest,
    ) -> Result<Page<Category>, CoreError> {
        let paginator = CategoryEntity::find()
            .filter(build_condition::<CategoryEntity>(&predicates)?)
            .order_by_desc(CategoryColumn::CreatedAt)
            .order_by_desc(CategoryColumn::Id)
            .paginate(&self.db, page.per_page);

        let total = paginator.num_items().await.map_err(|e| {
            error!("Failed to count categories: {}", e);
            CoreError::InternalServerError
        })?;

        let models = paginator.fetch_page(page.page - 1).await.map_err(|e| {
            error!("Failed to list categories: {}", e);
            CoreError::InternalServerError
        })?;

        debug!(total, returned = models.len(), "categories fetched");

        Ok(Page::new(
            models.into_iter().map(Category::from).collect(),
            page,
            total,
        ))
    }

    async fn get_by_id(&self, category_id: i64) -> Result<Option<Category>, CoreError> {
        let category = CategoryEntity::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get category by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Category::from);

        Ok(category)
    }

    async fn create(&self, category: NewCategory) -> Result<Category, CoreError> {
        let created = CategoryEntity::insert(insert_model(category))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Category::from(created))
    }

    async fn create_many(&self, categories: Vec<NewCategory>) -> Result<Vec<i64>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let mut ids = Vec::with_capacity(categories.len());
        for category in categories {
            let created = CategoryEntity::insert(insert_model(category))
                .exec_with_returning(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create category in bulk: {}", e);
                    CoreError::InternalServerError
                })?;
            ids.push(created.id);
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit bulk category insert: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ids)
    }

    async fn update(&self, category: Category) -> Result<Category, CoreError> {
        let products = category.products.clone();

        let mut updated = CategoryEntity::update(CategoryActiveModel {
            id: Set(category.id),
            name: Set(category.name),
            description: Set(category.description),
            featured_image: Set(category.featured_image),
            status: Set(category.status),
            created_at: Set(category.created_at.naive_utc()),
            updated_at: Set(category.updated_at.naive_utc()),
        })
        .filter(CategoryColumn::Id.eq(category.id))
        .exec(&self.db)
        .await
        .map(Category::from)
        .map_err(|e| {
            error!("Failed to update category: {}", e);
            CoreError::InternalServerError
        })?;

        updated.products = products;
        Ok(updated)
    }

    async fn delete(&self, category_id: i64) -> Result<(), CoreError> {
        let result = CategoryEntity::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => CoreError::Conflict(
                    "The category still has products and cannot be deleted.".to_string(),
                ),
                _ => {
                    error!("Failed to delete category: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
