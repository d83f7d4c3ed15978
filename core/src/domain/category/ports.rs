use crate::domain::{
    authentication::value_objects::Identity,
    category::{
        entities::{Category, NewCategory},
        value_objects::{
            BulkCreateCategoriesInput, CreateCategoryInput, DeleteCategoryInput,
            GetCategoryInput, ListCategoriesInput, UpdateCategoryInput,
        },
    },
    common::entities::{
        UpdateOutcome,
        app_errors::CoreError,
        pagination::{Page, PageRequest},
    },
    filter::entities::Predicate,
};

pub trait CategoryService: Send + Sync {
    fn list_categories(
        &self,
        identity: Identity,
        input: ListCategoriesInput,
    ) -> impl Future<Output = Result<Page<Category>, CoreError>> + Send;

    fn get_category(
        &self,
        identity: Identity,
        input: GetCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn create_category(
        &self,
        identity: Identity,
        input: CreateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn bulk_create_categories(
        &self,
        identity: Identity,
        input: BulkCreateCategoriesInput,
    ) -> impl Future<Output = Result<Vec<i64>, CoreError>> + Send;

    fn update_category(
        &self,
        identity: Identity,
        input: UpdateCategoryInput,
    ) -> impl Future<Output = Result<UpdateOutcome<Category>, CoreError>> + Send;

    fn delete_category(
        &self,
        identity: Identity,
        input: DeleteCategoryInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    /// Newest first, restricted by `predicates` (all of which must hold).
    fn fetch_categories(
        &self,
        predicates: Vec<Predicate>,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<Category>, CoreError>> + Send;

    fn get_by_id(
        &self,
        category_id: i64,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    /// Inserts every category or none of them.
    fn create_many(
        &self,
        categories: Vec<NewCategory>,
    ) -> impl Future<Output = Result<Vec<i64>, CoreError>> + Send;

    fn update(&self, category: Category) -> impl Future<Output = Result<Category, CoreError>> + Send;

    /// Fails with `CoreError::Conflict` while products still reference the category.
    fn delete(&self, category_id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}
