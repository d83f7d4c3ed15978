use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::{
        UpdateOutcome,
        app_errors::CoreError,
        pagination::{Page, PageRequest},
    },
    filter::entities::Predicate,
    product::{
        entities::{NewProduct, Product},
        value_objects::{
            BulkCreateProductsInput, CreateProductInput, DeleteProductInput, GetProductInput,
            ListProductsInput, UpdateProductInput,
        },
    },
};

pub trait ProductService: Send + Sync {
    fn list_products(
        &self,
        identity: Identity,
        input: ListProductsInput,
    ) -> impl Future<Output = Result<Page<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        identity: Identity,
        input: GetProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn bulk_create_products(
        &self,
        identity: Identity,
        input: BulkCreateProductsInput,
    ) -> impl Future<Output = Result<Vec<i64>, CoreError>> + Send;

    fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<UpdateOutcome<Product>, CoreError>> + Send;

    fn delete_product(
        &self,
        identity: Identity,
        input: DeleteProductInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Newest first, restricted by `predicates` (all of which must hold).
    fn fetch_products(
        &self,
        predicates: Vec<Predicate>,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<Product>, CoreError>> + Send;

    fn fetch_by_categories(
        &self,
        category_ids: Vec<i64>,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn count_by_category(&self, category_id: i64) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: i64,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn create(&self, product: NewProduct) -> impl Future<Output = Result<Product, CoreError>> + Send;

    /// Inserts every product or none of them.
    fn create_many(
        &self,
        products: Vec<NewProduct>,
    ) -> impl Future<Output = Result<Vec<i64>, CoreError>> + Send;

    fn update(&self, product: Product) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete(&self, product_id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}
