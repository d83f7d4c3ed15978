use std::collections::BTreeSet;

use tracing::{debug, info, instrument};

use crate::domain::{
    authentication::{
        ports::{AccessTokenRepository, TokenSigner},
        value_objects::Identity,
    },
    category::ports::CategoryRepository,
    common::{
        entities::{UpdateOutcome, app_errors::CoreError, pagination::Page},
        policies::ensure_policy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    filter::transform,
    health::ports::HealthCheckRepository,
    product::{
        entities::{NewProduct, Product},
        ports::{ProductRepository, ProductService},
        value_objects::{
            BulkCreateProductsInput, CreateProductInput, DeleteProductInput, GetProductInput,
            ListProductsInput, UpdateProductInput,
        },
    },
    user::ports::UserRepository,
};

impl<U, AT, C, P, H, T, HC> Service<U, AT, C, P, H, T, HC>
where
    U: UserRepository,
    AT: AccessTokenRepository,
    C: CategoryRepository,
    P: ProductRepository,
    H: HasherRepository,
    T: TokenSigner,
    HC: HealthCheckRepository,
{
    async fn ensure_category_exists(&self, category_id: i64) -> Result<(), CoreError> {
        match self.category_repository.get_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::Validation(format!(
                "The selected category id {category_id} is invalid."
            ))),
        }
    }
}

impl<U, AT, C, P, H, T, HC> ProductService for Service<U, AT, C, P, H, T, HC>
where
    U: UserRepository,
    AT: AccessTokenRepository,
    C: CategoryRepository,
    P: ProductRepository,
    H: HasherRepository,
    T: TokenSigner,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, identity, input), fields(user_id = identity.id()))]
    async fn list_products(
        &self,
        identity: Identity,
        input: ListProductsInput,
    ) -> Result<Page<Product>, CoreError> {
        ensure_policy(self.policy.can_view(&identity), "insufficient permissions")?;

        let predicates = transform(&input.query, &self.filters.products);
        debug!(predicates = predicates.len(), "product filters resolved");

        self.product_repository
            .fetch_products(predicates, input.page)
            .await
    }

    async fn get_product(
        &self,
        identity: Identity,
        input: GetProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(self.policy.can_view(&identity), "insufficient permissions")?;

        self.product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id()))]
    async fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        let product = NewProduct::new(input)?;
        self.ensure_category_exists(product.category_id).await?;

        let product = self.product_repository.create(product).await?;

        info!(product_id = product.id, sku = %product.sku, "product created");
        Ok(product)
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id(), count = input.products.len()))]
    async fn bulk_create_products(
        &self,
        identity: Identity,
        input: BulkCreateProductsInput,
    ) -> Result<Vec<i64>, CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        if input.products.is_empty() {
            return Err(CoreError::Validation(
                "At least one product is required.".to_string(),
            ));
        }

        let products = input
            .products
            .into_iter()
            .map(NewProduct::new)
            .collect::<Result<Vec<_>, _>>()?;

        let category_ids: BTreeSet<i64> = products.iter().map(|p| p.category_id).collect();
        for category_id in category_ids {
            self.ensure_category_exists(category_id).await?;
        }

        let ids = self.product_repository.create_many(products).await?;

        info!(created = ids.len(), "products created");
        Ok(ids)
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id(), product_id = input.product_id))]
    async fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> Result<UpdateOutcome<Product>, CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        let mut product = self
            .product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(category_id) = input.patch.category_id
            && category_id != product.category_id
        {
            self.ensure_category_exists(category_id).await?;
        }

        if !product.apply(input.patch)? {
            debug!("no changes detected");
            return Ok(UpdateOutcome::Unchanged);
        }

        let updated = self.product_repository.update(product).await?;
        Ok(UpdateOutcome::Updated(updated))
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id(), product_id = input.product_id))]
    async fn delete_product(
        &self,
        identity: Identity,
        input: DeleteProductInput,
    ) -> Result<(), CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        self.product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_repository.delete(input.product_id).await?;

        info!("product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{
            entities::pagination::PageRequest,
            test_support::{ServiceBuilder, admin_identity, user_identity},
        },
        filter::entities::{Comparison, ComparisonSymbol, Predicate, RawQuery},
        product::value_objects::ProductPatch,
    };

    fn create_input(category_id: i64) -> CreateProductInput {
        CreateProductInput {
            category_id,
            name: "pixel 8".to_string(),
            description: None,
            purchase_price: 300.0,
            sale_price: 499.99,
            stock: Some(10),
            featured_image: None,
            status: true,
        }
    }

    #[tokio::test]
    async fn test_list_resolves_price_range() {
        let service = ServiceBuilder::new().build();
        let mut query = RawQuery::new();
        query.insert_operator("price", "gte", "10");
        query.insert_operator("price", "lte", "50");
        query.insert_scalar("name", "foo");

        service
            .list_products(
                user_identity(),
                ListProductsInput {
                    query,
                    page: PageRequest::new(None, None, 5),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            service.product_repository.last_predicates(),
            vec![
                Predicate::Simple(Comparison::new(
                    "sale_price",
                    ComparisonSymbol::LessOrEqual,
                    "50"
                )),
                Predicate::Simple(Comparison::new(
                    "sale_price",
                    ComparisonSymbol::GreaterOrEqual,
                    "10"
                )),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_requires_existing_category() {
        let service = ServiceBuilder::new().build();

        let err = service
            .create_product(admin_identity(), create_input(404))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let phones = service.category_repository.seed("Phones");
        let product = service
            .create_product(admin_identity(), create_input(phones))
            .await
            .unwrap();
        assert_eq!(product.name, "Pixel 8");
        assert_eq!(product.category_name.as_deref(), Some("Phones"));
    }

    #[tokio::test]
    async fn test_create_is_admin_only() {
        let service = ServiceBuilder::new().build();
        let phones = service.category_repository.seed("Phones");

        let err = service
            .create_product(user_identity(), create_input(phones))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_bulk_create_checks_every_category() {
        let service = ServiceBuilder::new().build();
        let phones = service.category_repository.seed("Phones");

        let err = service
            .bulk_create_products(
                admin_identity(),
                BulkCreateProductsInput {
                    products: vec![create_input(phones), create_input(77)],
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(service.product_repository.len(), 0);

        let ids = service
            .bulk_create_products(
                admin_identity(),
                BulkCreateProductsInput {
                    products: vec![create_input(phones), create_input(phones)],
                },
            )
            .await
            .unwrap();
        assert_eq!(ids.len(), 2);
    }

    #[tokio::test]
    async fn test_update_moving_to_unknown_category_fails() {
        let service = ServiceBuilder::new().build();
        let phones = service.category_repository.seed("Phones");
        let product_id = service.product_repository.seed(phones, "Galaxy S5");

        let err = service
            .update_product(
                admin_identity(),
                UpdateProductInput {
                    product_id,
                    patch: ProductPatch {
                        category_id: Some(999),
                        ..ProductPatch::default()
                    },
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_reports_unchanged_and_changed() {
        let service = ServiceBuilder::new().build();
        let phones = service.category_repository.seed("Phones");
        let product_id = service.product_repository.seed(phones, "Galaxy S5");

        let outcome = service
            .update_product(
                admin_identity(),
                UpdateProductInput {
                    product_id,
                    patch: ProductPatch {
                        name: Some("galaxy s5".to_string()),
                        ..ProductPatch::default()
                    },
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Unchanged);

        let outcome = service
            .update_product(
                admin_identity(),
                UpdateProductInput {
                    product_id,
                    patch: ProductPatch {
                        stock: Some(42),
                        ..ProductPatch::default()
                    },
                },
            )
            .await
            .unwrap();
        assert!(matches!(outcome, UpdateOutcome::Updated(p) if p.stock == 42));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let service = ServiceBuilder::new().build();

        let err = service
            .delete_product(admin_identity(), DeleteProductInput { product_id: 5 })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }
}
