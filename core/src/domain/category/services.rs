use tracing::{debug, info, instrument};

use crate::domain::{
    authentication::{
        ports::{AccessTokenRepository, TokenSigner},
        value_objects::Identity,
    },
    category::{
        entities::{Category, NewCategory},
        ports::{CategoryRepository, CategoryService},
        value_objects::{
            BulkCreateCategoriesInput, CreateCategoryInput, DeleteCategoryInput,
            GetCategoryInput, ListCategoriesInput, UpdateCategoryInput,
        },
    },
    common::{
        entities::{UpdateOutcome, app_errors::CoreError, pagination::Page},
        policies::ensure_policy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    filter::transform,
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
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
    async fn attach_products(&self, categories: &mut [Category]) -> Result<(), CoreError> {
        let ids: Vec<i64> = categories.iter().map(|category| category.id).collect();
        let mut products = self.product_repository.fetch_by_categories(ids).await?;

        for category in categories.iter_mut() {
            let (owned, rest): (Vec<_>, Vec<_>) = products
                .into_iter()
                .partition(|product| product.category_id == category.id);
            category.products = Some(owned);
            products = rest;
        }

        Ok(())
    }
}

impl<U, AT, C, P, H, T, HC> CategoryService for Service<U, AT, C, P, H, T, HC>
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
    async fn list_categories(
        &self,
        identity: Identity,
        input: ListCategoriesInput,
    ) -> Result<Page<Category>, CoreError> {
        ensure_policy(self.policy.can_view(&identity), "insufficient permissions")?;

        let predicates = transform(&input.query, &self.filters.categories);
        debug!(predicates = predicates.len(), "category filters resolved");

        let mut page = self
            .category_repository
            .fetch_categories(predicates, input.page)
            .await?;

        if input.include_products && !page.items.is_empty() {
            self.attach_products(&mut page.items).await?;
        }

        Ok(page)
    }

    async fn get_category(
        &self,
        identity: Identity,
        input: GetCategoryInput,
    ) -> Result<Category, CoreError> {
        ensure_policy(self.policy.can_view(&identity), "insufficient permissions")?;

        let mut category = self
            .category_repository
            .get_by_id(input.category_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if input.include_products {
            self.attach_products(std::slice::from_mut(&mut category))
                .await?;
        }

        Ok(category)
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id()))]
    async fn create_category(
        &self,
        identity: Identity,
        input: CreateCategoryInput,
    ) -> Result<Category, CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        let category = self
            .category_repository
            .create(NewCategory::new(input)?)
            .await?;

        info!(category_id = category.id, "category created");
        Ok(category)
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id(), count = input.categories.len()))]
    async fn bulk_create_categories(
        &self,
        identity: Identity,
        input: BulkCreateCategoriesInput,
    ) -> Result<Vec<i64>, CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        if input.categories.is_empty() {
            return Err(CoreError::Validation(
                "At least one category is required.".to_string(),
            ));
        }

        let categories = input
            .categories
            .into_iter()
            .map(NewCategory::new)
            .collect::<Result<Vec<_>, _>>()?;

        let ids = self.category_repository.create_many(categories).await?;

        info!(created = ids.len(), "categories created");
        Ok(ids)
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id(), category_id = input.category_id))]
    async fn update_category(
        &self,
        identity: Identity,
        input: UpdateCategoryInput,
    ) -> Result<UpdateOutcome<Category>, CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        let mut category = self
            .category_repository
            .get_by_id(input.category_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if !category.apply(input.patch)? {
            debug!("no changes detected");
            return Ok(UpdateOutcome::Unchanged);
        }

        let updated = self.category_repository.update(category).await?;
        Ok(UpdateOutcome::Updated(updated))
    }

    #[instrument(skip(self, identity, input), fields(user_id = identity.id(), category_id = input.category_id))]
    async fn delete_category(
        &self,
        identity: Identity,
        input: DeleteCategoryInput,
    ) -> Result<(), CoreError> {
        ensure_policy(self.policy.can_manage(&identity), "insufficient permissions")?;

        self.category_repository
            .get_by_id(input.category_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if self
            .product_repository
            .count_by_category(input.category_id)
            .await?
            > 0
        {
            return Err(CoreError::Conflict(
                "The category still has products assigned to it.".to_string(),
            ));
        }

        self.category_repository.delete(input.category_id).await?;

        info!("category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        category::value_objects::CategoryPatch,
        common::{
            entities::pagination::PageRequest,
            test_support::{ServiceBuilder, admin_identity, user_identity},
        },
        filter::entities::{Comparison, ComparisonSymbol, Predicate, RawQuery},
    };

    fn create_input(name: &str) -> CreateCategoryInput {
        CreateCategoryInput {
            name: name.to_string(),
            description: Some("a test category".to_string()),
            featured_image: None,
            status: true,
        }
    }

    #[tokio::test]
    async fn test_list_passes_resolved_predicates_to_repository() {
        let service = ServiceBuilder::new().build();
        let mut query = RawQuery::new();
        query.insert_operator("category_name", "like", "phone");
        query.insert_operator("unknown", "eq", "x");

        service
            .list_categories(
                user_identity(),
                ListCategoriesInput {
                    query,
                    include_products: false,
                    page: PageRequest::new(None, None, 15),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            service.category_repository.last_predicates(),
            vec![Predicate::Simple(Comparison::new(
                "name",
                ComparisonSymbol::Like,
                "%phone%"
            ))]
        );
    }

    #[tokio::test]
    async fn test_list_includes_products_per_category() {
        let service = ServiceBuilder::new().build();
        let phones = service.category_repository.seed("Phones");
        let tablets = service.category_repository.seed("Tablets");
        service.product_repository.seed(phones, "Galaxy S5");
        service.product_repository.seed(phones, "Pixel 8");
        service.product_repository.seed(tablets, "Tab A");

        let page = service
            .list_categories(
                user_identity(),
                ListCategoriesInput {
                    query: RawQuery::new(),
                    include_products: true,
                    page: PageRequest::new(None, None, 15),
                },
            )
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        for category in &page.items {
            let products = category.products.as_ref().unwrap();
            let expected = if category.id == phones { 2 } else { 1 };
            assert_eq!(products.len(), expected);
            assert!(products.iter().all(|p| p.category_id == category.id));
        }
    }

    #[tokio::test]
    async fn test_get_missing_category_is_not_found() {
        let service = ServiceBuilder::new().build();

        let err = service
            .get_category(
                user_identity(),
                GetCategoryInput {
                    category_id: 99,
                    include_products: false,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_mutations_require_admin() {
        let service = ServiceBuilder::new().build();

        let err = service
            .create_category(user_identity(), create_input("phones"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_create_normalizes_name() {
        let service = ServiceBuilder::new().build();

        let category = service
            .create_category(admin_identity(), create_input("smart_phones"))
            .await
            .unwrap();

        assert_eq!(category.name, "Smart Phones");
        assert_eq!(category.description.as_deref(), Some("A test category"));
    }

    #[tokio::test]
    async fn test_bulk_create_is_all_or_nothing() {
        let service = ServiceBuilder::new().build();

        let err = service
            .bulk_create_categories(
                admin_identity(),
                BulkCreateCategoriesInput {
                    categories: vec![create_input("phones"), create_input("   ")],
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(service.category_repository.len(), 0);

        let ids = service
            .bulk_create_categories(
                admin_identity(),
                BulkCreateCategoriesInput {
                    categories: vec![create_input("phones"), create_input("tablets")],
                },
            )
            .await
            .unwrap();
        assert_eq!(ids.len(), 2);
    }

    #[tokio::test]
    async fn test_update_without_changes_is_reported() {
        let service = ServiceBuilder::new().build();
        let category = service
            .create_category(admin_identity(), create_input("phones"))
            .await
            .unwrap();

        let outcome = service
            .update_category(
                admin_identity(),
                UpdateCategoryInput {
                    category_id: category.id,
                    patch: CategoryPatch::from(create_input("Phones")),
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Unchanged);

        let outcome = service
            .update_category(
                admin_identity(),
                UpdateCategoryInput {
                    category_id: category.id,
                    patch: CategoryPatch {
                        status: Some(false),
                        ..CategoryPatch::default()
                    },
                },
            )
            .await
            .unwrap();
        match outcome {
            UpdateOutcome::Updated(updated) => assert!(!updated.status),
            UpdateOutcome::Unchanged => panic!("expected an update"),
        }
    }

    #[tokio::test]
    async fn test_delete_with_products_conflicts() {
        let service = ServiceBuilder::new().build();
        let phones = service.category_repository.seed("Phones");
        service.product_repository.seed(phones, "Galaxy S5");

        let err = service
            .delete_category(
                admin_identity(),
                DeleteCategoryInput {
                    category_id: phones,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));

        let empty = service.category_repository.seed("Empty");
        service
            .delete_category(admin_identity(), DeleteCategoryInput { category_id: empty })
            .await
            .unwrap();
        assert_eq!(service.category_repository.len(), 1);
    }
}
