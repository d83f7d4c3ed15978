use std::sync::Arc;

use chrono::Duration;

use crate::domain::{
    authentication::ports::{AccessTokenRepository, TokenSigner},
    category::{filter::category_filter_spec, ports::CategoryRepository},
    common::{entities::app_errors::CoreError, policies::CatalogPolicy},
    crypto::ports::HasherRepository,
    filter::spec::FilterSpec,
    health::ports::HealthCheckRepository,
    product::{filter::product_filter_spec, ports::ProductRepository},
    user::ports::UserRepository,
};

/// Filter whitelists of every listable resource, built once at startup.
#[derive(Debug, Clone)]
pub struct ResourceFilters {
    pub categories: FilterSpec,
    pub products: FilterSpec,
}

impl ResourceFilters {
    pub fn load() -> Result<Self, CoreError> {
        let categories =
            category_filter_spec().map_err(|e| CoreError::Configuration(e.to_string()))?;
        let products =
            product_filter_spec().map_err(|e| CoreError::Configuration(e.to_string()))?;

        Ok(Self {
            categories,
            products,
        })
    }
}

#[derive(Clone)]
pub struct Service<U, AT, C, P, H, T, HC>
where
    U: UserRepository,
    AT: AccessTokenRepository,
    C: CategoryRepository,
    P: ProductRepository,
    H: HasherRepository,
    T: TokenSigner,
    HC: HealthCheckRepository,
{
    pub(crate) user_repository: U,
    pub(crate) access_token_repository: AT,
    pub(crate) category_repository: C,
    pub(crate) product_repository: P,
    pub(crate) hasher_repository: H,
    pub(crate) token_signer: T,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: CatalogPolicy,
    pub(crate) filters: Arc<ResourceFilters>,
    pub(crate) token_ttl: Duration,
}

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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        access_token_repository: AT,
        category_repository: C,
        product_repository: P,
        hasher_repository: H,
        token_signer: T,
        health_check_repository: HC,
        filters: ResourceFilters,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_repository,
            access_token_repository,
            category_repository,
            product_repository,
            hasher_repository,
            token_signer,
            health_check_repository,
            policy: CatalogPolicy,
            filters: Arc::new(filters),
            token_ttl,
        }
    }
}
