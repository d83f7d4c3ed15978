use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, category::router::CategoryApiDoc,
    health::HealthApiDoc, product::router::ProductApiDoc,
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                Http::builder()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API"
    ),
    modifiers(&BearerSecurity),
    nest(
        (path = "/v1/categories", api = CategoryApiDoc),
        (path = "/v1/products", api = ProductApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document: resource routes nested under their prefixes, auth and health at the root.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
        .merge_from(AuthenticationApiDoc::openapi())
        .merge_from(HealthApiDoc::openapi())
}
