use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    bulk_create_products::{__path_bulk_create_products, bulk_create_products},
    create_product::{__path_create_product, create_product},
    delete_product::{__path_delete_product, delete_product},
    get_product::{__path_get_product, get_product},
    list_products::{__path_list_products, list_products},
    update_product::{__path_replace_product, __path_update_product, replace_product, update_product},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    list_products,
    get_product,
    create_product,
    bulk_create_products,
    replace_product,
    update_product,
    delete_product
))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/v1/products", state.args.server.root_path),
            get(list_products).post(create_product),
        )
        .route(
            &format!("{}/v1/products/bulk", state.args.server.root_path),
            post(bulk_create_products),
        )
        .route(
            &format!("{}/v1/products/{{product_id}}", state.args.server.root_path),
            get(get_product)
                .put(replace_product)
                .patch(update_product)
                .delete(delete_product),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use catalog_core::{
        domain::{
            authentication::{entities::JwtClaim, ports::TokenSigner},
            user::entities::Role,
        },
        infrastructure::authentication::jwt::JwtTokenSigner,
    };
    use chrono::{Duration, Utc};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;
    use crate::application::http::server::test_support::test_state;

    fn server() -> TestServer {
        let state = test_state();
        TestServer::new(product_routes(state.clone()).with_state(state)).unwrap()
    }

    #[tokio::test]
    async fn test_listing_requires_a_token() {
        let response = server().get("/api/v1/products").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>(), json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_garbage_bearer_is_unauthorized() {
        let response = server()
            .post("/api/v1/products/bulk")
            .authorization_bearer("not-a-jwt")
            .json(&json!([]))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_reported() {
        let signer = JwtTokenSigner::new("test-secret").unwrap();
        let issued = Utc::now() - Duration::hours(2);
        let token = signer
            .sign(&JwtClaim {
                sub: "1".to_string(),
                jti: Uuid::new_v4(),
                iat: issued.timestamp(),
                exp: (issued + Duration::hours(1)).timestamp(),
                role: Role::Admin,
            })
            .unwrap();

        let response = server()
            .delete("/api/v1/products/4")
            .authorization_bearer(token)
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>(), json!({ "error": "Token expired" }));
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected_before_auth() {
        let response = server().get("/api/v1/products/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
