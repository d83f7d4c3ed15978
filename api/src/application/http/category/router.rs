use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    bulk_create_categories::{__path_bulk_create_categories, bulk_create_categories},
    create_category::{__path_create_category, create_category},
    delete_category::{__path_delete_category, delete_category},
    get_category::{__path_get_category, get_category},
    list_categories::{__path_list_categories, list_categories},
    update_category::{
        __path_replace_category, __path_update_category, replace_category, update_category,
    },
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    list_categories,
    get_category,
    create_category,
    bulk_create_categories,
    replace_category,
    update_category,
    delete_category
))]
pub struct CategoryApiDoc;

pub fn category_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/v1/categories", state.args.server.root_path),
            get(list_categories).post(create_category),
        )
        .route(
            &format!("{}/v1/categories/bulk", state.args.server.root_path),
            post(bulk_create_categories),
        )
        .route(
            &format!(
                "{}/v1/categories/{{category_id}}",
                state.args.server.root_path
            ),
            get(get_category)
                .put(replace_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;
    use crate::application::http::server::test_support::test_state;

    fn server() -> TestServer {
        let state = test_state();
        TestServer::new(category_routes(state.clone()).with_state(state)).unwrap()
    }

    #[tokio::test]
    async fn test_listing_requires_a_token() {
        let response = server()
            .get("/api/v1/categories")
            .add_query_param("category_name[like]", "phone")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>(), json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_garbage_bearer_is_unauthorized() {
        let response = server()
            .patch("/api/v1/categories/1")
            .authorization_bearer("garbage")
            .json(&json!({ "status": true }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>(), json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_unknown_method_is_not_allowed() {
        let response = server().put("/api/v1/categories").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
