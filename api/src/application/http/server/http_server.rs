use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use catalog_core::{application::create_service, domain::common::CatalogConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info_span};
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    authentication::router::authentication_routes, category::router::category_routes,
    health::health_routes, product::router::product_routes, server::app_state::AppState,
    server::openapi::api_doc,
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = CatalogConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn cors(origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let allowed_origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid origin '{origin}'"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION])
        .allow_credentials(true))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        });

    let cors = cors(&state.args.server.allowed_origins)?;
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = Router::new()
        .merge(Scalar::with_url(format!("{root_path}/scalar"), openapi.clone()))
        .merge(SwaggerUi::new(format!("{root_path}/docs")).url(api_docs_url, openapi))
        .merge(authentication_routes(state.clone()))
        .merge(category_routes(state.clone()))
        .merge(product_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_rejects_unparsable_origin() {
        assert!(cors(&["http://localhost:3000".to_string()]).is_ok());
        assert!(cors(&["http://bad\norigin".to_string()]).is_err());
    }
}
