use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use yakjangsu_core::{
    application::create_service,
    domain::common::YakjangsuConfig,
    infrastructure::{
        conversations::proxy_client::ConversationsProxyClient,
        drug_info::data_go_client::DataGoKrClient,
    },
};

use crate::application::http::chat::router::chat_routes;
use crate::application::http::completions::router::completions_routes;
use crate::application::http::conversations::router::conversations_routes;
use crate::application::http::health::health_routes;
use crate::application::http::medication_info::router::medication_info_routes;
use crate::application::http::profile::router::profile_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub fn state(args: Arc<Args>) -> AppState {
    let config: YakjangsuConfig = YakjangsuConfig::from(args.as_ref().clone());
    let service = create_service(&config);

    let drug_info_client = config
        .drug_info
        .service_key
        .map(DataGoKrClient::new);
    let conversations_client = ConversationsProxyClient::new(config.conversations.api_url);

    AppState::new(args, service, drug_info_client, conversations_client)
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    // `PrometheusMetricLayer::pair` installs a process-global metrics
    // recorder and panics on a second install, so the pair is created at
    // most once per process.
    static PROMETHEUS_PAIR: OnceLock<(
        PrometheusMetricLayer<'static>,
        axum_prometheus::metrics_exporter_prometheus::PrometheusHandle,
    )> = OnceLock::new();
    let (prometheus_layer, metric_handle) =
        PROMETHEUS_PAIR.get_or_init(PrometheusMetricLayer::pair).clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let openapi_json = openapi.clone();
    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url.clone()).path(format!("{}/rapidoc", root_path)))
        .route(
            &api_docs_url,
            get(move || async move { axum::Json(openapi_json) }),
        )
        .merge(chat_routes(state.clone()))
        .merge(completions_routes(state.clone()))
        .merge(profile_routes(state.clone()))
        .merge(conversations_routes(state.clone()))
        .merge(medication_info_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
