//! # UAV Configurator API
//!
//! HTTP service for estimating the cruise performance of a UAV: thrust and
//! power for level flight, theoretical propeller speed, and endurance for an
//! electric or combustion propulsion system.
//!
//! ## Endpoints
//!
//! - `POST /configure`: JSON configuration in, JSON result out
//! - `POST /graphql`: the same operation as the `configure` query
//! - `GET /health`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Axum HTTP Server                         │
//! │             (CORS, request tracing, routing)                │
//! └─────────────────────────────────────────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │   REST /configure        │   │   async-graphql Schema       │
//! │   (JSON ⇄ UavResult)     │   │   (QueryRoot::configure)     │
//! └──────────────────────────┘   └──────────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 uav_domain::service                         │
//! │     (schema bounds → validators → calculations)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod resolvers;
pub mod schema;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uav_domain::UavResult;
use uuid::Uuid;

pub use config::Config;
pub use error::ApiError;
pub use resolvers::QueryRoot;

/// GraphQL schema type
pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema with the configured limits
pub fn build_schema(config: &Config) -> ApiSchema {
    let builder = Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .limit_depth(config.max_query_depth)
        .limit_complexity(config.max_query_complexity);

    if config.enable_introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}

/// Application state for Axum handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: ApiSchema,
}

/// REST configure endpoint
///
/// Any body that is not a JSON document is reported as a schema error.
pub async fn configure_handler(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<UavResult>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;

    let span = tracing::info_span!("configure", request_id = %Uuid::new_v4());
    span.in_scope(|| match uav_domain::configure(raw) {
        Ok(result) => {
            tracing::info!(
                system_type = %result.system_type(),
                thrust_n = result.required_thrust,
                power_w = result.required_power,
                flight_time_h = result.flight_time(),
                "Configuration evaluated"
            );
            Ok(Json(result))
        }
        Err(err) => {
            tracing::info!(kind = err.kind(), error = %err, "Configuration rejected");
            Err(ApiError::from(err))
        }
    })
}

/// GraphQL endpoint handler
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground HTML
pub async fn graphql_playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    "OK"
}

/// Build the Axum router
pub fn build_router(schema: ApiSchema, config: &Config) -> Router {
    let state = AppState { schema };

    let graphql = if config.enable_playground {
        get(graphql_playground).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/configure", post(configure_handler))
        .route("/graphql", graphql)
        // Health check
        .route("/health", get(health_check))
        .route("/", get(|| async { "UAV Configurator API" }))
        // State and middleware
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins = config.cors_origins.iter().filter_map(|origin| {
        HeaderValue::from_str(origin)
            .inspect_err(|_| tracing::warn!(%origin, "Ignoring invalid CORS origin"))
            .ok()
    });
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
