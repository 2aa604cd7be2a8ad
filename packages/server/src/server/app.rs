//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::common::AuthUser;
use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    graphql_handler, graphql_playground, health_handler, send_community_invite,
    send_creator_approval,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headers the dashboard's function client sends on preflight.
const FUNCTION_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by jwt_auth_middleware
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(state.db_pool.clone(), state.server_deps.clone(), auth_user);
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// CORS for the function endpoints: any origin, the function client's headers.
fn function_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(FUNCTION_HEADERS.map(HeaderName::from_static))
}

/// CORS for the dashboard API. An empty list allows any origin.
fn graphql_cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid allowed origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps, allowed_origins: &[String]) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let jwt_service = server_deps.jwt_service.clone();

    let app_state = AppState {
        db_pool: server_deps.db_pool.clone(),
        server_deps: Arc::new(server_deps),
    };

    let mut graphql_router = Router::new().route("/graphql", post(graphql_handler));

    // GraphiQL only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        graphql_router = graphql_router.route("/graphql", get(graphql_playground));
    }

    let graphql_router = graphql_router
        .layer(graphql_cors(allowed_origins))
        .with_state(schema);

    let function_router = Router::new()
        .route("/functions/send-creator-approval", post(send_creator_approval))
        .route("/functions/send-community-invite", post(send_community_invite))
        .layer(function_cors());

    Router::new()
        .merge(graphql_router)
        .merge(function_router)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}
