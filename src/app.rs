use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post, MethodRouter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::{AuthError, TokenKeys};
use crate::config::{AppConfig, SecurityConfig};
use crate::database::Store;
use crate::handlers::{crud, profile_page, system, token, CertifyingInstitutions, Certificates, Profiles, Projects, Resource};
use crate::middleware::{authorize, Gate};

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    /// Fails when no JWT secret is configured.
    pub fn new(store: Store, config: &AppConfig) -> Result<Self, AuthError> {
        Ok(Self {
            store,
            tokens: Arc::new(TokenKeys::new(&config.security)?),
        })
    }
}

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let app = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/token/", post(token::obtain))
        .route("/token/refresh/", post(token::refresh))
        .merge(resource_routes::<Profiles>(&state, get(profile_page::show)))
        .merge(resource_routes::<Projects>(&state, get(crud::retrieve::<Projects>)))
        .merge(resource_routes::<CertifyingInstitutions>(
            &state,
            get(crud::retrieve::<CertifyingInstitutions>),
        ))
        .merge(resource_routes::<Certificates>(&state, get(crud::retrieve::<Certificates>)))
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer(&config.security))
                .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
        )
        .with_state(state);

    if config.api.enable_request_logging {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// `/{entity}/` and `/{entity}/:id/`, all behind the policy gate.
/// `detail_get` lets one entity serve something other than JSON on GET.
fn resource_routes<R: Resource>(state: &AppState, detail_get: MethodRouter<AppState>) -> Router<AppState> {
    let collection = format!("/{}/", R::KIND.segment());
    let detail = format!("/{}/:id/", R::KIND.segment());
    let gate = Gate::new(R::KIND, state.tokens.clone());

    Router::new()
        .route(&collection, get(crud::list::<R>).post(crud::create::<R>))
        .route(
            &detail,
            detail_get
                .put(crud::update::<R>)
                .patch(crud::partial_update::<R>)
                .delete(crud::destroy::<R>),
        )
        .route_layer(from_fn_with_state(gate, authorize))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
