mod auth;
mod flights;
mod restaurants;
mod reviews;
mod shops;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use concourse_catalog::{
    CatalogHandle, FlightBoard, JsonStore, ReviewLog, SavedFlights, StorageError,
};
use concourse_core::{Restaurant, SeedFile, Shop};

use crate::middleware::{
    enforce_rate_limit, request_id, require_bearer_auth, AuthState, RateLimitState, RequestId,
};
use crate::sessions::SessionStore;
use crate::users::UserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub restaurants: CatalogHandle<Restaurant>,
    pub shops: CatalogHandle<Shop>,
    pub flights: Arc<FlightBoard>,
    pub saved_flights: Arc<Mutex<SavedFlights>>,
    pub reviews: Arc<Mutex<ReviewLog>>,
    pub users: Arc<UserDirectory>,
    pub sessions: SessionStore,
}

impl AppState {
    /// Build the full application state from a validated seed document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the persisted saved-flights or review
    /// blobs exist but cannot be read.
    pub fn from_seed(
        seed: SeedFile,
        storage: &JsonStore,
        sessions: SessionStore,
    ) -> Result<Self, StorageError> {
        Ok(Self {
            restaurants: CatalogHandle::from_seed(seed.restaurants),
            shops: CatalogHandle::from_seed(seed.shops),
            flights: Arc::new(FlightBoard::from_seed(seed.flights)),
            saved_flights: Arc::new(Mutex::new(SavedFlights::open(storage.clone())?)),
            reviews: Arc::new(Mutex::new(ReviewLog::open(storage.clone())?)),
            users: Arc::new(UserDirectory::new()),
            sessions,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    restaurants: usize,
    shops: usize,
    flights: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "conflict" => StatusCode::CONFLICT,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Cap listing sizes: default 50, bounds [1, 200].
pub(super) fn normalize_limit(limit: Option<i64>) -> usize {
    usize::try_from(limit.unwrap_or(50).clamp(1, 200)).unwrap_or(50)
}

pub(super) fn map_storage_error(request_id: String, error: &StorageError) -> ApiError {
    tracing::error!(error = %error, "local storage operation failed");
    ApiError::new(request_id, "internal_error", "local storage operation failed")
}

// ---------------------------------------------------------------------------
// Shared validation helpers
// ---------------------------------------------------------------------------

pub(super) fn validate_entry_name(req_id: &str, name: &str) -> Result<String, ApiError> {
    let trimmed = name.trim().to_owned();
    if trimmed.is_empty() || trimmed.len() > 200 {
        return Err(ApiError::new(
            req_id,
            "validation_error",
            "name must be 1–200 characters",
        ));
    }
    Ok(trimmed)
}

pub(super) fn validate_description(req_id: &str, description: &str) -> Result<(), ApiError> {
    if description.trim().is_empty() {
        return Err(ApiError::new(
            req_id,
            "validation_error",
            "description must be non-empty",
        ));
    }
    Ok(())
}

pub(super) fn validate_rating(req_id: &str, rating: f32) -> Result<(), ApiError> {
    if concourse_core::entries::rating_in_range(rating) {
        Ok(())
    } else {
        Err(ApiError::new(
            req_id,
            "validation_error",
            format!("rating must be within [0.0, 5.0], got {rating}"),
        ))
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}

fn protected_router(auth: AuthState, rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route(
            "/api/v1/restaurants",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route(
            "/api/v1/restaurants/facets",
            get(restaurants::restaurant_facets),
        )
        .route(
            "/api/v1/restaurants/recommended",
            get(restaurants::recommended_restaurants),
        )
        .route(
            "/api/v1/restaurants/{id}",
            get(restaurants::get_restaurant)
                .patch(restaurants::update_restaurant)
                .delete(restaurants::deactivate_restaurant),
        )
        .route(
            "/api/v1/restaurants/{id}/activate",
            post(restaurants::activate_restaurant),
        )
        .route(
            "/api/v1/restaurants/{id}/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/api/v1/shops",
            get(shops::list_shops).post(shops::create_shop),
        )
        .route("/api/v1/shops/facets", get(shops::shop_facets))
        .route("/api/v1/shops/recommended", get(shops::recommended_shops))
        .route(
            "/api/v1/shops/{id}",
            get(shops::get_shop)
                .patch(shops::update_shop)
                .delete(shops::deactivate_shop),
        )
        .route("/api/v1/shops/{id}/activate", post(shops::activate_shop))
        .route("/api/v1/flights", get(flights::list_flights))
        .route("/api/v1/flights/saved", get(flights::list_saved_flights))
        .route(
            "/api/v1/flights/saved/{number}",
            put(flights::save_flight).delete(flights::unsave_flight),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit,
                    enforce_rate_limit,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    auth,
                    require_bearer_auth,
                )),
        )
}

pub fn build_app(state: AppState, auth: AuthState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/signin", post(auth::signin));

    Router::new()
        .merge(public_routes)
        .merge(protected_router(auth, rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                restaurants: state.restaurants.len().await,
                shops: state.shops.len().await,
                flights: state.flights.len(),
            },
            meta,
        }),
    )
}
