//! Restaurant catalog handlers: listing with screen filters, create,
//! detail, sparse update, soft delete, reactivation, facets, picks.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use concourse_catalog::{CatalogFilter, Facet};
use concourse_core::entries::{NewRestaurant, Restaurant, RestaurantPatch};

use crate::middleware::RequestId;

use super::{
    normalize_limit, validate_description, validate_entry_name, validate_rating, ApiError,
    ApiResponse, AppState, ResponseMeta,
};

#[derive(Debug, Deserialize)]
pub(super) struct RestaurantListQuery {
    pub q: Option<String>,
    pub cuisine: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f32>,
    /// Back-office listings include soft-deleted entries.
    pub include_inactive: Option<bool>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateEntryResponse {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub(super) struct RestaurantFacets {
    pub cuisines: Vec<String>,
    pub prices: Vec<String>,
    pub locations: Vec<String>,
}

pub(super) async fn list_restaurants(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RestaurantListQuery>,
) -> Result<Json<ApiResponse<Vec<Restaurant>>>, ApiError> {
    let filter = CatalogFilter {
        query: query.q,
        category: query.cuisine,
        price: query.price,
        location: query.location,
        min_rating: query.min_rating,
    };

    let mut data = if query.include_inactive.unwrap_or(false) {
        state
            .restaurants
            .get_all()
            .await
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect()
    } else {
        state.restaurants.filtered(&filter).await
    };
    data.truncate(normalize_limit(query.limit));

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/restaurants — create a new restaurant.
pub(super) async fn create_restaurant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(mut draft): Json<NewRestaurant>,
) -> Result<(StatusCode, Json<ApiResponse<CreateEntryResponse>>), ApiError> {
    let rid = &req_id.0;

    draft.name = validate_entry_name(rid, &draft.name)?;
    validate_description(rid, &draft.description)?;
    validate_rating(rid, draft.rating)?;

    let id = state.restaurants.add(draft).await;
    tracing::info!(id, "restaurant created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: CreateEntryResponse { id },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

pub(super) async fn get_restaurant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Restaurant>>, ApiError> {
    let restaurant = resolve_restaurant(&state, id, &req_id.0).await?;
    Ok(Json(ApiResponse {
        data: restaurant,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// PATCH /api/v1/restaurants/:id — sparse update; absent fields keep their
/// current value.
pub(super) async fn update_restaurant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
    Json(mut patch): Json<RestaurantPatch>,
) -> Result<Json<ApiResponse<Restaurant>>, ApiError> {
    let rid = &req_id.0;

    if let Some(ref name) = patch.name {
        patch.name = Some(validate_entry_name(rid, name)?);
    }
    if let Some(ref description) = patch.description {
        validate_description(rid, description)?;
    }
    if let Some(rating) = patch.rating {
        validate_rating(rid, rating)?;
    }

    let updated = state.restaurants.update(id, patch).await.ok_or_else(|| {
        ApiError::new(rid, "not_found", format!("restaurant {id} not found"))
    })?;

    Ok(Json(ApiResponse {
        data: updated,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// DELETE /api/v1/restaurants/:id — soft delete; the entry stays in the
/// store and in back-office listings.
pub(super) async fn deactivate_restaurant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    state.restaurants.deactivate(id).await.ok_or_else(|| {
        ApiError::new(&req_id.0, "not_found", format!("restaurant {id} not found"))
    })?;

    Ok(Json(ApiResponse {
        data: serde_json::json!({ "deactivated": true }),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/restaurants/:id/activate — undo a soft delete.
pub(super) async fn activate_restaurant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Restaurant>>, ApiError> {
    let restored = state.restaurants.activate(id).await.ok_or_else(|| {
        ApiError::new(&req_id.0, "not_found", format!("restaurant {id} not found"))
    })?;

    Ok(Json(ApiResponse {
        data: restored,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn restaurant_facets(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<RestaurantFacets>> {
    Json(ApiResponse {
        data: RestaurantFacets {
            cuisines: state.restaurants.facet_values(Facet::Category).await,
            prices: state.restaurants.facet_values(Facet::Price).await,
            locations: state.restaurants.facet_values(Facet::Location).await,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn recommended_restaurants(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Restaurant>>> {
    Json(ApiResponse {
        data: state.restaurants.recommended().await,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Resolve a restaurant id, returning 404 if not found.
pub(super) async fn resolve_restaurant(
    state: &AppState,
    id: u64,
    request_id: &str,
) -> Result<Restaurant, ApiError> {
    state.restaurants.get_by_id(id).await.ok_or_else(|| {
        ApiError::new(
            request_id,
            "not_found",
            format!("restaurant {id} not found"),
        )
    })
}
