//! Shop catalog handlers. Same shape as the restaurant handlers with
//! `category` in place of `cuisine`; shops carry offers instead of
//! phone/website and have no review feed.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use concourse_catalog::{CatalogFilter, Facet};
use concourse_core::entries::{NewShop, Shop, ShopPatch};

use crate::middleware::RequestId;

use super::restaurants::CreateEntryResponse;
use super::{
    normalize_limit, validate_description, validate_entry_name, validate_rating, ApiError,
    ApiResponse, AppState, ResponseMeta,
};

#[derive(Debug, Deserialize)]
pub(super) struct ShopListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f32>,
    pub include_inactive: Option<bool>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct ShopFacets {
    pub categories: Vec<String>,
    pub prices: Vec<String>,
    pub locations: Vec<String>,
}

pub(super) async fn list_shops(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ShopListQuery>,
) -> Result<Json<ApiResponse<Vec<Shop>>>, ApiError> {
    let filter = CatalogFilter {
        query: query.q,
        category: query.category,
        price: query.price,
        location: query.location,
        min_rating: query.min_rating,
    };

    let mut data = if query.include_inactive.unwrap_or(false) {
        state
            .shops
            .get_all()
            .await
            .into_iter()
            .filter(|s| filter.matches(s))
            .collect()
    } else {
        state.shops.filtered(&filter).await
    };
    data.truncate(normalize_limit(query.limit));

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/shops — create a new shop.
pub(super) async fn create_shop(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(mut draft): Json<NewShop>,
) -> Result<(StatusCode, Json<ApiResponse<CreateEntryResponse>>), ApiError> {
    let rid = &req_id.0;

    draft.name = validate_entry_name(rid, &draft.name)?;
    validate_description(rid, &draft.description)?;
    validate_rating(rid, draft.rating)?;

    let id = state.shops.add(draft).await;
    tracing::info!(id, "shop created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: CreateEntryResponse { id },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

pub(super) async fn get_shop(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Shop>>, ApiError> {
    let shop = state
        .shops
        .get_by_id(id)
        .await
        .ok_or_else(|| ApiError::new(&req_id.0, "not_found", format!("shop {id} not found")))?;
    Ok(Json(ApiResponse {
        data: shop,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// PATCH /api/v1/shops/:id — sparse update.
pub(super) async fn update_shop(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
    Json(mut patch): Json<ShopPatch>,
) -> Result<Json<ApiResponse<Shop>>, ApiError> {
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

    let updated = state
        .shops
        .update(id, patch)
        .await
        .ok_or_else(|| ApiError::new(rid, "not_found", format!("shop {id} not found")))?;

    Ok(Json(ApiResponse {
        data: updated,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// DELETE /api/v1/shops/:id — soft delete.
pub(super) async fn deactivate_shop(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    state
        .shops
        .deactivate(id)
        .await
        .ok_or_else(|| ApiError::new(&req_id.0, "not_found", format!("shop {id} not found")))?;

    Ok(Json(ApiResponse {
        data: serde_json::json!({ "deactivated": true }),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/shops/:id/activate — undo a soft delete.
pub(super) async fn activate_shop(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Shop>>, ApiError> {
    let restored = state
        .shops
        .activate(id)
        .await
        .ok_or_else(|| ApiError::new(&req_id.0, "not_found", format!("shop {id} not found")))?;

    Ok(Json(ApiResponse {
        data: restored,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn shop_facets(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<ShopFacets>> {
    Json(ApiResponse {
        data: ShopFacets {
            categories: state.shops.facet_values(Facet::Category).await,
            prices: state.shops.facet_values(Facet::Price).await,
            locations: state.shops.facet_values(Facet::Location).await,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn recommended_shops(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Shop>>> {
    Json(ApiResponse {
        data: state.shops.recommended().await,
        meta: ResponseMeta::new(req_id.0),
    })
}
