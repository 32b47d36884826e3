//! Departures board and saved-flight handlers.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use concourse_core::flights::{Flight, FlightStatus};

use crate::middleware::RequestId;

use super::{map_storage_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct FlightListQuery {
    pub q: Option<String>,
    pub airline: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SavedFlightsData {
    pub numbers: Vec<String>,
    /// Board entries matching the saved numbers; a number with no match
    /// (e.g. a flight rotated off the board) is still listed above.
    pub flights: Vec<Flight>,
}

pub(super) async fn list_flights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<FlightListQuery>,
) -> Result<Json<ApiResponse<Vec<Flight>>>, ApiError> {
    let rid = &req_id.0;

    let status = match query.status.as_deref() {
        Some(raw) => Some(raw.parse::<FlightStatus>().map_err(|e| {
            ApiError::new(rid, "validation_error", e.to_string())
        })?),
        None => None,
    };

    let mut data: Vec<Flight> = match query.q.as_deref() {
        Some(term) => state.flights.search(term),
        None => state.flights.all().to_vec(),
    };
    if let Some(airline) = query.airline.as_deref().filter(|a| !a.is_empty()) {
        data.retain(|f| f.airline.eq_ignore_ascii_case(airline));
    }
    if let Some(status) = status {
        data.retain(|f| f.status == status);
    }

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_saved_flights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<SavedFlightsData>> {
    let saved = state.saved_flights.lock().await;
    let numbers = saved.list().to_vec();
    let flights = numbers
        .iter()
        .filter_map(|n| state.flights.by_number(n).cloned())
        .collect();

    Json(ApiResponse {
        data: SavedFlightsData { numbers, flights },
        meta: ResponseMeta::new(req_id.0),
    })
}

/// PUT /api/v1/flights/saved/:number — start tracking a board flight.
pub(super) async fn save_flight(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(number): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let rid = &req_id.0;

    let flight = state.flights.by_number(&number).ok_or_else(|| {
        ApiError::new(rid, "not_found", format!("flight '{number}' is not on the board"))
    })?;

    let mut saved = state.saved_flights.lock().await;
    let added = saved
        .save(&flight.number)
        .map_err(|e| map_storage_error(rid.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: serde_json::json!({ "saved": added }),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// DELETE /api/v1/flights/saved/:number — stop tracking a flight.
pub(super) async fn unsave_flight(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(number): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let rid = &req_id.0;

    let mut saved = state.saved_flights.lock().await;
    let removed = saved
        .remove(&number)
        .map_err(|e| map_storage_error(rid.clone(), &e))?;
    if !removed {
        return Err(ApiError::new(
            rid,
            "not_found",
            format!("flight '{number}' is not saved"),
        ));
    }

    Ok(Json(ApiResponse {
        data: serde_json::json!({ "removed": true }),
        meta: ResponseMeta::new(req_id.0),
    }))
}
