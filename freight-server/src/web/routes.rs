//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::distance::DistanceError;
use crate::domain::{RequestId, RouteId};
use crate::pricing::{self, PricingError};
use crate::routing::{RoutingError, build_available_routes};
use crate::store::{RequestStore, RouteStore, StoreError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/requests/:id", get(get_request))
        .route("/requests/:id/routes", get(list_routes))
        .route("/requests/:id/calculate-routes", post(calculate_routes))
        .route(
            "/requests/:id/routes/:route_id/calculate-price",
            post(calculate_route_price),
        )
        .route("/requests/:id/calculate-prices", post(calculate_all_prices))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fetch one quote request.
async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<RequestDto>, AppError> {
    let request = state.store.request(RequestId(id))?;
    Ok(Json(RequestDto::from(&request)))
}

/// List a request's candidate routes.
async fn list_routes(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<RouteOptionDto>>, AppError> {
    // 404 for unknown requests rather than an empty list.
    let request = state.store.request(RequestId(id))?;
    let routes = state.store.routes_for_request(request.id)?;
    Ok(Json(routes.iter().map(RouteOptionDto::from).collect()))
}

/// Rebuild the candidate routes for a request.
///
/// Existing routes are discarded first, so repeated calls converge on the
/// current reference data instead of accumulating stale candidates.
async fn calculate_routes(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<RouteOptionDto>>, AppError> {
    let request = state.store.request(RequestId(id))?;

    let removed = state.store.delete_routes_for_request(request.id)?;
    if removed > 0 {
        tracing::debug!(request_id = %request.id, removed, "discarded stale routes");
    }

    let routes = build_available_routes(state.store.as_ref(), &request)?;
    Ok(Json(routes.iter().map(RouteOptionDto::from).collect()))
}

/// Price a single route option.
async fn calculate_route_price(
    State(state): State<AppState>,
    Path((id, route_id)): Path<(u64, u64)>,
) -> Result<Json<RouteOptionDto>, AppError> {
    let route = state.store.route(RouteId(route_id))?;
    if route.request_id != RequestId(id) {
        return Err(AppError::NotFound {
            message: format!("route option {route_id} not found"),
        });
    }

    let priced =
        pricing::calculate_route_price(state.store.as_ref(), state.distance.as_ref(), &route)
            .await?;
    Ok(Json(RouteOptionDto::from(&priced)))
}

/// Price every route option of a request and record the cheapest and
/// fastest on it.
async fn calculate_all_prices(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PricingReportDto>, AppError> {
    let report = pricing::calculate_all_request_routes(
        state.store.as_ref(),
        state.distance.as_ref(),
        RequestId(id),
    )
    .await?;
    Ok(Json(PricingReportDto::from(&report)))
}

/// Application error with HTTP status mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::RequestNotFound(_) | StoreError::RouteNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            StoreError::Backend(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        match e {
            RoutingError::MissingGeocoding => AppError::BadRequest {
                message: e.to_string(),
            },
            RoutingError::Store(err) => err.into(),
            RoutingError::Domain(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        match e {
            PricingError::MissingRequiredField(_)
            | PricingError::MissingCountryCode
            | PricingError::MissingStartTime => AppError::BadRequest {
                message: e.to_string(),
            },
            PricingError::TruckingRateNotFound(_)
            | PricingError::AirportRateNotFound { .. }
            | PricingError::AirlineRateNotFound { .. }
            | PricingError::NoFlightFound { .. } => AppError::Unprocessable {
                message: e.to_string(),
            },
            PricingError::Distance(DistanceError::MissingCoordinates) => AppError::BadRequest {
                message: e.to_string(),
            },
            PricingError::Distance(_) => AppError::Upstream {
                message: e.to_string(),
            },
            PricingError::Store(err) => err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
