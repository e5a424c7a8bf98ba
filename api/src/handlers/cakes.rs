//! Cake handlers
//!
//! CRUD endpoints for the cake catalogue.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Cake, CakeId, CakeUpdate, NewCake};
use crate::error::AppError;
use crate::AppState;

/// Full representation of a cake
#[derive(Debug, Serialize)]
pub struct CakeResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl From<Cake> for CakeResponse {
    fn from(cake: Cake) -> Self {
        Self {
            id: cake.id.0,
            title: cake.title,
            description: cake.description,
        }
    }
}

/// Response for listing cakes
#[derive(Debug, Serialize)]
pub struct CakesResponse {
    pub cakes: Vec<CakeResponse>,
}

/// Request to create a new cake
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCakeRequest {
    pub title: String,
    pub description: String,
}

/// Request to replace a cake's title and description
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCakeRequest {
    pub title: String,
    pub description: String,
}

/// GET /cakes
///
/// List all cakes.
pub async fn list_cakes(State(state): State<AppState>) -> Result<Json<CakesResponse>, AppError> {
    let cakes = state.cake_service.list().await?;

    Ok(Json(CakesResponse {
        cakes: cakes.into_iter().map(CakeResponse::from).collect(),
    }))
}

/// GET /cakes/:id
pub async fn get_cake(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CakeResponse>, AppError> {
    let cake = state.cake_service.get_by_id(CakeId(id)).await?;
    Ok(Json(cake.into()))
}

/// POST /cakes
///
/// Create a cake. Responds 201 with the stored cake, including its new ID.
pub async fn create_cake(
    State(state): State<AppState>,
    payload: Result<Json<CreateCakeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CakeResponse>), AppError> {
    let Json(request) = payload?;

    let cake = state
        .cake_service
        .create(NewCake {
            title: request.title,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(cake.into())))
}

/// PUT /cakes/:id
///
/// Replace title and description. Responds 204 with no body.
pub async fn update_cake(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateCakeRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    state
        .cake_service
        .update(
            CakeId(id),
            CakeUpdate {
                title: request.title,
                description: request.description,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /cakes/:id
pub async fn delete_cake(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.cake_service.delete(CakeId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
