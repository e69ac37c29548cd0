//! Trainer Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::TrainerId;
use crate::infrastructure::driving_adapters::api_rest::dto::trainer::{
    CreateTrainerDto, TrainerResponseDto, UpdateTrainerDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::ValidatedJson;
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trainers).post(create_trainer))
        .route("/{id}", get(get_trainer).put(update_trainer).delete(delete_trainer))
}

#[axum::debug_handler]
async fn list_trainers(_auth: AuthUser, State(state): State<AppState>) -> JsonResult<Vec<TrainerResponseDto>> {
    let trainers = state.trainers.list.execute().await?;
    Ok(ApiResponse::ok(trainers.into_iter().map(TrainerResponseDto::from).collect()))
}

#[axum::debug_handler]
async fn create_trainer(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTrainerDto>,
) -> CreatedResult<TrainerResponseDto> {
    let trainer = state.trainers.create.execute(dto.into()).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(trainer.into(), "Trainer created")))
}

#[axum::debug_handler]
async fn get_trainer(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<TrainerResponseDto> {
    let id = TrainerId::try_from(id.as_str())?;
    let trainer = state.trainers.get.execute(&id).await?;
    Ok(ApiResponse::ok(trainer.into()))
}

#[axum::debug_handler]
async fn update_trainer(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateTrainerDto>,
) -> JsonResult<TrainerResponseDto> {
    let id = TrainerId::try_from(id.as_str())?;
    let trainer = state.trainers.update.execute(&id, dto.into()).await?;
    Ok(ApiResponse::with_message(trainer.into(), "Trainer updated"))
}

/// DELETE /trainers/{id} - Courses and sessions keep running without a trainer
///
/// # Responses
///
/// * 204 No Content - Trainer deleted
/// * 404 Not Found - Trainer does not exist
#[axum::debug_handler]
async fn delete_trainer(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = TrainerId::try_from(id.as_str())?;
    state.trainers.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
