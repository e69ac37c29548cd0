//! Trainer DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::validate_phone;
use crate::domain::models::trainer::{CreateTrainerData, Trainer, UpdateTrainerData};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainerDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 150, message = "specialty must be at most 150 characters"))]
    pub specialty: Option<String>,
}

impl From<CreateTrainerDto> for CreateTrainerData {
    fn from(dto: CreateTrainerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
            email: dto.email,
            specialty: dto.specialty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainerDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 150, message = "specialty must be at most 150 characters"))]
    pub specialty: Option<String>,
}

impl From<UpdateTrainerDto> for UpdateTrainerData {
    fn from(dto: UpdateTrainerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
            email: dto.email,
            specialty: dto.specialty,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerResponseDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trainer> for TrainerResponseDto {
    fn from(trainer: Trainer) -> Self {
        Self {
            id: *trainer.id().as_uuid(),
            first_name: trainer.first_name().to_string(),
            last_name: trainer.last_name().to_string(),
            phone: trainer.phone().map(ToString::to_string),
            email: trainer.email().map(ToString::to_string),
            specialty: trainer.specialty().map(ToString::to_string),
            created_at: trainer.created_at(),
            updated_at: trainer.updated_at(),
        }
    }
}
