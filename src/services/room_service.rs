// src/services/room_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{OverrideRepository, RoomRepository},
    models::{RateOverride, Room},
};

// Quartos e suas tarifas específicas por data (overrides)
#[derive(Clone)]
pub struct RoomService {
    room_repo: RoomRepository,
    override_repo: OverrideRepository,
}

impl RoomService {
    pub fn new(room_repo: RoomRepository, override_repo: OverrideRepository) -> Self {
        Self { room_repo, override_repo }
    }

    // --- ROOMS ---

    pub async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        self.room_repo.list().await
    }

    pub async fn get_room(&self, room_id: i32) -> Result<Room, AppError> {
        self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or(AppError::RoomNotFound)
    }

    pub async fn create_room(&self, room_name: &str, default_rate: Decimal) -> Result<Room, AppError> {
        let room = self.room_repo.create(room_name, default_rate).await?;
        tracing::info!(room_id = room.room_id, "Quarto criado");
        Ok(room)
    }

    pub async fn update_room(
        &self,
        room_id: i32,
        room_name: Option<&str>,
        default_rate: Option<Decimal>,
    ) -> Result<Room, AppError> {
        self.room_repo
            .update(room_id, room_name, default_rate)
            .await?
            .ok_or(AppError::RoomNotFound)
    }

    pub async fn delete_room(&self, room_id: i32) -> Result<(), AppError> {
        if !self.room_repo.delete(room_id).await? {
            return Err(AppError::RoomNotFound);
        }
        tracing::info!(room_id, "Quarto removido (overrides e vínculos em cascata)");
        Ok(())
    }

    // --- OVERRIDES ---

    pub async fn list_overrides(&self, room_id: i32) -> Result<Vec<RateOverride>, AppError> {
        self.get_room(room_id).await?;
        self.override_repo.list_for_room(room_id).await
    }

    pub async fn create_override(
        &self,
        room_id: i32,
        stay_date: NaiveDate,
        overridden_rate: Decimal,
    ) -> Result<RateOverride, AppError> {
        let created = self.override_repo.create(room_id, stay_date, overridden_rate).await?;
        tracing::info!(room_id, %stay_date, "Override de tarifa criado");
        Ok(created)
    }

    pub async fn update_override(
        &self,
        room_id: i32,
        stay_date: NaiveDate,
        overridden_rate: Decimal,
    ) -> Result<RateOverride, AppError> {
        self.get_room(room_id).await?;
        self.override_repo
            .update(room_id, stay_date, overridden_rate)
            .await?
            .ok_or(AppError::OverrideNotFound)
    }

    pub async fn delete_override(&self, room_id: i32, stay_date: NaiveDate) -> Result<(), AppError> {
        self.get_room(room_id).await?;
        if !self.override_repo.delete(room_id, stay_date).await? {
            return Err(AppError::OverrideNotFound);
        }
        Ok(())
    }
}
