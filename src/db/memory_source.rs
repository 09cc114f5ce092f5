// src/db/memory_source.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::{
    common::error::AppError,
    db::RateSource,
    models::{Discount, RateOverride, Room},
};

// Fixture em memória para os testes dos services.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRateSource {
    rooms: Vec<Room>,
    overrides: Vec<RateOverride>,
    discounts: Vec<Discount>,
    links: Vec<(i32, i32)>,
}

impl InMemoryRateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    pub fn with_override(mut self, rate_override: RateOverride) -> Self {
        self.overrides.push(rate_override);
        self
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discounts.push(discount);
        self
    }

    pub fn with_link(mut self, room_id: i32, discount_id: i32) -> Self {
        self.links.push((room_id, discount_id));
        self
    }
}

#[async_trait]
impl RateSource for InMemoryRateSource {
    async fn get_room(&self, room_id: i32) -> Result<Option<Room>, AppError> {
        Ok(self.rooms.iter().find(|r| r.room_id == room_id).cloned())
    }

    async fn get_overrides(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateOverride>, AppError> {
        Ok(self
            .overrides
            .iter()
            .filter(|o| o.room_id == room_id && o.stay_date >= start_date && o.stay_date <= end_date)
            .cloned()
            .collect())
    }

    async fn get_linked_discounts(&self, room_id: i32) -> Result<Vec<Discount>, AppError> {
        Ok(self
            .discounts
            .iter()
            .filter(|d| self.links.contains(&(room_id, d.discount_id)))
            .cloned()
            .collect())
    }
}
