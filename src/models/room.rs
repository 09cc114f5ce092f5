// src/models/room.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// --- Quarto (tabela 'rooms') ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub room_id: i32,
    pub room_name: String,
    pub default_rate: Decimal,
}

// --- Tarifa específica de um dia (tabela 'rate_overrides') ---
// Substitui a default_rate do quarto apenas na stay_date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RateOverride {
    pub room_id: i32,
    pub stay_date: NaiveDate,
    pub overridden_rate: Decimal,
}
