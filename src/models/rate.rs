// src/models/rate.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

// Uma linha da resposta de menores tarifas: {"date": "2024-07-10", "lowest_rate": "90.00"}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRate {
    pub date: NaiveDate,
    pub lowest_rate: Decimal,
}
