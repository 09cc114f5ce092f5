// src/services/pricing_service.rs

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::RateSource,
    models::{DailyRate, DiscountRule},
    services::rate_resolver::resolve_lowest_rates,
};

#[derive(Clone)]
pub struct PricingService {
    source: Arc<dyn RateSource>,
}

impl PricingService {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    /// Busca quarto, overrides do intervalo e descontos vinculados, e calcula
    /// a menor tarifa de cada dia.
    pub async fn lowest_rates(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyRate>, AppError> {
        let room = self
            .source
            .get_room(room_id)
            .await?
            .ok_or(AppError::RoomNotFound)?;

        if start_date > end_date {
            tracing::debug!(room_id, %start_date, %end_date, "Intervalo invertido, nada a calcular");
            return Ok(Vec::new());
        }

        let overrides = self.source.get_overrides(room_id, start_date, end_date).await?;
        let discounts: Vec<DiscountRule> = self
            .source
            .get_linked_discounts(room_id)
            .await?
            .iter()
            .map(|d| d.rule())
            .collect();

        tracing::debug!(
            room_id,
            overrides = overrides.len(),
            discounts = discounts.len(),
            "Calculando menores tarifas"
        );

        Ok(resolve_lowest_rates(&room, &overrides, &discounts, start_date, end_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::InMemoryRateSource,
        models::{Discount, DiscountType, RateOverride, Room},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn money(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn service(source: InMemoryRateSource) -> PricingService {
        PricingService::new(Arc::new(source))
    }

    fn deluxe_hotel() -> InMemoryRateSource {
        InMemoryRateSource::new()
            .with_room(Room { room_id: 1, room_name: "Deluxe".into(), default_rate: money("100.00") })
            .with_room(Room { room_id: 2, room_name: "Standard".into(), default_rate: money("60.00") })
            .with_override(RateOverride { room_id: 1, stay_date: day("2024-07-11"), overridden_rate: money("80.00") })
            .with_override(RateOverride { room_id: 2, stay_date: day("2024-07-11"), overridden_rate: money("40.00") })
            .with_discount(Discount {
                discount_id: 7,
                discount_name: "Summer".into(),
                discount_type: DiscountType::Percentage,
                discount_value: money("10.00"),
            })
            .with_discount(Discount {
                discount_id: 8,
                discount_name: "Loyalty".into(),
                discount_type: DiscountType::Fixed,
                discount_value: money("50.00"),
            })
            .with_link(1, 7)
            .with_link(2, 8)
    }

    #[tokio::test]
    async fn resolves_with_the_room_own_overrides_and_discounts() {
        let rates = service(deluxe_hotel())
            .lowest_rates(1, day("2024-07-10"), day("2024-07-12"))
            .await
            .unwrap();

        let values: Vec<String> = rates.iter().map(|r| r.lowest_rate.to_string()).collect();
        assert_eq!(values, ["90.00", "72.00", "90.00"]);
    }

    #[tokio::test]
    async fn fixed_discount_larger_than_override_floors_at_zero() {
        let rates = service(deluxe_hotel())
            .lowest_rates(2, day("2024-07-10"), day("2024-07-11"))
            .await
            .unwrap();

        let values: Vec<String> = rates.iter().map(|r| r.lowest_rate.to_string()).collect();
        assert_eq!(values, ["10.00", "0.00"]);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let result = service(deluxe_hotel())
            .lowest_rates(99, day("2024-07-10"), day("2024-07-12"))
            .await;

        assert!(matches!(result, Err(AppError::RoomNotFound)));
    }

    #[tokio::test]
    async fn reversed_range_returns_empty_list() {
        let rates = service(deluxe_hotel())
            .lowest_rates(1, day("2024-07-12"), day("2024-07-10"))
            .await
            .unwrap();

        assert!(rates.is_empty());
    }
}
