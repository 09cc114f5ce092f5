// src/services/rate_resolver.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{DailyRate, DiscountRule, RateOverride, Room};

/// Calcula a menor tarifa de cada dia em `[start_date, end_date]`.
///
/// Para cada dia: o preço base é o menor override do quarto naquele dia (ou a
/// `default_rate`); aplica-se apenas o maior desconto entre os vinculados, e o
/// resultado nunca fica abaixo de zero. Intervalo invertido devolve lista vazia.
pub fn resolve_lowest_rates(
    room: &Room,
    overrides: &[RateOverride],
    discounts: &[DiscountRule],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<DailyRate> {
    // Agrupa os overrides por data antes do loop. Se houver mais de um no
    // mesmo dia, vale o menor.
    let mut base_by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for rate_override in overrides.iter().filter(|o| o.room_id == room.room_id) {
        base_by_date
            .entry(rate_override.stay_date)
            .and_modify(|rate| *rate = (*rate).min(rate_override.overridden_rate))
            .or_insert(rate_override.overridden_rate);
    }

    start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .map(|date| {
            let base_price = base_by_date.get(&date).copied().unwrap_or(room.default_rate);
            DailyRate {
                date,
                lowest_rate: apply_best_discount(base_price, discounts),
            }
        })
        .collect()
}

fn apply_best_discount(base_price: Decimal, discounts: &[DiscountRule]) -> Decimal {
    // Descontos não acumulam: só o maior vale.
    let best_discount = discounts
        .iter()
        .map(|rule| rule.amount_off(base_price))
        .fold(Decimal::ZERO, Decimal::max);

    let mut price = (base_price - best_discount)
        .max(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    price.rescale(2);
    price
}
