// src/models/discount.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Mapeia o enum 'discount_type' do Postgres.
// Um tipo desconhecido é rejeitado já na desserialização (JSON ou banco).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "discount_type", rename_all = "lowercase")] // Banco
#[serde(rename_all = "lowercase")] // JSON
pub enum DiscountType {
    Fixed,      // Vira "fixed"
    Percentage, // Vira "percentage"
}

// --- Desconto (tabela 'discounts') ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Discount {
    pub discount_id: i32,
    pub discount_name: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
}

// Um item do POST de vínculos: {"room_id": 1, "discounts": [1, 2]}
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDiscountAssignment {
    pub room_id: i32,
    pub discounts: Vec<i32>,
}

/// Regra de desconto já tipada, consumida pelo cálculo de tarifas.
///
/// `Fixed` carrega um valor em moeda; `Percentage` carrega a taxa (0 a 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountRule {
    Fixed(Decimal),
    Percentage(Decimal),
}

impl DiscountRule {
    /// Quanto esta regra desconta de um preço base, em moeda.
    pub fn amount_off(&self, base_price: Decimal) -> Decimal {
        match *self {
            DiscountRule::Fixed(amount) => amount,
            DiscountRule::Percentage(rate) => base_price * rate / Decimal::ONE_HUNDRED,
        }
    }
}

impl Discount {
    pub fn rule(&self) -> DiscountRule {
        match self.discount_type {
            DiscountType::Fixed => DiscountRule::Fixed(self.discount_value),
            DiscountType::Percentage => DiscountRule::Percentage(self.discount_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn discount(discount_type: DiscountType, value: Decimal) -> Discount {
        Discount {
            discount_id: 1,
            discount_name: "Summer".to_string(),
            discount_type,
            discount_value: value,
        }
    }

    #[test]
    fn fixed_discount_ignores_base_price() {
        let rule = discount(DiscountType::Fixed, money("15.00")).rule();
        assert_eq!(rule, DiscountRule::Fixed(money("15.00")));
        assert_eq!(rule.amount_off(money("100.00")), money("15.00"));
        assert_eq!(rule.amount_off(money("5.00")), money("15.00"));
    }

    #[test]
    fn percentage_discount_scales_with_base_price() {
        let rule = discount(DiscountType::Percentage, money("10")).rule();
        assert_eq!(rule.amount_off(money("80.00")), money("8"));
        assert_eq!(rule.amount_off(money("0.00")), Decimal::ZERO);
    }

    #[test]
    fn discount_type_uses_lowercase_tags() {
        let json = serde_json::to_string(&DiscountType::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");

        let parsed: DiscountType = serde_json::from_str("\"fixed\"").unwrap();
        assert_eq!(parsed, DiscountType::Fixed);

        assert!(serde_json::from_str::<DiscountType>("\"bogo\"").is_err());
    }
}
