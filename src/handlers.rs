use rust_decimal::Decimal;
use validator::ValidationError;

pub mod discounts;
pub mod overrides;
pub mod rates;
pub mod rooms;

// Colunas NUMERIC(10, 2): no máximo 8 dígitos inteiros e 2 casas decimais
const MONEY_MAX_SCALE: u32 = 2;
const MONEY_UPPER_BOUND: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

// ---
// Validação compartilhada de valores monetários (tarifas e descontos):
// nunca negativos e sempre representáveis sem arredondamento no banco
// ---
fn validate_money(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("The value cannot be negative.".into());
        return Err(err);
    }
    if val.normalize().scale() > MONEY_MAX_SCALE {
        let mut err = ValidationError::new("decimal_places");
        err.add_param("max_decimal_places".into(), &MONEY_MAX_SCALE);
        err.message = Some("Ensure that there are no more than 2 decimal places.".into());
        return Err(err);
    }
    if *val >= MONEY_UPPER_BOUND {
        let mut err = ValidationError::new("max_digits");
        err.add_param("max_digits".into(), &10);
        err.message = Some("Ensure that there are no more than 10 digits in total.".into());
        return Err(err);
    }
    Ok(())
}
