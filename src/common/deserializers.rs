use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Converte um valor JSON qualquer em `Decimal`.
/// Números e strings numéricas são aceitos; o resto vira zero.
pub fn value_to_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()).unwrap_or_default(),
        Value::String(s) => parse_decimal(s.trim()).unwrap_or_default(),
        _ => Decimal::ZERO,
    }
}

// "300", "300.5", "1e5" e "-2.5E-3"
fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// Deserializers tolerantes para `#[serde(deserialize_with = "de::...")]`.
pub mod de {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// 300 -> 300, "300" -> 300, null/"abc"/{} -> 0
    pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::value_to_decimal(&value))
    }

    /// "Total Notas" -> "Total Notas", null/123 -> ""
    pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => s,
            _ => String::new(),
        })
    }
}
