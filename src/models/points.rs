use serde::Serialize;

use crate::error::{DatatypeError, Result};
use crate::models::MoneyType;
use crate::record::{self, FieldRef, Record, Value};

// ---------------------------------------------------------------------------
// Points — Amazon Points offered with a purchase (Japan only)
// ---------------------------------------------------------------------------

/// The number of Amazon Points offered with the purchase of an item, and
/// optionally their monetary value.
///
/// MWS expects a positive `points_number`; the value is passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Points {
    #[serde(skip_serializing_if = "Option::is_none")]
    points_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    points_monetary_value: Option<MoneyType>,
}

impl Points {
    pub const FIELDS: &'static [&'static str] = &["points_number", "points_monetary_value"];

    pub fn new(points_number: Option<f64>, points_monetary_value: Option<MoneyType>) -> Self {
        Self {
            points_number,
            points_monetary_value,
        }
    }

    pub fn from_fields<I, K>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        record::from_fields(fields)
    }

    pub fn points_number(&self) -> Option<f64> {
        self.points_number
    }

    pub fn points_monetary_value(&self) -> Option<&MoneyType> {
        self.points_monetary_value.as_ref()
    }
}

impl Record for Points {
    fn record_name(&self) -> &'static str {
        "Points"
    }

    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "points_number" => Some(FieldRef::number(self.points_number)),
            "points_monetary_value" => Some(FieldRef::nested(self.points_monetary_value.as_ref())),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "points_number" => self.points_number = value.into_number("points_number")?,
            "points_monetary_value" => {
                self.points_monetary_value = value.into_money("points_monetary_value")?
            }
            _ => return Err(DatatypeError::undeclared(self.record_name(), name)),
        }
        Ok(())
    }
}
