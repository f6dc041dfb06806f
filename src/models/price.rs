use serde::Serialize;

use crate::error::{DatatypeError, Result};
use crate::models::{MoneyType, Points};
use crate::record::{self, FieldRef, Record, Value};

// ---------------------------------------------------------------------------
// PriceToEstimateFees — Price information used to estimate fees
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceToEstimateFees {
    #[serde(skip_serializing_if = "Option::is_none")]
    listing_price: Option<MoneyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping: Option<MoneyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Points>,
}

impl PriceToEstimateFees {
    pub const FIELDS: &'static [&'static str] = &["listing_price", "shipping", "points"];

    pub fn new(
        listing_price: Option<MoneyType>,
        shipping: Option<MoneyType>,
        points: Option<Points>,
    ) -> Self {
        Self {
            listing_price,
            shipping,
            points,
        }
    }

    pub fn from_fields<I, K>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        record::from_fields(fields)
    }

    pub fn listing_price(&self) -> Option<&MoneyType> {
        self.listing_price.as_ref()
    }

    pub fn shipping(&self) -> Option<&MoneyType> {
        self.shipping.as_ref()
    }

    pub fn points(&self) -> Option<&Points> {
        self.points.as_ref()
    }
}

impl Record for PriceToEstimateFees {
    fn record_name(&self) -> &'static str {
        "PriceToEstimateFees"
    }

    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "listing_price" => Some(FieldRef::nested(self.listing_price.as_ref())),
            "shipping" => Some(FieldRef::nested(self.shipping.as_ref())),
            "points" => Some(FieldRef::nested(self.points.as_ref())),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "listing_price" => self.listing_price = value.into_money("listing_price")?,
            "shipping" => self.shipping = value.into_money("shipping")?,
            "points" => self.points = value.into_points("points")?,
            _ => return Err(DatatypeError::undeclared(self.record_name(), name)),
        }
        Ok(())
    }
}
