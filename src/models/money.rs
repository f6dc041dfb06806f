use serde::Serialize;

use crate::config;
use crate::error::{DatatypeError, Result};
use crate::record::{self, FieldRef, Record, Value};

// ---------------------------------------------------------------------------
// MoneyType — An amount of money in a specified currency
// ---------------------------------------------------------------------------

/// An amount of money in a specified currency.
///
/// `currency_code`, when present, must be one of [`config::CURRENCY_CODES`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoneyType {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency_code: Option<String>,
}

impl MoneyType {
    pub const FIELDS: &'static [&'static str] = &["amount", "currency_code"];

    pub fn new(amount: Option<f64>, currency_code: Option<&str>) -> Result<Self> {
        Ok(Self {
            amount,
            currency_code: check_currency_code(currency_code.map(str::to_string))?,
        })
    }

    /// Build from `(field_name, value)` pairs; unknown names fail with
    /// `UndeclaredField`.
    pub fn from_fields<I, K>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        record::from_fields(fields)
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }
}

fn check_currency_code(code: Option<String>) -> Result<Option<String>> {
    match code {
        Some(c) if !config::is_currency_code(&c) => Err(DatatypeError::invalid_value(
            "currency_code",
            format!("must be one of the following: {}", config::currency_code_list()),
        )),
        other => Ok(other),
    }
}

impl Record for MoneyType {
    fn record_name(&self) -> &'static str {
        "MoneyType"
    }

    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "amount" => Some(FieldRef::number(self.amount)),
            "currency_code" => Some(FieldRef::text(self.currency_code.as_deref())),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "amount" => self.amount = value.into_number("amount")?,
            "currency_code" => {
                self.currency_code = check_currency_code(value.into_text("currency_code")?)?
            }
            _ => return Err(DatatypeError::undeclared(self.record_name(), name)),
        }
        Ok(())
    }
}
