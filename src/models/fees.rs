use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config;
use crate::error::{DatatypeError, Result};
use crate::marketplaces::{resolve_marketplace, MarketplaceLookup, Marketplaces};
use crate::models::PriceToEstimateFees;
use crate::record::{FieldRef, Record, Value};

// ---------------------------------------------------------------------------
// IdType
// ---------------------------------------------------------------------------

/// Kind of product identifier carried in `FeesEstimateRequest::id_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdType {
    #[serde(rename = "ASIN")]
    Asin,
    #[serde(rename = "SellerSKU")]
    SellerSku,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Asin => "ASIN",
            IdType::SellerSku => "SellerSKU",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = DatatypeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ASIN" => Ok(IdType::Asin),
            "SellerSKU" => Ok(IdType::SellerSku),
            _ => Err(id_type_error()),
        }
    }
}

fn id_type_error() -> DatatypeError {
    let allowed = config::ID_TYPES
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(" or ");
    DatatypeError::invalid_value("id_type", format!("must be either {}", allowed))
}

fn parse_id_type(raw: Option<&str>) -> Result<IdType> {
    raw.map_or_else(|| Err(id_type_error()), str::parse::<IdType>)
}

fn require_id_value(raw: Option<String>) -> Result<String> {
    match raw {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DatatypeError::invalid_value("id_value", "`id_value` required")),
    }
}

/// Falsy input (`Null`, `0`, `""`, `false`) counts as missing.
fn require_id_value_from(value: Value) -> Result<String> {
    if !value.is_truthy() {
        return require_id_value(None);
    }
    require_id_value(value.into_text("id_value")?)
}

fn bool_str(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

// ---------------------------------------------------------------------------
// FeesEstimateRequest
// ---------------------------------------------------------------------------

/// A product, marketplace, and proposed price used to request estimated fees.
///
/// Construct with [`FeesEstimateRequest::builder()`]:
///
/// ```rust
/// use mws_datatypes::{FeesEstimateRequest, MoneyType, PriceToEstimateFees, Record};
///
/// let request = FeesEstimateRequest::builder()
///     .marketplace("US")
///     .id_type("ASIN")
///     .id_value("B00EXAMPLE")
///     .price_to_estimate_fees(PriceToEstimateFees::new(
///         Some(MoneyType::new(Some(10.0), Some("USD")).unwrap()),
///         None,
///         None,
///     ))
///     .is_amazon_fulfilled(true)
///     .build()
///     .unwrap();
///
/// let params = request.flatten("");
/// assert_eq!(params.get("MarketplaceId").unwrap().to_string(), "ATVPDKIKX0DER");
/// assert_eq!(params.get("IsAmazonFulfilled").unwrap().to_string(), "true");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    marketplace_id: Option<String>,
    id_type: IdType,
    id_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_to_estimate_fees: Option<PriceToEstimateFees>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_amazon_fulfilled: Option<&'static str>,
}

impl FeesEstimateRequest {
    pub const FIELDS: &'static [&'static str] = &[
        "marketplace_id",
        "id_type",
        "id_value",
        "price_to_estimate_fees",
        "identifier",
        "is_amazon_fulfilled",
    ];

    pub fn builder() -> FeesEstimateRequestBuilder {
        FeesEstimateRequestBuilder::default()
    }

    /// Build from `(field_name, value)` pairs using the built-in marketplace table.
    ///
    /// `id_type` is checked before any other field. Unknown names fail with
    /// `UndeclaredField`.
    pub fn from_fields<I, K>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        Self::from_fields_with(fields, &Marketplaces)
    }

    pub fn from_fields_with<I, K>(fields: I, lookup: &dyn MarketplaceLookup) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut slots: [Value; 6] = Default::default();
        for (name, value) in fields {
            let name = name.as_ref();
            let idx = Self::FIELDS
                .iter()
                .position(|f| *f == name)
                .ok_or_else(|| DatatypeError::undeclared("FeesEstimateRequest", name))?;
            slots[idx] = value;
        }
        let [marketplace_id, id_type, id_value, price, identifier, fulfilled] = slots;

        let id_type = match id_type {
            Value::Text(s) => s.parse::<IdType>()?,
            _ => return Err(id_type_error()),
        };
        let marketplace_id = marketplace_id
            .into_text("marketplace_id")?
            .map(|m| resolve_marketplace(lookup, m));
        let id_value = require_id_value_from(id_value)?;
        let price_to_estimate_fees = price.into_price("price_to_estimate_fees")?;
        let identifier = identifier.into_text("identifier")?;
        let is_amazon_fulfilled = (!fulfilled.is_null()).then(|| bool_str(fulfilled.is_truthy()));

        Ok(Self {
            marketplace_id,
            id_type,
            id_value,
            price_to_estimate_fees,
            identifier,
            is_amazon_fulfilled,
        })
    }

    pub fn marketplace_id(&self) -> Option<&str> {
        self.marketplace_id.as_deref()
    }

    pub fn id_type(&self) -> IdType {
        self.id_type
    }

    pub fn id_value(&self) -> &str {
        &self.id_value
    }

    pub fn price_to_estimate_fees(&self) -> Option<&PriceToEstimateFees> {
        self.price_to_estimate_fees.as_ref()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// `"true"`, `"false"`, or `None` when unset.
    pub fn is_amazon_fulfilled(&self) -> Option<&'static str> {
        self.is_amazon_fulfilled
    }
}

impl Record for FeesEstimateRequest {
    fn record_name(&self) -> &'static str {
        "FeesEstimateRequest"
    }

    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "marketplace_id" => Some(FieldRef::text(self.marketplace_id.as_deref())),
            "id_type" => Some(FieldRef::text(Some(self.id_type.as_str()))),
            "id_value" => Some(FieldRef::text(Some(self.id_value.as_str()))),
            "price_to_estimate_fees" => {
                Some(FieldRef::nested(self.price_to_estimate_fees.as_ref()))
            }
            "identifier" => Some(FieldRef::text(self.identifier.as_deref())),
            "is_amazon_fulfilled" => Some(FieldRef::text(self.is_amazon_fulfilled)),
            _ => None,
        }
    }

    /// `marketplace_id` is resolved against the built-in [`Marketplaces`]
    /// table, whatever lookup the request was originally built with.
    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "marketplace_id" => {
                self.marketplace_id = value
                    .into_text("marketplace_id")?
                    .map(|m| resolve_marketplace(&Marketplaces, m))
            }
            "id_type" => {
                self.id_type = match value {
                    Value::Text(s) => s.parse::<IdType>()?,
                    _ => return Err(id_type_error()),
                }
            }
            "id_value" => self.id_value = require_id_value_from(value)?,
            "price_to_estimate_fees" => {
                self.price_to_estimate_fees = value.into_price("price_to_estimate_fees")?
            }
            "identifier" => self.identifier = value.into_text("identifier")?,
            "is_amazon_fulfilled" => {
                self.is_amazon_fulfilled = (!value.is_null()).then(|| bool_str(value.is_truthy()))
            }
            _ => return Err(DatatypeError::undeclared(self.record_name(), name)),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FeesEstimateRequestBuilder
// ---------------------------------------------------------------------------

/// Builder for [`FeesEstimateRequest`]. All validation happens in
/// [`build()`](FeesEstimateRequestBuilder::build).
#[derive(Debug, Default)]
pub struct FeesEstimateRequestBuilder {
    marketplace: Option<String>,
    id_type: Option<String>,
    id_value: Option<String>,
    price_to_estimate_fees: Option<PriceToEstimateFees>,
    identifier: Option<String>,
    is_amazon_fulfilled: Option<bool>,
}

impl FeesEstimateRequestBuilder {
    /// Region code (`"US"`, `"JP"`, ...) or a raw marketplace id.
    pub fn marketplace(mut self, marketplace: impl Into<String>) -> Self {
        self.marketplace = Some(marketplace.into());
        self
    }

    /// `"ASIN"` or `"SellerSKU"`. Required.
    pub fn id_type(mut self, id_type: impl Into<String>) -> Self {
        self.id_type = Some(id_type.into());
        self
    }

    /// The ASIN or SKU being priced. Required and non-empty.
    pub fn id_value(mut self, id_value: impl Into<String>) -> Self {
        self.id_value = Some(id_value.into());
        self
    }

    pub fn price_to_estimate_fees(mut self, price: PriceToEstimateFees) -> Self {
        self.price_to_estimate_fees = Some(price);
        self
    }

    /// A caller-chosen value identifying this request in the response.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn is_amazon_fulfilled(mut self, fulfilled: bool) -> Self {
        self.is_amazon_fulfilled = Some(fulfilled);
        self
    }

    /// Validate and build, resolving the marketplace against [`Marketplaces`].
    pub fn build(self) -> Result<FeesEstimateRequest> {
        self.build_with(&Marketplaces)
    }

    /// Validate and build, resolving the marketplace against `lookup`.
    ///
    /// The lookup is not retained: a later `Record::set("marketplace_id", ..)`
    /// resolves against [`Marketplaces`].
    pub fn build_with(self, lookup: &dyn MarketplaceLookup) -> Result<FeesEstimateRequest> {
        let id_type = parse_id_type(self.id_type.as_deref())?;
        let id_value = require_id_value(self.id_value)?;
        Ok(FeesEstimateRequest {
            marketplace_id: self.marketplace.map(|m| resolve_marketplace(lookup, m)),
            id_type,
            id_value,
            price_to_estimate_fees: self.price_to_estimate_fees,
            identifier: self.identifier,
            is_amazon_fulfilled: self.is_amazon_fulfilled.map(bool_str),
        })
    }
}
