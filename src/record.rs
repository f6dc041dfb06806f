//! The fixed-field record abstraction and the recursive parameter flattener.
//!
//! Every datatype declares its complete, ordered field list once. Fields are
//! read back as [`FieldRef`] values, written through [`Record::set`] with an
//! owned [`Value`], and flattened into dotted PascalCase keys:
//!
//! ```rust
//! use mws_datatypes::{MoneyType, Record};
//!
//! let price = MoneyType::new(Some(10.0), Some("USD")).unwrap();
//! let params = price.flatten("ListingPrice");
//! assert_eq!(params.get("ListingPrice.CurrencyCode").unwrap().to_string(), "USD");
//! ```

use std::fmt;

use crate::error::{DatatypeError, Result};
use crate::models::{MoneyType, Points, PriceToEstimateFees};
use crate::params::{ParamValue, Params};

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A record with a closed, ordered set of named fields.
///
/// Records hold only owned, immutable-in-practice data, so they are shareable
/// across threads and `FieldRef` views over them are too.
pub trait Record: fmt::Debug + Send + Sync {
    /// Type name used in error messages.
    fn record_name(&self) -> &'static str;

    /// Declared field names, in declaration order.
    fn fields(&self) -> &'static [&'static str];

    /// Current value of a declared field, or `None` for an undeclared name.
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Assign a declared field through the same validation the constructor
    /// applies.
    fn set(&mut self, name: &str, value: Value) -> Result<()>;

    /// Current value of `name`; fails with `UndeclaredField` for unknown names.
    fn get(&self, name: &str) -> Result<FieldRef<'_>> {
        self.field(name)
            .ok_or_else(|| DatatypeError::undeclared(self.record_name(), name))
    }

    /// `(name, value)` pairs for every declared field, in declaration order.
    fn entries(&self) -> Vec<(&'static str, FieldRef<'_>)> {
        self.fields()
            .iter()
            .map(|name| (*name, self.field(name).unwrap_or(FieldRef::Null)))
            .collect()
    }

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    /// Flatten into a single-level parameter map, see [`flatten`].
    fn flatten(&self, prefix: &str) -> Params {
        flatten(self, prefix)
    }
}

// ---------------------------------------------------------------------------
// FieldRef — borrowed view of a field value
// ---------------------------------------------------------------------------

/// A field value read from a [`Record`]: absent, a scalar leaf, or a nested record.
#[derive(Debug, Clone)]
pub enum FieldRef<'a> {
    Null,
    Scalar(ParamValue),
    Record(&'a dyn Record),
}

impl<'a> FieldRef<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldRef::Null)
    }

    pub fn as_scalar(&self) -> Option<&ParamValue> {
        match self {
            FieldRef::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            FieldRef::Record(r) => Some(*r),
            _ => None,
        }
    }

    pub(crate) fn text(value: Option<&str>) -> Self {
        value.map_or(FieldRef::Null, |s| FieldRef::Scalar(ParamValue::from(s)))
    }

    pub(crate) fn number(value: Option<f64>) -> Self {
        value.map_or(FieldRef::Null, |n| FieldRef::Scalar(ParamValue::from(n)))
    }

    pub(crate) fn nested<R: Record>(value: Option<&'a R>) -> Self {
        value.map_or(FieldRef::Null, |r| FieldRef::Record(r))
    }
}

// ---------------------------------------------------------------------------
// Value — owned, dynamically-typed field input
// ---------------------------------------------------------------------------

/// An owned field value handed to [`Record::set`] or a `from_fields` constructor.
///
/// Each record checks the variant it receives, so a raw number where a
/// `MoneyType` is expected fails with `InvalidType`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
    Money(MoneyType),
    Points(Points),
    PriceToEstimateFees(PriceToEstimateFees),
}

/// Largest integer magnitude an `f64` holds without rounding (2^53).
const MAX_EXACT_INTEGER: u64 = 1 << 53;

impl Value {
    /// Truthiness used when normalizing flags: zero, empty text and `Null`
    /// are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Decimal(n) => *n != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::Money(_) | Value::Points(_) | Value::PriceToEstimateFees(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub(crate) fn into_number(self, field: &'static str) -> Result<Option<f64>> {
        match self {
            Value::Null => Ok(None),
            Value::Integer(n) if n.unsigned_abs() > MAX_EXACT_INTEGER => {
                Err(DatatypeError::invalid_value(
                    field,
                    format!("integer {} cannot be represented exactly", n),
                ))
            }
            Value::Integer(n) => Ok(Some(n as f64)),
            Value::Decimal(n) => Ok(Some(n)),
            _ => Err(DatatypeError::invalid_type(field, "a number")),
        }
    }

    pub(crate) fn into_text(self, field: &'static str) -> Result<Option<String>> {
        match self {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s)),
            Value::Integer(n) => Ok(Some(n.to_string())),
            Value::Decimal(n) => Ok(Some(n.to_string())),
            _ => Err(DatatypeError::invalid_type(field, "a string")),
        }
    }

    pub(crate) fn into_money(self, field: &'static str) -> Result<Option<MoneyType>> {
        match self {
            Value::Null => Ok(None),
            Value::Money(m) => Ok(Some(m)),
            _ => Err(DatatypeError::invalid_type(field, "a MoneyType")),
        }
    }

    pub(crate) fn into_points(self, field: &'static str) -> Result<Option<Points>> {
        match self {
            Value::Null => Ok(None),
            Value::Points(p) => Ok(Some(p)),
            _ => Err(DatatypeError::invalid_type(field, "a Points")),
        }
    }

    pub(crate) fn into_price(self, field: &'static str) -> Result<Option<PriceToEstimateFees>> {
        match self {
            Value::Null => Ok(None),
            Value::PriceToEstimateFees(p) => Ok(Some(p)),
            _ => Err(DatatypeError::invalid_type(field, "a PriceToEstimateFees")),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<MoneyType> for Value {
    fn from(v: MoneyType) -> Self {
        Value::Money(v)
    }
}

impl From<Points> for Value {
    fn from(v: Points) -> Self {
        Value::Points(v)
    }
}

impl From<PriceToEstimateFees> for Value {
    fn from(v: PriceToEstimateFees) -> Self {
        Value::PriceToEstimateFees(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Flattening
// ---------------------------------------------------------------------------

/// Flatten `record` into a single-level map of dotted PascalCase keys.
///
/// A non-empty `prefix` gets a trailing `.` if it lacks one. Null fields emit
/// nothing; nested records are flattened under their own key and merged.
pub fn flatten<R: Record + ?Sized>(record: &R, prefix: &str) -> Params {
    let prefix = normalize_prefix(prefix);
    let mut output = Params::new();
    for (name, value) in record.entries() {
        let key = format!("{}{}", prefix, snake_to_camel(name));
        match value {
            FieldRef::Null => continue,
            FieldRef::Record(nested) => output.merge(flatten(nested, &key)),
            FieldRef::Scalar(v) => {
                output.insert(key, v);
            }
        }
    }
    tracing::trace!(
        record = record.record_name(),
        prefix = %prefix,
        keys = output.len(),
        "flattened record"
    );
    output
}

/// Convert `snake_case` to `PascalCase` by title-casing each `_` segment.
///
/// The first letter is capitalized too: `points_monetary_value` becomes
/// `PointsMonetaryValue`.
pub fn snake_to_camel(name: &str) -> String {
    name.split('_').map(title_case).collect()
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_alpha = false;
    for c in segment.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// `""` stays empty; anything else ends with exactly the `.` it already had or
/// one appended.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('.') {
        prefix.to_string()
    } else {
        format!("{}.", prefix)
    }
}

/// Build a `Default` record by assigning each `(name, value)` pair through
/// [`Record::set`].
pub fn from_fields<R, I, K>(fields: I) -> Result<R>
where
    R: Record + Default,
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    let mut record = R::default();
    for (name, value) in fields {
        record.set(name.as_ref(), value)?;
    }
    Ok(record)
}
