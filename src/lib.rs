//! Typed request datatypes for the Amazon MWS API.
//!
//! Each datatype is a [`Record`] with a fixed, ordered field list. Records
//! validate their fields when constructed and flatten into the dotted
//! PascalCase parameters MWS expects, e.g.
//! `PriceToEstimateFees.ListingPrice.Amount`.
//!
//! # Quick start
//!
//! ```
//! use mws_datatypes::{FeesEstimateRequest, MoneyType, PriceToEstimateFees, Record};
//!
//! let price = PriceToEstimateFees::new(
//!     Some(MoneyType::new(Some(10.0), Some("USD")).unwrap()),
//!     None,
//!     None,
//! );
//! let request = FeesEstimateRequest::builder()
//!     .id_type("ASIN")
//!     .id_value("B00EXAMPLE")
//!     .price_to_estimate_fees(price)
//!     .build()
//!     .unwrap();
//!
//! let params = request.flatten("");
//! assert!(params.contains_key("PriceToEstimateFees.ListingPrice.Amount"));
//! ```

pub mod config;
pub mod error;
pub mod marketplaces;
pub mod models;
pub mod operations;
pub mod params;
pub mod record;

pub use error::{DatatypeError, Result};
pub use marketplaces::{MarketplaceLookup, Marketplaces};
pub use models::{
    FeesEstimateRequest, FeesEstimateRequestBuilder, IdType, MoneyType, Points,
    PriceToEstimateFees,
};
pub use params::{ParamBuilder, ParamValue, Params};
pub use record::{flatten, snake_to_camel, FieldRef, Record, Value};
