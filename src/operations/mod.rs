//! Parameter assembly for individual MWS API actions.
//!
//! Each function returns the complete parameter map for one call, ready for a
//! transport to sign and send.

pub mod products;
