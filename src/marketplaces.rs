//! Region-code to marketplace-id resolution.

use std::collections::HashMap;

use crate::config;

/// Resolves short region codes (`"US"`, `"UK"`, ...) to MWS marketplace ids.
pub trait MarketplaceLookup {
    /// Return the marketplace id registered for `code`, if any.
    fn marketplace_id(&self, code: &str) -> Option<&str>;
}

/// The built-in MWS marketplace table from [`config::MARKETPLACE_IDS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Marketplaces;

impl MarketplaceLookup for Marketplaces {
    fn marketplace_id(&self, code: &str) -> Option<&str> {
        config::MARKETPLACE_IDS
            .iter()
            .find(|(region, _)| *region == code)
            .map(|(_, id)| *id)
    }
}

impl MarketplaceLookup for HashMap<String, String> {
    fn marketplace_id(&self, code: &str) -> Option<&str> {
        self.get(code).map(String::as_str)
    }
}

/// Resolve `raw` through `lookup`, passing unknown values through unchanged.
pub fn resolve_marketplace(lookup: &dyn MarketplaceLookup, raw: String) -> String {
    match lookup.marketplace_id(&raw) {
        Some(id) => {
            tracing::trace!(region = %raw, marketplace_id = id, "resolved marketplace");
            id.to_string()
        }
        None => raw,
    }
}
