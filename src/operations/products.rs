//! Products API actions.

use crate::config;
use crate::error::{DatatypeError, Result};
use crate::models::FeesEstimateRequest;
use crate::params::{ParamBuilder, Params};

/// Prefix under which each request of a `GetMyFeesEstimate` call is numbered.
pub const FEES_ESTIMATE_REQUEST_LIST: &str = "FeesEstimateRequestList.FeesEstimateRequest";

/// Path the transport sends Products API actions to.
pub fn path() -> &'static str {
    config::PRODUCTS_PATH
}

/// Parameters for `GetMyFeesEstimate`.
///
/// Each request is flattened under
/// `FeesEstimateRequestList.FeesEstimateRequest.<n>`, numbered from 1. MWS
/// accepts between 1 and [`config::MAX_FEES_ESTIMATE_REQUESTS`] requests per call.
pub fn get_my_fees_estimate(requests: &[FeesEstimateRequest]) -> Result<Params> {
    if requests.is_empty() {
        return Err(DatatypeError::invalid_value(
            "fees_estimate_request_list",
            "at least one FeesEstimateRequest is required",
        ));
    }
    if requests.len() > config::MAX_FEES_ESTIMATE_REQUESTS {
        return Err(DatatypeError::invalid_value(
            "fees_estimate_request_list",
            format!(
                "at most {} FeesEstimateRequests are accepted, got {}",
                config::MAX_FEES_ESTIMATE_REQUESTS,
                requests.len()
            ),
        ));
    }

    let params = ParamBuilder::new()
        .action("GetMyFeesEstimate")
        .set("Version", config::PRODUCTS_VERSION)
        .records(FEES_ESTIMATE_REQUEST_LIST, requests)
        .build();
    tracing::debug!(requests = requests.len(), keys = params.len(), "built GetMyFeesEstimate");
    Ok(params)
}
