//! Identity checks
//!
//! Checks 1-3: gateway name, short name, default-parameter shape.

use serde_json::json;
use std::time::Instant;
use tracing::debug;

use crate::models::{CheckResult, ConformanceCheck, Gateway};

/// Check 1: the gateway name must be non-empty text.
pub fn check_gateway_name<G: Gateway>(gateway: &G) -> CheckResult {
    let start = Instant::now();
    let name = gateway.name().to_string();
    let duration_ms = start.elapsed().as_millis() as u64;

    debug!("Gateway name: {name:?}");
    if name.trim().is_empty() {
        CheckResult::fail(
            ConformanceCheck::GatewayName,
            duration_ms,
            format!("gateway name must be non-empty, got {name:?}"),
        )
    } else {
        CheckResult::pass(ConformanceCheck::GatewayName, duration_ms)
    }
}

/// Check 2: the short name must be non-empty text.
pub fn check_short_name<G: Gateway>(gateway: &G) -> CheckResult {
    let start = Instant::now();
    let short_name = gateway.short_name().to_string();
    let duration_ms = start.elapsed().as_millis() as u64;

    debug!("Gateway short name: {short_name:?}");
    if short_name.trim().is_empty() {
        CheckResult::fail(
            ConformanceCheck::ShortName,
            duration_ms,
            format!("gateway short name must be non-empty, got {short_name:?}"),
        )
    } else {
        CheckResult::pass(ConformanceCheck::ShortName, duration_ms)
    }
}

/// Check 3: the default-parameter mapping is enumerable as key/value pairs.
///
/// The container shape is guaranteed by the trait signature; this check
/// records the observed parameter set so a report shows what was covered.
pub fn check_default_parameters<G: Gateway>(gateway: &G) -> CheckResult {
    let start = Instant::now();
    let parameters = gateway.default_parameters();
    let duration_ms = start.elapsed().as_millis() as u64;

    let mut keys: Vec<&String> = parameters.keys().collect();
    keys.sort();

    CheckResult::pass(ConformanceCheck::DefaultParameters, duration_ms)
        .with_message(format!("{} default parameter(s)", parameters.len()))
        .with_details(json!({ "keys": keys }))
}
