//! Parameter checks
//!
//! Checks 4-6: accessor symmetry across the default-parameter set, testMode
//! round-trip, and currency normalization.

use std::time::Instant;
use tracing::{debug, info};

use crate::models::{find_accessor, CheckResult, ConformanceCheck, Gateway};
use crate::utils::{getter_name, probe_for, setter_name};

/// Check 4: every default-parameter key has a registered getter/setter pair,
/// the setter returns the gateway itself, and the getter reads back the
/// probe value just written.
///
/// Runs per key with a fresh probe each time; keys only interact through
/// the gateway's own mutable fields.
pub fn check_accessor_symmetry<G: Gateway + 'static>(gateway: &mut G) -> CheckResult {
    info!("Running accessor symmetry check");
    let start = Instant::now();
    let mut all_passed = true;
    let mut details = Vec::new();

    for (key, default) in gateway.default_parameters() {
        // keys outside the grammar are a harness limitation, reported loudly
        let (getter, setter) = match (getter_name(&key), setter_name(&key)) {
            (Ok(getter), Ok(setter)) => (getter, setter),
            (Err(e), _) | (_, Err(e)) => {
                return CheckResult::error(ConformanceCheck::AccessorSymmetry, e.to_string());
            }
        };

        let Some(accessor) = find_accessor::<G>(&key) else {
            all_passed = false;
            details.push(format!(
                "✗ gateway must implement {getter}()/{setter}() for parameter {key:?}"
            ));
            continue;
        };

        let probe = probe_for(&default);
        debug!("Probing {key} via {setter}/{getter}");

        let gateway_ptr: *const G = gateway;
        let returned: *const G = (accessor.set)(gateway, probe.clone());
        if !std::ptr::eq(returned, gateway_ptr) {
            all_passed = false;
            details.push(format!("✗ {setter}() must return the gateway itself"));
            continue;
        }

        let read_back = (accessor.get)(gateway);
        if read_back == probe {
            details.push(format!("✓ {key}: {setter}()/{getter}() round-trip"));
        } else {
            all_passed = false;
            details.push(format!(
                "✗ {getter}() returned {read_back} after {setter}({probe})"
            ));
        }
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    let message = details.join("\n");

    if all_passed {
        CheckResult::pass(ConformanceCheck::AccessorSymmetry, duration_ms).with_message(message)
    } else {
        CheckResult::fail(ConformanceCheck::AccessorSymmetry, duration_ms, message)
    }
}

/// Check 5: testMode round-trips exactly for both values, fluently.
pub fn check_test_mode<G: Gateway>(gateway: &mut G) -> CheckResult {
    info!("Running test mode check");
    let start = Instant::now();
    let gateway_ptr: *const G = gateway;

    for value in [false, true] {
        let returned: *const G = gateway.set_test_mode(value);
        if !std::ptr::eq(returned, gateway_ptr) {
            return CheckResult::fail(
                ConformanceCheck::TestMode,
                start.elapsed().as_millis() as u64,
                "setTestMode() must return the gateway itself",
            );
        }
        if gateway.test_mode() != value {
            return CheckResult::fail(
                ConformanceCheck::TestMode,
                start.elapsed().as_millis() as u64,
                format!("getTestMode() returned {} after setTestMode({value})", gateway.test_mode()),
            );
        }
    }

    CheckResult::pass(ConformanceCheck::TestMode, start.elapsed().as_millis() as u64)
}

/// Check 6: currency is normalized to uppercase on write, and normalizing
/// an already-normalized code is a no-op.
pub fn check_currency<G: Gateway>(gateway: &mut G) -> CheckResult {
    info!("Running currency normalization check");
    let start = Instant::now();
    let gateway_ptr: *const G = gateway;

    let returned: *const G = gateway.set_currency("eur");
    if !std::ptr::eq(returned, gateway_ptr) {
        return CheckResult::fail(
            ConformanceCheck::Currency,
            start.elapsed().as_millis() as u64,
            "setCurrency() must return the gateway itself",
        );
    }

    for input in ["eur", "EUR"] {
        gateway.set_currency(input);
        let stored = gateway.currency().map(str::to_string);
        if stored.as_deref() != Some("EUR") {
            return CheckResult::fail(
                ConformanceCheck::Currency,
                start.elapsed().as_millis() as u64,
                format!("getCurrency() returned {stored:?} after setCurrency({input:?}), expected \"EUR\""),
            );
        }
    }

    CheckResult::pass(ConformanceCheck::Currency, start.elapsed().as_millis() as u64)
}
