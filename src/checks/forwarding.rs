//! Parameter forwarding checks
//!
//! Checks 17-26: gateway-level configuration must thread through into
//! every operation object the gateway can produce.

use std::time::Instant;
use tracing::{debug, info};

use crate::models::{find_accessor, Capability, CheckResult, ConformanceCheck, Gateway};
use crate::utils::{getter_name, probe_for, setter_name};

/// Check parameter forwarding through one capability's factory.
///
/// For an unsupported capability this is a deliberate no-op reported as a
/// skip, so a report can tell "not applicable" from "never checked".
pub fn check_parameter_forwarding<G: Gateway + 'static>(
    gateway: &mut G,
    capability: Capability,
) -> CheckResult {
    let check = ConformanceCheck::ParameterForwarding(capability);

    if !gateway.supports(capability) {
        return CheckResult::skip(
            check,
            format!("{} not supported; no assertions expected", capability.name()),
        );
    }

    info!("Running parameter forwarding check for {capability}");
    let start = Instant::now();
    let mut all_passed = true;
    let mut details = Vec::new();

    for (key, default) in gateway.default_parameters() {
        let (getter, setter) = match (getter_name(&key), setter_name(&key)) {
            (Ok(getter), Ok(setter)) => (getter, setter),
            (Err(e), _) | (_, Err(e)) => {
                return CheckResult::error(check, e.to_string());
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
        (accessor.set)(gateway, probe.clone());
        debug!("Set {key}, requesting {}() operation", capability.name());

        let Some(operation) = gateway.operation(capability) else {
            return CheckResult::fail(
                check,
                start.elapsed().as_millis() as u64,
                format!(
                    "{} is true but the {}() factory returned no operation",
                    capability.flag_name(),
                    capability.name()
                ),
            );
        };

        let forwarded = operation.parameter(&key);
        if forwarded == probe {
            details.push(format!("✓ {key} forwarded into {}()", capability.name()));
        } else {
            all_passed = false;
            details.push(format!(
                "✗ {}() operation {getter}() returned {forwarded}, expected the probe just set",
                capability.name()
            ));
        }
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    let message = details.join("\n");

    if all_passed {
        CheckResult::pass(check, duration_ms).with_message(message)
    } else {
        CheckResult::fail(check, duration_ms, message)
    }
}
