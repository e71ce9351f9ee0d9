//! Capability pairing checks
//!
//! Checks 7-16: each capability flag must agree with the presence of its
//! operation factory binding. A gateway must not expose a factory for a
//! capability it claims not to support.

use std::time::Instant;
use tracing::debug;

use crate::models::{Capability, CheckResult, ConformanceCheck, Gateway};

/// Check the flag/factory pairing for one capability.
pub fn check_capability_pairing<G: Gateway>(gateway: &G, capability: Capability) -> CheckResult {
    let check = ConformanceCheck::CapabilityPairing(capability);
    let start = Instant::now();

    let supported = gateway.supports(capability);
    debug!("{} = {supported}", capability.flag_name());

    let operation = gateway.operation(capability);
    let duration_ms = start.elapsed().as_millis() as u64;

    match (supported, operation) {
        (true, Some(operation)) => {
            if operation.capability() == capability {
                CheckResult::pass(check, duration_ms)
                    .with_message(format!("{} factory bound", capability.name()))
            } else {
                CheckResult::fail(
                    check,
                    duration_ms,
                    format!(
                        "{}() factory returned an operation reporting {}",
                        capability.name(),
                        operation.capability()
                    ),
                )
            }
        }
        (true, None) => CheckResult::fail(
            check,
            duration_ms,
            format!(
                "{} is true but the {}() factory is missing",
                capability.flag_name(),
                capability.name()
            ),
        ),
        (false, Some(_)) => CheckResult::fail(
            check,
            duration_ms,
            format!(
                "gateway must not expose a {}() factory while {} is false",
                capability.name(),
                capability.flag_name()
            ),
        ),
        (false, None) => CheckResult::pass(check, duration_ms)
            .with_message(format!("{} not supported, no factory bound", capability.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testgw::{FaultyGateway, SandboxGateway};
    use crate::models::CheckStatus;

    #[test]
    fn test_pairing_passes_for_sandbox() {
        let gateway = SandboxGateway::new();
        for capability in Capability::all() {
            let result = check_capability_pairing(&gateway, capability);
            assert_eq!(result.status, CheckStatus::Pass, "{capability} pairing");
        }
    }

    #[test]
    fn test_pairing_catches_missing_factory() {
        let mut gateway = FaultyGateway::default();
        gateway.missing_purchase_factory = true;

        let result = check_capability_pairing(&gateway, Capability::Purchase);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.unwrap().contains("supportsPurchase"));
    }

    #[test]
    fn test_pairing_catches_phantom_factory() {
        let mut gateway = FaultyGateway::default();
        gateway.phantom_refund_factory = true;

        let result = check_capability_pairing(&gateway, Capability::Refund);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.unwrap().contains("must not expose"));
    }
}
