//! Gateway conformance checks
//!
//! The battery of 26 checks run against a gateway under test.
//!
//! ## Check Categories
//!
//! ### Identity Checks (1-3)
//! - Gateway Name
//! - Short Name
//! - Default Parameters
//!
//! ### Parameter Checks (4-6)
//! - Accessor Symmetry
//! - Test Mode
//! - Currency
//!
//! ### Capability Checks (7-16)
//! - Capability Pairing, one per capability
//!
//! ### Forwarding Checks (17-26)
//! - Parameter Forwarding, one per capability

mod capabilities;
mod forwarding;
mod identity;
mod parameters;

#[cfg(test)]
pub(crate) mod testgw;

pub use capabilities::check_capability_pairing;
pub use forwarding::check_parameter_forwarding;
pub use identity::{check_default_parameters, check_gateway_name, check_short_name};
pub use parameters::{check_accessor_symmetry, check_currency, check_test_mode};

use crate::models::{CheckResult, CheckSummary, ConformanceCheck, Gateway};

/// Run all 26 checks in battery order.
pub fn run_all_checks<G: Gateway + 'static>(gateway: &mut G) -> Vec<CheckResult> {
    ConformanceCheck::all()
        .into_iter()
        .map(|check| run_check(check, gateway))
        .collect()
}

/// Run a specific check.
pub fn run_check<G: Gateway + 'static>(check: ConformanceCheck, gateway: &mut G) -> CheckResult {
    match check {
        ConformanceCheck::GatewayName => check_gateway_name(gateway),
        ConformanceCheck::ShortName => check_short_name(gateway),
        ConformanceCheck::DefaultParameters => check_default_parameters(gateway),
        ConformanceCheck::AccessorSymmetry => check_accessor_symmetry(gateway),
        ConformanceCheck::TestMode => check_test_mode(gateway),
        ConformanceCheck::Currency => check_currency(gateway),
        ConformanceCheck::CapabilityPairing(capability) => {
            check_capability_pairing(gateway, capability)
        }
        ConformanceCheck::ParameterForwarding(capability) => {
            check_parameter_forwarding(gateway, capability)
        }
    }
}

/// Run the full battery and summarize it for one gateway.
pub fn run_conformance<G: Gateway + 'static>(gateway: &mut G) -> CheckSummary {
    let name = gateway.short_name().to_string();
    let results = run_all_checks(gateway);
    CheckSummary::new(name, results)
}

/// Run the full battery and panic with every violation, for use inside a
/// `#[test]` function.
pub fn assert_conformance<G: Gateway + 'static>(gateway: &mut G) {
    let summary = run_conformance(gateway);
    let failures = summary.failures();
    if !failures.is_empty() {
        let lines: Vec<String> = failures.iter().map(|r| r.to_string()).collect();
        panic!(
            "gateway {:?} violated {} conformance check(s):\n{}",
            summary.gateway,
            failures.len(),
            lines.join("\n")
        );
    }
}
