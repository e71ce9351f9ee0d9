//! Check result models for gateway conformance testing
//!
//! Defines the check battery, statuses, results, and per-gateway summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Capability;

/// All 26 conformance checks: 6 fixed checks plus one capability pairing
/// and one parameter forwarding check per capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConformanceCheck {
    // Identity checks (1-3)
    GatewayName,
    ShortName,
    DefaultParameters,

    // Parameter checks (4-6)
    AccessorSymmetry,
    TestMode,
    Currency,

    // Capability checks (7-16)
    CapabilityPairing(Capability),

    // Forwarding checks (17-26)
    ParameterForwarding(Capability),
}

impl ConformanceCheck {
    /// Get check number (1-26)
    pub fn number(&self) -> u8 {
        match self {
            ConformanceCheck::GatewayName => 1,
            ConformanceCheck::ShortName => 2,
            ConformanceCheck::DefaultParameters => 3,
            ConformanceCheck::AccessorSymmetry => 4,
            ConformanceCheck::TestMode => 5,
            ConformanceCheck::Currency => 6,
            ConformanceCheck::CapabilityPairing(capability) => 6 + capability.number(),
            ConformanceCheck::ParameterForwarding(capability) => 16 + capability.number(),
        }
    }

    /// Get check name
    pub fn name(&self) -> &'static str {
        match self {
            ConformanceCheck::GatewayName => "Gateway Name",
            ConformanceCheck::ShortName => "Short Name",
            ConformanceCheck::DefaultParameters => "Default Parameters",
            ConformanceCheck::AccessorSymmetry => "Accessor Symmetry",
            ConformanceCheck::TestMode => "Test Mode",
            ConformanceCheck::Currency => "Currency",
            ConformanceCheck::CapabilityPairing(_) => "Capability Pairing",
            ConformanceCheck::ParameterForwarding(_) => "Parameter Forwarding",
        }
    }

    /// Get check category
    pub fn category(&self) -> &'static str {
        match self {
            ConformanceCheck::GatewayName
            | ConformanceCheck::ShortName
            | ConformanceCheck::DefaultParameters => "Identity",
            ConformanceCheck::AccessorSymmetry
            | ConformanceCheck::TestMode
            | ConformanceCheck::Currency => "Parameters",
            ConformanceCheck::CapabilityPairing(_) => "Capabilities",
            ConformanceCheck::ParameterForwarding(_) => "Forwarding",
        }
    }

    /// Get all checks in battery order
    pub fn all() -> Vec<ConformanceCheck> {
        let mut checks = vec![
            ConformanceCheck::GatewayName,
            ConformanceCheck::ShortName,
            ConformanceCheck::DefaultParameters,
            ConformanceCheck::AccessorSymmetry,
            ConformanceCheck::TestMode,
            ConformanceCheck::Currency,
        ];
        checks.extend(Capability::all().into_iter().map(ConformanceCheck::CapabilityPairing));
        checks.extend(Capability::all().into_iter().map(ConformanceCheck::ParameterForwarding));
        checks
    }

    /// Parse from check number
    pub fn from_number(n: u8) -> Option<ConformanceCheck> {
        match n {
            1 => Some(ConformanceCheck::GatewayName),
            2 => Some(ConformanceCheck::ShortName),
            3 => Some(ConformanceCheck::DefaultParameters),
            4 => Some(ConformanceCheck::AccessorSymmetry),
            5 => Some(ConformanceCheck::TestMode),
            6 => Some(ConformanceCheck::Currency),
            7..=16 => Capability::from_number(n - 6).map(ConformanceCheck::CapabilityPairing),
            17..=26 => Capability::from_number(n - 16).map(ConformanceCheck::ParameterForwarding),
            _ => None,
        }
    }

    fn capability(&self) -> Option<Capability> {
        match self {
            ConformanceCheck::CapabilityPairing(capability)
            | ConformanceCheck::ParameterForwarding(capability) => Some(*capability),
            _ => None,
        }
    }
}

impl fmt::Display for ConformanceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Check {}: {}", self.number(), self.name())?;
        if let Some(capability) = self.capability() {
            write!(f, " [{capability}]")?;
        }
        Ok(())
    }
}

/// Check execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
    Error,
}

impl CheckStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
            CheckStatus::Skip => "○",
            CheckStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }

    /// Fail and Error report contract violations; Skip does not.
    pub fn is_violation(&self) -> bool {
        matches!(self, CheckStatus::Fail | CheckStatus::Error)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Skip => write!(f, "SKIP"),
            CheckStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single check execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: ConformanceCheck,
    pub status: CheckStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl CheckResult {
    pub fn pass(check: ConformanceCheck, duration_ms: u64) -> Self {
        Self {
            check,
            status: CheckStatus::Pass,
            duration_ms,
            message: None,
            details: None,
        }
    }

    pub fn fail(check: ConformanceCheck, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            duration_ms,
            message: Some(message.into()),
            details: None,
        }
    }

    pub fn skip(check: ConformanceCheck, reason: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Skip,
            duration_ms: 0,
            message: Some(reason.into()),
            details: None,
        }
    }

    pub fn error(check: ConformanceCheck, error: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Error,
            duration_ms: 0,
            message: Some(error.into()),
            details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.check,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a conformance battery run against one gateway
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckSummary {
    pub gateway: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CheckResult>,
}

impl CheckSummary {
    pub fn new(gateway: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
            .count();
        let skipped = results
            .iter()
            .filter(|r| r.status == CheckStatus::Skip)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == CheckStatus::Error)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            gateway: gateway.into(),
            total,
            passed,
            failed,
            skipped,
            errors,
            total_duration_ms,
            results,
        }
    }

    /// Every result reporting a contract violation
    pub fn failures(&self) -> Vec<&CheckResult> {
        self.results
            .iter()
            .filter(|r| r.status.is_violation())
            .collect()
    }

    pub fn is_conformant(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conformance: {} gateway", self.gateway)?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for result in &self.results {
            writeln!(f, "  {result}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "Total: {} | Pass: {} | Fail: {} | Skip: {} | Error: {}",
            self.total, self.passed, self.failed, self.skipped, self.errors
        )?;
        writeln!(
            f,
            "Pass Rate: {:.1}% | Duration: {}ms",
            self.pass_rate(),
            self.total_duration_ms
        )
    }
}
