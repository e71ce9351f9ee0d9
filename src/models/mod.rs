//! Data models for gateway conformance testing
//!
//! The gateway contract surface and the check-result reporting types.

mod capability;
mod check_result;
mod gateway;

pub use capability::Capability;
pub use check_result::{CheckResult, CheckStatus, CheckSummary, ConformanceCheck};
pub use gateway::{find_accessor, Gateway, OperationRequest, ParameterAccessor};
