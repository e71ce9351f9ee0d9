//! Gateway Conformance - test harness for payment gateway implementations
//!
//! A library for mechanically verifying that gateway implementations honor
//! the shared gateway contract: consistent naming, correct parameter
//! propagation, and correct capability advertising. Gateways implement the
//! [`Gateway`] trait once; the engine does the rest.
//!
//! ## Features
//!
//! - 26-check conformance battery covering identity, accessor symmetry,
//!   testMode/currency round-trips, capability/factory pairing, and
//!   parameter forwarding into operation objects
//! - Mock HTTP transport with FIFO fixture replay and a recorded-request
//!   log for post-hoc assertions
//! - File-based fixture catalog with parent-directory fallback
//! - Machine-readable check results and per-gateway summaries
//!
//! ## Usage
//!
//! ```
//! use gateway_conformance::{HttpRequest, HttpResponse, MockTransport, Transport};
//!
//! // Arm a fresh per-test transport, hand a clone to the gateway under
//! // test, then assert against the recorded requests.
//! let transport = MockTransport::new();
//! transport.arm([HttpResponse::new(200).with_body(r#"{"id":"tx_1"}"#)]);
//!
//! let response = transport
//!     .send(HttpRequest::post("https://api.example.test/purchase"))
//!     .unwrap();
//!
//! assert!(response.is_success());
//! assert_eq!(transport.request_count(), 1);
//! ```
//!
//! Running the battery against a gateway:
//!
//! ```ignore
//! let mut gateway = MyGateway::new();
//! gateway_conformance::assert_conformance(&mut gateway);
//! ```

pub mod checks;
pub mod http;
pub mod models;
pub mod utils;

pub use checks::{assert_conformance, run_all_checks, run_check, run_conformance};
pub use http::{
    parse_response, FixtureCatalog, FixtureError, FixtureRef, HttpRequest, HttpResponse,
    LiveClient, MockTransport, Transport, TransportError,
};
pub use models::{
    find_accessor, Capability, CheckResult, CheckStatus, CheckSummary, ConformanceCheck, Gateway,
    OperationRequest, ParameterAccessor,
};
