//! HTTP interaction simulation layer
//!
//! The transport boundary gateways call into, a mock transport that replays
//! file-stored fixtures, and the fixture catalog that resolves them.

mod client;
mod fixture;
mod mock;

pub use client::{HttpRequest, HttpResponse, LiveClient, Transport, TransportError};
pub use fixture::{parse_response, FixtureCatalog, FixtureError, FixtureRef};
pub use mock::MockTransport;
