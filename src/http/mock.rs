//! Mock transport for simulated HTTP interaction
//!
//! Replays armed response fixtures FIFO and records every outbound request
//! for post-hoc assertion. One instance per test case; the handle is
//! cheaply cloneable so the test keeps one end while the gateway under
//! test holds the other.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::debug;

use super::client::{HttpRequest, HttpResponse, Transport, TransportError};
use super::fixture::{FixtureCatalog, FixtureError, FixtureRef};

/// Simulated transport with a FIFO response queue and a request log.
///
/// ```
/// use gateway_conformance::{HttpRequest, HttpResponse, MockTransport, Transport};
///
/// let transport = MockTransport::new();
/// transport.arm([HttpResponse::new(200).with_body(r#"{"id":"tx_1"}"#)]);
///
/// let response = transport
///     .send(HttpRequest::post("https://api.example.test/purchase"))
///     .unwrap();
///
/// assert!(response.body_contains("tx_1"));
/// assert_eq!(transport.request_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    queue: VecDeque<HttpResponse>,
    requests: Vec<HttpRequest>,
    dispatched: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the transport with an ordered response list.
    ///
    /// Replaces any queue already armed and clears the recorded-request log.
    pub fn arm(&self, responses: impl IntoIterator<Item = HttpResponse>) {
        let mut inner = self.inner.borrow_mut();
        inner.queue = responses.into_iter().collect();
        inner.requests.clear();
        inner.dispatched = 0;
        debug!("Armed mock transport with {} response(s)", inner.queue.len());
    }

    /// Resolve fixture references through the catalog, then arm.
    ///
    /// Any resolution failure aborts before the armed queue is touched.
    pub fn arm_fixtures<I, R>(&self, catalog: &FixtureCatalog, refs: I) -> Result<(), FixtureError>
    where
        I: IntoIterator<Item = R>,
        R: Into<FixtureRef>,
    {
        let mut responses = Vec::new();
        for fixture in refs {
            responses.push(match fixture.into() {
                FixtureRef::Response(response) => response,
                FixtureRef::Path(path) => catalog.load(&path)?,
            });
        }
        self.arm(responses);
        Ok(())
    }

    /// Ordered copy of the recorded-request log
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    /// Responses still queued for replay
    pub fn remaining(&self) -> usize {
        self.inner.borrow().queue.len()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.borrow_mut();

        debug!(
            "Dispatching {} {} against armed queue",
            request.method, request.url
        );

        let response = inner
            .queue
            .pop_front()
            .ok_or(TransportError::QueueExhausted(inner.dispatched))?;

        inner.requests.push(request);
        inner.dispatched += 1;
        Ok(response)
    }
}
