//! Reference gateways for exercising the engine in its own tests.
//!
//! `SandboxGateway` is fully conformant; `FaultyGateway` misbehaves in one
//! configurable way at a time so each check's failure path can be hit.

use serde_json::{json, Value};
use std::collections::HashMap;

use crate::http::{HttpRequest, MockTransport, Transport, TransportError};
use crate::models::{Capability, Gateway, OperationRequest, ParameterAccessor};

/// Operation object that snapshots gateway parameters at creation time.
pub struct SnapshotOperation {
    capability: Capability,
    parameters: HashMap<String, Value>,
}

impl SnapshotOperation {
    pub fn new(capability: Capability, parameters: HashMap<String, Value>) -> Self {
        Self {
            capability,
            parameters,
        }
    }
}

impl OperationRequest for SnapshotOperation {
    fn capability(&self) -> Capability {
        self.capability
    }

    fn parameter(&self, key: &str) -> Value {
        self.parameters.get(key).cloned().unwrap_or(Value::Null)
    }
}

fn snapshot<G: Gateway + 'static>(gateway: &G, capability: Capability) -> Box<dyn OperationRequest> {
    let parameters = G::parameter_accessors()
        .iter()
        .map(|accessor| (accessor.key.to_string(), (accessor.get)(gateway)))
        .collect();
    Box::new(SnapshotOperation::new(capability, parameters))
}

/// A conformant gateway backed by a mock transport.
pub struct SandboxGateway {
    api_key: Value,
    merchant_id: Value,
    test_mode: bool,
    currency: Option<String>,
    pub transport: MockTransport,
}

impl SandboxGateway {
    pub fn new() -> Self {
        Self {
            api_key: Value::Null,
            merchant_id: Value::Null,
            test_mode: true,
            currency: None,
            transport: MockTransport::new(),
        }
    }

    /// Issue one purchase call through the transport.
    pub fn send_purchase(&self) -> Result<Value, TransportError> {
        let body = json!({
            "api_key": self.api_key,
            "merchant_id": self.merchant_id,
        });
        let request = HttpRequest::post("https://api.sandbox.test/purchase")
            .header("Content-Type", "application/json")
            .body(body.to_string());

        let response = self.transport.send(request)?;
        Ok(serde_json::from_str(&response.body).unwrap_or(Value::Null))
    }
}

fn sandbox_get_api_key(g: &SandboxGateway) -> Value {
    g.api_key.clone()
}

fn sandbox_set_api_key(g: &mut SandboxGateway, value: Value) -> &mut SandboxGateway {
    g.api_key = value;
    g
}

fn sandbox_get_merchant_id(g: &SandboxGateway) -> Value {
    g.merchant_id.clone()
}

fn sandbox_set_merchant_id(g: &mut SandboxGateway, value: Value) -> &mut SandboxGateway {
    g.merchant_id = value;
    g
}

const SANDBOX_ACCESSORS: &[ParameterAccessor<SandboxGateway>] = &[
    ParameterAccessor {
        key: "api_key",
        get: sandbox_get_api_key,
        set: sandbox_set_api_key,
    },
    ParameterAccessor {
        key: "merchant_id",
        get: sandbox_get_merchant_id,
        set: sandbox_set_merchant_id,
    },
];

impl Gateway for SandboxGateway {
    fn name(&self) -> &str {
        "Sandbox Gateway"
    }

    fn short_name(&self) -> &str {
        "sandbox"
    }

    fn default_parameters(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("api_key".to_string(), json!("")),
            ("merchant_id".to_string(), json!("")),
        ])
    }

    fn parameter_accessors() -> &'static [ParameterAccessor<Self>] {
        SANDBOX_ACCESSORS
    }

    fn test_mode(&self) -> bool {
        self.test_mode
    }

    fn set_test_mode(&mut self, test_mode: bool) -> &mut Self {
        self.test_mode = test_mode;
        self
    }

    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn set_currency(&mut self, currency: &str) -> &mut Self {
        self.currency = Some(currency.to_ascii_uppercase());
        self
    }

    fn supports(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::Purchase | Capability::Refund | Capability::CreateCard
        )
    }

    fn operation(&self, capability: Capability) -> Option<Box<dyn OperationRequest>> {
        self.supports(capability).then(|| snapshot(self, capability))
    }
}

/// A gateway that misbehaves in exactly the ways the flags say.
#[derive(Default)]
pub struct FaultyGateway {
    api_key: Value,
    sink: Value,
    test_mode: bool,
    currency: Option<String>,

    pub drop_writes: bool,
    pub hide_merchant_id_accessor: bool,
    pub advertise_camel_case_key: bool,
    pub skip_currency_normalization: bool,
    pub phantom_refund_factory: bool,
    pub missing_purchase_factory: bool,
    pub forward_stale_parameters: bool,
}

fn faulty_get_api_key(g: &FaultyGateway) -> Value {
    g.api_key.clone()
}

fn faulty_set_api_key(g: &mut FaultyGateway, value: Value) -> &mut FaultyGateway {
    if g.drop_writes {
        g.sink = value;
    } else {
        g.api_key = value;
    }
    g
}

const FAULTY_ACCESSORS: &[ParameterAccessor<FaultyGateway>] = &[ParameterAccessor {
    key: "api_key",
    get: faulty_get_api_key,
    set: faulty_set_api_key,
}];

impl Gateway for FaultyGateway {
    fn name(&self) -> &str {
        "Faulty Gateway"
    }

    fn short_name(&self) -> &str {
        "faulty"
    }

    fn default_parameters(&self) -> HashMap<String, Value> {
        let mut parameters = HashMap::from([("api_key".to_string(), json!(""))]);
        if self.hide_merchant_id_accessor {
            parameters.insert("merchant_id".to_string(), json!(""));
        }
        if self.advertise_camel_case_key {
            parameters.insert("apiToken".to_string(), json!(""));
        }
        parameters
    }

    fn parameter_accessors() -> &'static [ParameterAccessor<Self>] {
        FAULTY_ACCESSORS
    }

    fn test_mode(&self) -> bool {
        self.test_mode
    }

    fn set_test_mode(&mut self, test_mode: bool) -> &mut Self {
        self.test_mode = test_mode;
        self
    }

    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn set_currency(&mut self, currency: &str) -> &mut Self {
        self.currency = Some(if self.skip_currency_normalization {
            currency.to_string()
        } else {
            currency.to_ascii_uppercase()
        });
        self
    }

    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Purchase)
    }

    fn operation(&self, capability: Capability) -> Option<Box<dyn OperationRequest>> {
        match capability {
            Capability::Purchase if self.missing_purchase_factory => None,
            Capability::Purchase if self.forward_stale_parameters => Some(Box::new(
                SnapshotOperation::new(capability, HashMap::new()),
            )),
            Capability::Purchase => Some(snapshot(self, capability)),
            Capability::Refund if self.phantom_refund_factory => Some(snapshot(self, capability)),
            _ => None,
        }
    }
}
