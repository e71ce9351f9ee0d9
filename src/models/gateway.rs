//! Gateway contract surface
//!
//! The explicit trait every gateway under test implements, plus the
//! parameter accessor registry that stands in for string-based method
//! lookup in a statically typed setting.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::models::Capability;

/// One entry in a gateway's parameter accessor registry.
///
/// Binds a snake_case parameter key to its getter/setter pair. The setter
/// must return the gateway it was called on; the conformance engine checks
/// that by pointer identity to enforce fluent chaining.
pub struct ParameterAccessor<G: ?Sized> {
    pub key: &'static str,
    pub get: fn(&G) -> Value,
    pub set: fn(&mut G, Value) -> &mut G,
}

impl<G: ?Sized> Clone for ParameterAccessor<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for ParameterAccessor<G> {}

impl<G: ?Sized> fmt::Debug for ParameterAccessor<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterAccessor")
            .field("key", &self.key)
            .finish()
    }
}

/// Contract surface for a gateway under test.
///
/// Concrete gateways implement this once; the conformance engine then
/// verifies the implementation mechanically, without per-gateway test code.
pub trait Gateway {
    /// Human-readable gateway name
    fn name(&self) -> &str;

    /// Short machine name
    fn short_name(&self) -> &str;

    /// Default parameter set, keyed by snake_case parameter name.
    ///
    /// Values are unconstrained beyond being JSON values; ordering is
    /// irrelevant.
    fn default_parameters(&self) -> HashMap<String, Value>;

    /// Accessor registry covering every key in [`Self::default_parameters`].
    fn parameter_accessors() -> &'static [ParameterAccessor<Self>]
    where
        Self: Sized;

    fn test_mode(&self) -> bool;

    fn set_test_mode(&mut self, test_mode: bool) -> &mut Self;

    /// Currency code, normalized to uppercase.
    fn currency(&self) -> Option<&str>;

    /// Implementations must store the code upper-cased; storing an already
    /// uppercase code must be a no-op.
    fn set_currency(&mut self, currency: &str) -> &mut Self;

    /// Capability flag query
    fn supports(&self, capability: Capability) -> bool;

    /// Operation factory binding.
    ///
    /// Must return `Some` exactly when the capability flag is true; binding
    /// a factory for an unsupported capability is a contract violation the
    /// engine reports.
    fn operation(&self, capability: Capability) -> Option<Box<dyn OperationRequest>>;
}

/// Contract surface for operation objects produced by capability factories.
pub trait OperationRequest {
    /// The capability this operation was created for
    fn capability(&self) -> Capability;

    /// Parameter value forwarded from the owning gateway (`Null` when unset)
    fn parameter(&self, key: &str) -> Value;
}

/// Look up a registry entry by parameter key.
pub fn find_accessor<G: Gateway + 'static>(key: &str) -> Option<ParameterAccessor<G>> {
    G::parameter_accessors()
        .iter()
        .copied()
        .find(|accessor| accessor.key == key)
}
