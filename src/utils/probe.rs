//! Probe value generation
//!
//! Probes are fresh, unique values used to detect accessor mis-wiring
//! without depending on gateway defaults.

use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

static PROBE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a probe string, unique within the process.
pub fn probe_value() -> String {
    let seq = PROBE_SEQ.fetch_add(1, Ordering::Relaxed);
    let nonce: u64 = rand::random();
    format!("probe-{seq}-{nonce:016x}")
}

/// Generate a probe as a JSON value, guaranteed to differ from `default`.
pub fn probe_for(default: &Value) -> Value {
    loop {
        let candidate = Value::String(probe_value());
        if &candidate != default {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probes_are_unique() {
        let a = probe_value();
        let b = probe_value();
        assert_ne!(a, b);
    }

    #[test]
    fn test_probe_differs_from_default() {
        let default = Value::String("secret".to_string());
        let probe = probe_for(&default);
        assert_ne!(probe, default);
        assert!(probe.is_string());
    }

    #[test]
    fn test_probe_differs_from_null_default() {
        assert_ne!(probe_for(&Value::Null), Value::Null);
    }
}
