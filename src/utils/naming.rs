//! Parameter key naming transform
//!
//! Derives accessor method names from snake_case parameter keys.

use thiserror::Error;

/// Naming transform errors
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum NamingError {
    #[error("Parameter key {0:?} is outside the supported grammar [a-z]+(_[a-z]+)*")]
    UnsupportedKey(String),
}

/// Convert a snake_case parameter key to camelCase.
///
/// The transform is only defined for keys matching `[a-z]+(_[a-z]+)*`;
/// anything else is rejected rather than guessed at.
pub fn camel_case(key: &str) -> Result<String, NamingError> {
    if !is_valid_key(key) {
        return Err(NamingError::UnsupportedKey(key.to_string()));
    }

    let mut segments = key.split('_');
    let mut out = String::with_capacity(key.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        out.push_str(&ucfirst(segment));
    }
    Ok(out)
}

/// Derive the getter name for a parameter key (`api_key` -> `getApiKey`).
pub fn getter_name(key: &str) -> Result<String, NamingError> {
    Ok(format!("get{}", ucfirst(&camel_case(key)?)))
}

/// Derive the setter name for a parameter key (`api_key` -> `setApiKey`).
pub fn setter_name(key: &str) -> Result<String, NamingError> {
    Ok(format!("set{}", ucfirst(&camel_case(key)?)))
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('_').all(|segment| {
            !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_lowercase())
        })
}

fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
