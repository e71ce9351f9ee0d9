//! Utility helpers
//!
//! Naming transform, probe generation, logging, and shared test data.

mod logger;
mod naming;
mod probe;
mod testdata;

pub use logger::{init_logger, LogLevel};
pub use naming::{camel_case, getter_name, setter_name, NamingError};
pub use probe::{probe_for, probe_value};
pub use testdata::{customer, valid_card};
