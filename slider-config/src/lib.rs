//! Configuration for slider hosts.
//!
//! Loads [`SliderConfig`] from the environment, a config file, or defaults,
//! validates it, and installs the tracing subscriber the host logs through.

pub mod logging;
pub mod models;

pub use logging::{DEFAULT_LOG_FILTER, init_tracing};
pub use models::{ConfigSource, SliderConfig};
