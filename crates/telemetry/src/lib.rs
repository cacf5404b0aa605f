//! Fire-and-forget reporting of named application events to a collector.

pub mod config;
pub mod error;
mod reporter;
pub mod transport;

pub use config::TelemetryConfig;
pub use error::TelemetryError;
pub use reporter::{build_record, EventReporter};
pub use transport::{EventTransport, HttpTransport};

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod tests;
