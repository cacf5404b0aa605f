//! Wire format of telemetry records exchanged between reporter and collector.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Path the collector accepts events on.
pub const EVENT_PATH: &str = "/event";
pub const DEFAULT_APP_NAME: &str = "gistEditor";

pub const FIELD_APP: &str = "app";
pub const FIELD_NAME: &str = "name";
pub const FIELD_DUR: &str = "dur";

/// A flat key/value telemetry record, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(pub Map<String, Value>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("event record is missing a string `{0}` field")]
    MissingField(&'static str),
}

impl EventRecord {
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn app(&self) -> Option<&str> {
        self.get_str(FIELD_APP)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(FIELD_NAME)
    }

    pub fn dur(&self) -> Option<&str> {
        self.get_str(FIELD_DUR)
    }

    /// Checks the fields every reporter injects.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name().is_none() {
            return Err(RecordError::MissingField(FIELD_NAME));
        }
        Ok(())
    }
}

impl From<Map<String, Value>> for EventRecord {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
