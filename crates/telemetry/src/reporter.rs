use std::sync::Arc;

use serde_json::{Map, Value};
use shared::protocol::{EventRecord, FIELD_APP, FIELD_DUR, FIELD_NAME};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, error};

use crate::{
    config::TelemetryConfig,
    error::TelemetryError,
    transport::{EventTransport, HttpTransport},
};

/// Sends named events to a collector without ever blocking or failing the caller.
#[derive(Clone)]
pub struct EventReporter {
    config: Arc<TelemetryConfig>,
    transport: Arc<dyn EventTransport>,
}

impl EventReporter {
    pub fn new(config: TelemetryConfig, transport: Arc<dyn EventTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn http(config: TelemetryConfig) -> Result<Self, TelemetryError> {
        let transport = HttpTransport::new(&config.collector_url)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn is_enabled(&self) -> bool {
        !self.config.disabled
    }

    /// Reports `name` with an optional duration in milliseconds.
    ///
    /// The send runs on the current tokio runtime and its outcome is only
    /// logged. The returned handle may be awaited or dropped; it is `None` when
    /// nothing was sent.
    pub fn report(
        &self,
        name: &str,
        dur_ms: f64,
        meta: Map<String, Value>,
    ) -> Option<JoinHandle<()>> {
        if self.config.disabled {
            return None;
        }

        let record = build_record(&self.config.app_name, name, dur_ms, meta);
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(error) => {
                error!(%error, event = name, "no async runtime available; event dropped");
                return None;
            }
        };

        let transport = Arc::clone(&self.transport);
        Some(runtime.spawn(async move {
            match transport.send(&record).await {
                Ok(()) => debug!(record = ?record.0, "event logged"),
                Err(error) => {
                    error!(%error, event = record.name().unwrap_or_default(), "failed to log event")
                }
            }
        }))
    }
}

/// Merges the fixed fields into `meta`, replacing any caller values for them.
pub fn build_record(
    app: &str,
    name: &str,
    dur_ms: f64,
    mut meta: Map<String, Value>,
) -> EventRecord {
    if dur_ms.is_finite() && dur_ms > 0.0 {
        let rounded = dur_ms.round() as u64;
        meta.insert(FIELD_DUR.into(), Value::String(rounded.to_string()));
    }
    meta.insert(FIELD_APP.into(), Value::String(app.to_string()));
    meta.insert(FIELD_NAME.into(), Value::String(name.to_string()));
    EventRecord(meta)
}
