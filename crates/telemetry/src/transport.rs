use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{EventRecord, EVENT_PATH};
use url::Url;

use crate::error::TelemetryError;

/// Delivers one telemetry record to wherever events are collected.
#[async_trait]
pub trait EventTransport: Send + Sync {
    async fn send(&self, record: &EventRecord) -> Result<(), TelemetryError>;
}

/// Posts records as JSON to `<collector>/event`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(collector_url: &str) -> Result<Self, TelemetryError> {
        let endpoint = Url::parse(collector_url)?.join(EVENT_PATH)?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EventTransport for HttpTransport {
    async fn send(&self, record: &EventRecord) -> Result<(), TelemetryError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::Status(status));
        }
        Ok(())
    }
}
