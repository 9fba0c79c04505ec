// ccnet-rs/ccnet/src/device/builder.rs

use std::sync::Arc;
use std::time::Duration;

use crate::device::config::DeviceConfig;
use crate::device::handle::BillValidator;
use crate::session::{EventSink, LogSink};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a BillValidator with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DeviceConfig,
    sink: Option<Arc<dyn EventSink>>,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: DeviceConfig::default(),
            sink: None,
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open a serial port and use it as the transport.
    #[cfg(feature = "serial")]
    pub fn with_serial(self, config: &crate::transport::SerialConfig) -> Result<Self> {
        let port = crate::transport::SerialTransport::open(config)?;
        Ok(self.with_transport(Box::new(port)))
    }

    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Where device and session events go. Defaults to [LogSink].
    pub fn with_event_sink<S>(mut self, sink: S) -> Self
    where
        S: EventSink + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.config.response_timeout = timeout;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn lock_timeout(mut self, timeout: Duration) -> Self {
        self.config.lock_timeout = timeout;
        self
    }

    pub fn escrow(mut self, escrow: bool) -> Self {
        self.config.escrow = escrow;
        self
    }

    /// Consume the builder and return the validator handle.
    /// Requires a transport to be provided; otherwise returns
    /// TransportOpenFailure.
    pub fn build(self) -> Result<BillValidator> {
        let transport = self
            .transport
            .ok_or_else(|| Error::TransportOpenFailure("no transport configured".into()))?;
        let sink = self.sink.unwrap_or_else(|| Arc::new(LogSink));
        Ok(BillValidator::new(transport, self.config, sink))
    }
}
