use crate::core::{BackgroundMessage, BackgroundMessageHandler, LoggedMessage, MessageSink};
use chrono::Utc;

/// Writes each logged message as a single `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn record(&self, message: &LoggedMessage) {
        let payload = serde_json::to_string(&message.payload)
            .unwrap_or_else(|_| format!("{:?}", message.payload));
        tracing::info!(
            received_at = %message.received_at.to_rfc3339(),
            "Received background message {}",
            payload
        );
    }
}

/// Background handler that records the payload and does nothing else.
#[derive(Debug, Clone, Default)]
pub struct BackgroundMessageLogger<S: MessageSink> {
    sink: S,
}

impl<S: MessageSink> BackgroundMessageLogger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: MessageSink> BackgroundMessageHandler for BackgroundMessageLogger<S> {
    fn on_background_message(&self, payload: BackgroundMessage) {
        self.sink.record(&LoggedMessage {
            received_at: Utc::now(),
            payload,
        });
    }
}
