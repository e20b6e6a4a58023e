use crate::core::logger::BackgroundMessageLogger;
use crate::core::messaging::{initialize_app, App, Delivery, Messaging, Visibility};
use crate::core::{BackgroundMessage, MessageSink, ProviderConfig};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Counts from feeding a stream of JSON lines through the context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub delivered: usize,
    pub skipped: usize,
}

/// Owns the provider handle for the lifetime of the hosting script.
///
/// Built once at load; after `bootstrap` returns the background logger is
/// registered and the context stays in that state until it is dropped.
#[derive(Debug)]
pub struct ServiceWorkerContext {
    messaging: Messaging,
}

impl ServiceWorkerContext {
    pub fn bootstrap<S>(config: ProviderConfig, sink: S) -> Result<Self>
    where
        S: MessageSink + 'static,
    {
        let app = initialize_app(config)?;
        let mut messaging = app.messaging();
        messaging.on_background_message(BackgroundMessageLogger::new(sink));
        tracing::info!(
            "Listening for background messages for project {}",
            app.config().project_id
        );
        Ok(Self { messaging })
    }

    pub fn app(&self) -> &App {
        self.messaging.app()
    }

    pub fn messaging(&self) -> &Messaging {
        &self.messaging
    }

    pub fn deliver_background(&self, payload: BackgroundMessage) -> Delivery {
        self.messaging.deliver(payload, Visibility::Background)
    }

    /// Delivers one background message per JSON line until the reader is
    /// exhausted. Blank lines are ignored; lines that are not UTF-8 or not a
    /// JSON object are skipped with a warning.
    pub async fn deliver_lines<R>(&self, mut reader: R) -> Result<FeedSummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut summary = FeedSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    tracing::warn!("Skipping line that is not UTF-8: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<BackgroundMessage>(line) {
                Ok(payload) => {
                    self.deliver_background(payload);
                    summary.delivered += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping line that is not a JSON object: {}", e);
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }
}
