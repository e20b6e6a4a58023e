use crate::domain::model::{BackgroundMessage, LoggedMessage, SubscriptionRequest};
use crate::utils::error::SubmissionError;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
}

/// Registers a device for notifications with the backend.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: SubscriptionRequest) -> Result<(), SubmissionError>;
}

/// Called by the messaging provider for messages that arrive while the
/// owning page is not in the foreground. Has no failure path.
pub trait BackgroundMessageHandler: Send + Sync {
    fn on_background_message(&self, payload: BackgroundMessage);
}

/// Destination for logged background messages.
pub trait MessageSink: Send + Sync {
    fn record(&self, message: &LoggedMessage);
}
