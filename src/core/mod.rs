pub mod logger;
pub mod messaging;
pub mod service_worker;
pub mod submitter;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    BackgroundMessage, LoggedMessage, Pincode, ProviderConfig, SubscriptionRequest,
};
pub use crate::domain::ports::{BackgroundMessageHandler, ConfigProvider, MessageSink, Submitter};
pub use crate::utils::error::Result;
