pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::TomlConfig;
pub use self::core::{
    logger::{BackgroundMessageLogger, TracingSink},
    messaging::{initialize_app, App, Delivery, Messaging, Visibility},
    service_worker::{FeedSummary, ServiceWorkerContext},
    submitter::{HttpSubmitter, SUBSCRIBE_PATH},
    BackgroundMessage, Pincode, ProviderConfig, SubscriptionRequest, Submitter,
};
pub use utils::error::{NotifyError, Result, SubmissionError};
