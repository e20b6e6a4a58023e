use crate::core::{LoggedMessage, MessageSink, ProviderConfig};
use std::sync::{Arc, Mutex};

/// Keeps every record in memory so tests can count and inspect them.
#[derive(Clone, Default)]
pub(crate) struct MemorySink {
    records: Arc<Mutex<Vec<LoggedMessage>>>,
}

impl MemorySink {
    pub(crate) fn records(&self) -> Vec<LoggedMessage> {
        self.records.lock().unwrap().clone()
    }
}

impl MessageSink for MemorySink {
    fn record(&self, message: &LoggedMessage) {
        self.records.lock().unwrap().push(message.clone());
    }
}

pub(crate) fn provider_config() -> ProviderConfig {
    ProviderConfig {
        api_key: "test-api-key".to_string(),
        auth_domain: "vaxnotify-test.firebaseapp.com".to_string(),
        project_id: "vaxnotify-test".to_string(),
        storage_bucket: "vaxnotify-test.appspot.com".to_string(),
        messaging_sender_id: "100200300".to_string(),
        app_id: "1:100200300:web:abc".to_string(),
    }
}
