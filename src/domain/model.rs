use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Postal code, always sent as a JSON string because the backend reads
/// `pincode` as text. Integers are rendered in decimal without any checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pincode(String);

impl Pincode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for Pincode {
    fn from(value: i64) -> Self {
        Pincode(value.to_string())
    }
}

impl From<i32> for Pincode {
    fn from(value: i32) -> Self {
        Pincode(value.to_string())
    }
}

impl From<u32> for Pincode {
    fn from(value: u32) -> Self {
        Pincode(value.to_string())
    }
}

impl From<String> for Pincode {
    fn from(value: String) -> Self {
        Pincode(value)
    }
}

impl From<&str> for Pincode {
    fn from(value: &str) -> Self {
        Pincode(value.to_string())
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /api/v1/subscribe`.
///
/// The backend reads the age under `age_limit`. Values are forwarded as-is;
/// range and format checks belong to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub pincode: Pincode,
    pub age_limit: i64,
    pub token: String,
}

impl SubscriptionRequest {
    pub fn new(pincode: impl Into<Pincode>, age_limit: i64, token: impl Into<String>) -> Self {
        Self {
            pincode: pincode.into(),
            age_limit,
            token: token.into(),
        }
    }
}

/// Static identity of the push-messaging project.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

// api_key stays out of logs
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .finish()
    }
}

/// Payload handed over by the push-messaging provider.
///
/// The object is kept exactly as received, keys and value types included.
/// The accessors only read well-known keys and return `None` when a key is
/// absent or holds some other JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackgroundMessage(Map<String, Value>);

impl BackgroundMessage {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    pub fn from_sender(&self) -> Option<&str> {
        self.first_str(&["from"])
    }

    pub fn collapse_key(&self) -> Option<&str> {
        self.first_str(&["collapseKey", "collapse_key"])
    }

    pub fn message_id(&self) -> Option<&str> {
        self.first_str(&["messageId", "fcmMessageId", "message_id"])
    }

    pub fn notification(&self) -> Option<&Map<String, Value>> {
        self.0.get("notification").and_then(Value::as_object)
    }

    pub fn notification_title(&self) -> Option<&str> {
        self.notification()?.get("title")?.as_str()
    }

    pub fn notification_body(&self) -> Option<&str> {
        self.notification()?.get("body")?.as_str()
    }

    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.0.get("data").and_then(Value::as_object)
    }
}

impl From<Map<String, Value>> for BackgroundMessage {
    fn from(map: Map<String, Value>) -> Self {
        BackgroundMessage(map)
    }
}

/// What a sink receives for each background message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedMessage {
    pub received_at: DateTime<Utc>,
    pub payload: BackgroundMessage,
}
