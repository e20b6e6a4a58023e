use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use vaxnotify_client::core::BackgroundMessageHandler;
use vaxnotify_client::{
    BackgroundMessage, BackgroundMessageLogger, Delivery, ProviderConfig, ServiceWorkerContext,
    TracingSink,
};

/// Collects everything the fmt layer writes.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

fn records_in(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.contains("Received background message"))
        .collect()
}

fn provider_config() -> ProviderConfig {
    ProviderConfig {
        api_key: "test-api-key".to_string(),
        auth_domain: "vaxnotify-test.firebaseapp.com".to_string(),
        project_id: "vaxnotify-test".to_string(),
        storage_bucket: "vaxnotify-test.appspot.com".to_string(),
        messaging_sender_id: "100200300".to_string(),
        app_id: "1:100200300:web:abc".to_string(),
    }
}

#[test]
fn test_empty_payload_is_logged_once() {
    let logger = BackgroundMessageLogger::new(TracingSink);

    let output = capture(|| logger.on_background_message(BackgroundMessage::default()));

    let records = records_in(&output);
    assert_eq!(records.len(), 1, "output was: {}", output);
    assert!(records[0].contains("{}"));
}

#[test]
fn test_payload_appears_in_the_record() {
    let logger = BackgroundMessageLogger::new(TracingSink);
    let payload: BackgroundMessage = serde_json::from_value(json!({
        "from": "100200300",
        "notification": { "title": "Alert from getvacc.in", "body": "3 slots open for 45 age." }
    }))
    .unwrap();

    let output = capture(|| logger.on_background_message(payload));

    let records = records_in(&output);
    assert_eq!(records.len(), 1, "output was: {}", output);
    assert!(records[0].contains(r#""title":"Alert from getvacc.in""#));
    assert!(records[0].contains(r#""from":"100200300""#));
}

#[test]
fn test_bootstrapped_context_logs_background_deliveries() {
    let context = ServiceWorkerContext::bootstrap(provider_config(), TracingSink).unwrap();
    let payload: BackgroundMessage =
        serde_json::from_value(json!({ "data": { "pincode": "110001" } })).unwrap();

    let mut outcome = None;
    let output = capture(|| outcome = Some(context.deliver_background(payload)));

    assert_eq!(outcome, Some(Delivery::Handled));
    let records = records_in(&output);
    assert_eq!(records.len(), 1, "output was: {}", output);
    assert!(records[0].contains(r#""pincode":"110001""#));
}

#[test]
fn test_loosely_typed_payload_is_logged_verbatim() {
    let logger = BackgroundMessageLogger::new(TracingSink);
    let payload: BackgroundMessage = serde_json::from_value(json!({
        "from": 12345,
        "data": { "count": 3 },
        "notification": { "title": 7 }
    }))
    .unwrap();

    let output = capture(|| logger.on_background_message(payload));

    let records = records_in(&output);
    assert_eq!(records.len(), 1, "output was: {}", output);
    assert!(records[0].contains(r#""from":12345"#));
    assert!(records[0].contains(r#""count":3"#));
    assert!(records[0].contains(r#""title":7"#));
}

#[test]
fn test_alternate_key_spellings_are_not_rewritten() {
    let logger = BackgroundMessageLogger::new(TracingSink);
    let payload: BackgroundMessage = serde_json::from_value(json!({
        "collapse_key": "c",
        "collapseKey": "a",
        "fcmMessageId": "m"
    }))
    .unwrap();

    let output = capture(|| logger.on_background_message(payload));

    let records = records_in(&output);
    assert_eq!(records.len(), 1, "output was: {}", output);
    assert!(records[0].contains(r#""collapse_key":"c""#));
    assert!(records[0].contains(r#""collapseKey":"a""#));
    assert!(records[0].contains(r#""fcmMessageId":"m""#));
    assert!(!records[0].contains(r#""messageId""#));
}

#[tokio::test]
async fn test_listen_feed_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{}}").unwrap();
    writeln!(file, r#"{{"notification":{{"title":"Alert"}},"priority":"high"}}"#).unwrap();
    writeln!(file, "garbage").unwrap();

    let context = ServiceWorkerContext::bootstrap(provider_config(), TracingSink).unwrap();
    let handle = tokio::fs::File::open(file.path()).await.unwrap();
    let summary = context
        .deliver_lines(tokio::io::BufReader::new(handle))
        .await
        .unwrap();

    assert_eq!(summary.delivered, 2);
    assert_eq!(summary.skipped, 1);
}
