use crate::core::{ConfigProvider, Pincode, SubscriptionRequest, Submitter};
use crate::utils::error::SubmissionError;
use reqwest::Client;

pub const SUBSCRIBE_PATH: &str = "/api/v1/subscribe";

/// Sends subscription requests to the backend over HTTP.
///
/// One POST per call. No retries and no timeout beyond what the client
/// carries by default.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: String,
    client: Client,
}

impl HttpSubmitter {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client<C: ConfigProvider>(config: &C, client: Client) -> Self {
        let endpoint = format!(
            "{}{}",
            config.api_base_url().trim_end_matches('/'),
            SUBSCRIBE_PATH
        );
        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit_fields(
        &self,
        pincode: impl Into<Pincode>,
        age: i64,
        token: impl Into<String>,
    ) -> Result<(), SubmissionError> {
        self.submit(SubscriptionRequest::new(pincode, age, token))
            .await
    }
}

#[async_trait::async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, request: SubscriptionRequest) -> Result<(), SubmissionError> {
        tracing::debug!(
            "Submitting subscription for pincode {} (age {}) to {}",
            request.pincode,
            request.age_limit,
            self.endpoint
        );

        let response = match self.client.post(&self.endpoint).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Subscription request failed in transport: {}", e);
                return Err(SubmissionError);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Subscription request rejected with status {}", status);
            return Err(SubmissionError);
        }

        tracing::debug!("Subscription accepted with status {}", status);
        Ok(())
    }
}
