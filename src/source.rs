use std::time::Duration;

use log::warn;
use reqwest::Client;

use crate::error::FeedError;
use crate::event::RawEvent;

pub struct EventSource {
    client: Client,
    url: String,
}

impl EventSource {
    pub fn new(url: String, timeout: Duration) -> Result<EventSource, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(EventSource { client, url })
    }

    /// One GET against the upstream. Transport failures are retried once;
    /// bad statuses and unparseable bodies are not.
    pub async fn fetch(&self) -> Result<Vec<RawEvent>, FeedError> {
        let response = match self.client.get(&self.url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("fetch failed ({err}), retrying once");
                self.client.get(&self.url).send().await?
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
