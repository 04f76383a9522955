use crate::errors::ClientError;
use crate::models::{ReadingSubmission, StatsSnapshot};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::info;

/// A finished exchange with the collaborator: the status plus a body that
/// parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait SubmitClient {
    async fn submit(&self, submission: &ReadingSubmission) -> Result<Reply, ClientError>;

    async fn fetch_stats(&self) -> Result<StatsSnapshot, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path).map_err(ClientError::transport)
    }
}

impl SubmitClient for HttpClient {
    async fn submit(&self, submission: &ReadingSubmission) -> Result<Reply, ClientError> {
        let url = self.endpoint("submit")?;
        info!(%url, fields = submission.fields.len(), "posting readings");

        let response = self.http.post(url).json(submission).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes)?;

        Ok(Reply { status, body })
    }

    async fn fetch_stats(&self) -> Result<StatsSnapshot, ClientError> {
        let url = self.endpoint("api/stats")?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
