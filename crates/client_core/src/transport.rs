use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{PredictRequest, PredictResponse};

use crate::error::PredictError;

/// Network seam between the submission controller and the prediction
/// service. Tests substitute this with a scripted implementation or point
/// the HTTP backend at a local mock server.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError>;
}

/// `POST {api_base}/predict` over reqwest. The base URL is injected at
/// construction; nothing here reads ambient process state.
pub struct HttpPredictionBackend {
    http: Client,
    predict_url: String,
}

impl HttpPredictionBackend {
    /// `timeout: None` defers to the transport's own behavior.
    pub fn new(api_base: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build http client")?;

        let api_base = api_base.into();
        Ok(Self {
            http,
            predict_url: format!("{}/predict", api_base.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl PredictionBackend for HttpPredictionBackend {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
        let response = self
            .http
            .post(&self.predict_url)
            .json(request)
            .send()
            .await
            .map_err(|err| PredictError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        // Body is read before decoding so a truncated read stays a transport
        // failure and only an unparseable body counts as a decode failure.
        let body = response
            .bytes()
            .await
            .map_err(|err| PredictError::Transport(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| PredictError::Decode(err.to_string()))
    }
}
