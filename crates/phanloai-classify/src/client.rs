// Classification service client (HTTP direct, no SDK)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ClassifyError, Result};
use crate::traits::Classifier;
use crate::types::{Classification, ModelKind};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed [`Classifier`] for the remote categorization endpoint.
pub struct HttpClassifier {
    http_client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    input: &'a str,
    model_type: u8,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    result: String,
    #[serde(default)]
    confidence: Option<f64>,
}

impl HttpClassifier {
    /// Create a client for the given endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// A hung upstream call is bounded by this timeout; the turn then
    /// takes the degraded-reply path instead of blocking indefinitely.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, text: &str, model: ModelKind) -> Result<Classification> {
        let request = ClassifyRequest {
            input: text,
            model_type: model.into(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "classification request rejected");
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::MalformedResponse(e.to_string()))?;

        tracing::debug!(label = %body.result, model = %model.as_str(), "classification received");

        Ok(Classification {
            label: body.result,
            confidence: body.confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ClassifyRequest {
            input: "How good is this product",
            model_type: ModelKind::PhoBert.into(),
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["input"], "How good is this product");
        assert_eq!(json["model_type"], 2);
    }

    #[test]
    fn test_response_without_confidence() {
        let body: ClassifyResponse = serde_json::from_str(r#"{"result":"Kinh doanh"}"#).unwrap();
        assert_eq!(body.result, "Kinh doanh");
        assert_eq!(body.confidence, None);
    }

    #[test]
    fn test_response_with_confidence() {
        let body: ClassifyResponse =
            serde_json::from_str(r#"{"result":"The thao","confidence":0.93}"#).unwrap();
        assert_eq!(body.confidence, Some(0.93));
    }
}
