use reqwest::{Client, StatusCode};

use crate::error::{CartoonizeError, Result};
use crate::logger;
use crate::models::caption::{CaptionRequest, CaptionResponse};
use crate::models::image::NormalizedImage;

/// Client for the captioning/labeling service.
#[derive(Debug, Clone)]
pub struct CaptionClient {
    client: Client,
    endpoint: String,
}

impl CaptionClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn predict_url(&self) -> String {
        [self.endpoint.trim_end_matches('/'), "/predict"].concat()
    }

    /// Ask the service to describe the normalized image. The returned text
    /// becomes the backbone of the generation prompt.
    pub async fn caption(&self, image: &NormalizedImage) -> Result<String> {
        let request = CaptionRequest::new(image);
        let url = self.predict_url();

        log::debug!("Requesting caption from {}", url);
        let timer = logger::timer("caption round trip");

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CartoonizeError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CartoonizeError::NetworkError(e.to_string()))?;
        timer.stop();

        parse_caption_body(status, &body)
    }
}

fn parse_caption_body(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        return Err(CartoonizeError::ServiceError(format!(
            "caption service returned {}: {}",
            status, body
        )));
    }

    let parsed: CaptionResponse = serde_json::from_str(body).map_err(|_| {
        log::error!("Unexpected caption response body: {}", body);
        CartoonizeError::ServiceError(
            "caption response is missing completion.labels".to_string(),
        )
    })?;

    match parsed.completion.labels.primary() {
        Some(label) => Ok(label.to_string()),
        None => Err(CartoonizeError::ServiceError(
            "caption response contained no labels".to_string(),
        )),
    }
}
