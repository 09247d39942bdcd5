use reqwest::{Client, StatusCode};

use crate::error::{CartoonizeError, Result};
use crate::logger;
use crate::models::generation::{GenerationRequest, GenerationResponse};
use crate::models::image::GeneratedImage;

/// Client for the text-guided image-to-image generation service.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn predict_url(&self) -> String {
        [self.endpoint.trim_end_matches('/'), "/predict"].concat()
    }

    /// Run one image-to-image pass and decode the resulting PNG.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        let url = self.predict_url();

        log::debug!(
            "Requesting generation from {} (model: {}, {} steps)",
            url,
            request.model_name,
            request.num_inference_steps
        );
        let timer = logger::timer("generation round trip");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| CartoonizeError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CartoonizeError::NetworkError(e.to_string()))?;
        timer.stop();

        parse_generation_body(status, &body)
    }
}

fn parse_generation_body(status: StatusCode, body: &str) -> Result<GeneratedImage> {
    if !status.is_success() {
        return Err(CartoonizeError::ServiceError(format!(
            "generation service returned {}: {}",
            status, body
        )));
    }

    let parsed: GenerationResponse = serde_json::from_str(body).map_err(|_| {
        log::error!("Unexpected generation response body: {}", body);
        CartoonizeError::ServiceError("generation response is missing image_0".to_string())
    })?;

    GeneratedImage::from_base64(&parsed.image_0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use std::io::Cursor;

    fn png_base64() -> String {
        let image = image::DynamicImage::ImageRgb8(image::RgbImage::new(8, 8));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        BASE64.encode(buffer.into_inner())
    }

    #[test]
    fn test_parse_generation_body() {
        let body = format!(r#"{{"image_0": "{}"}}"#, png_base64());
        let generated = parse_generation_body(StatusCode::OK, &body).unwrap();
        assert!(!generated.png_bytes().is_empty());
    }

    #[test]
    fn test_non_success_status_is_a_service_error() {
        let body = format!(r#"{{"image_0": "{}"}}"#, png_base64());
        let err = parse_generation_body(StatusCode::BAD_GATEWAY, &body).unwrap_err();
        assert!(matches!(err, CartoonizeError::ServiceError(_)));
    }

    #[test]
    fn test_missing_image_field_is_a_service_error() {
        let err = parse_generation_body(StatusCode::OK, r#"{"images": []}"#).unwrap_err();
        assert!(matches!(err, CartoonizeError::ServiceError(_)));
    }

    #[test]
    fn test_undecodable_payload_is_a_service_error() {
        let body = r#"{"image_0": "////not-an-image////"}"#;
        let err = parse_generation_body(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, CartoonizeError::ServiceError(_)));
    }
}
