use serde::{Deserialize, Serialize};

use super::image::NormalizedImage;

/// Interrogation mode sent with every caption request. The service offers a
/// slower, more thorough mode; the pipeline always asks for the fast one.
pub const CAPTION_MODE: &str = "fast";

#[derive(Debug, Clone, Serialize)]
pub struct CaptionRequest {
    pub mode: &'static str,
    pub image: String,
}

impl CaptionRequest {
    pub fn new(image: &NormalizedImage) -> Self {
        Self {
            mode: CAPTION_MODE,
            image: image.to_base64(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionResponse {
    pub completion: CaptionCompletion,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionCompletion {
    pub labels: CaptionLabels,
}

/// The labeling field comes back either as one string or as a ranked list;
/// the first entry is the caption.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CaptionLabels {
    Single(String),
    Ranked(Vec<String>),
}

impl CaptionLabels {
    pub fn primary(&self) -> Option<&str> {
        match self {
            CaptionLabels::Single(label) => Some(label.as_str()),
            CaptionLabels::Ranked(labels) => labels.first().map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_request_shape() {
        let normalized = NormalizedImage::new(vec![1, 2, 3], 4, 4);
        let request = CaptionRequest::new(&normalized);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["mode"], "fast");
        assert_eq!(value["image"], normalized.to_base64());
    }

    #[test]
    fn test_labels_single_string() {
        let response: CaptionResponse =
            serde_json::from_str(r#"{"completion": {"labels": "a photo of a cat"}}"#).unwrap();
        assert_eq!(response.completion.labels.primary(), Some("a photo of a cat"));
    }

    #[test]
    fn test_labels_ranked_list() {
        let response: CaptionResponse = serde_json::from_str(
            r#"{"completion": {"labels": ["a photo of a cat", "a tabby close up"]}}"#,
        )
        .unwrap();
        assert_eq!(response.completion.labels.primary(), Some("a photo of a cat"));
    }

    #[test]
    fn test_labels_empty_list_has_no_primary() {
        let response: CaptionResponse =
            serde_json::from_str(r#"{"completion": {"labels": []}}"#).unwrap();
        assert_eq!(response.completion.labels.primary(), None);
    }
}
