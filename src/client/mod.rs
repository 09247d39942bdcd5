pub mod caption_client;
pub mod generation_client;

use reqwest::Client;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{CartoonizeError, Result};
use crate::models::generation::GenerationRequest;
use crate::models::image::{GeneratedImage, NormalizedImage};
use crate::models::params::GenerationParameters;
use crate::normalizer;

pub use caption_client::CaptionClient;
pub use generation_client::GenerationClient;

/// Everything a caller may want to show for one completed request: the
/// upright square input actually sent to the services, the caption the
/// labeling service produced, and the final cartoon.
#[derive(Debug, Clone)]
pub struct CartoonizeOutput {
    pub normalized: NormalizedImage,
    pub caption: String,
    pub image: GeneratedImage,
}

/// Facade over the two service clients. Holds no per-request state, so one
/// instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct CartoonizeClient {
    caption_client: CaptionClient,
    generation_client: GenerationClient,
}

impl CartoonizeClient {
    pub fn new(config: Config) -> Result<Self> {
        let Some(caption_endpoint) = config.caption_endpoint else {
            return Err(CartoonizeError::ConfigError(
                "CAPTION_ENDPOINT is not set".to_string(),
            ));
        };
        let Some(generation_endpoint) = config.generation_endpoint else {
            return Err(CartoonizeError::ConfigError(
                "GENERATION_ENDPOINT is not set".to_string(),
            ));
        };

        let client = Client::new();

        Ok(Self {
            caption_client: CaptionClient::new(client.clone(), caption_endpoint),
            generation_client: GenerationClient::new(client, generation_endpoint),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn caption(&self) -> &CaptionClient {
        &self.caption_client
    }

    pub fn generation(&self) -> &GenerationClient {
        &self.generation_client
    }

    /// Run the full photo-to-cartoon pipeline: normalize the upload, caption
    /// it, then feed image and caption into the generation service. The two
    /// remote calls are strictly sequential — the second request's prompt
    /// depends on the first's result. A failure at any step aborts the whole
    /// operation; nothing is retried and no partial result is returned.
    pub async fn cartoonize(
        &self,
        raw: &[u8],
        params: &GenerationParameters,
    ) -> Result<CartoonizeOutput> {
        let request_id = Uuid::new_v4();
        log::info!(
            "🎨 [{}] Cartoonize request started ({} upload bytes, style: {})",
            request_id,
            raw.len(),
            params.style.label()
        );

        let normalized = normalizer::normalize(raw)?;

        let caption = self.caption_client.caption(&normalized).await?;
        log::info!("🏷️  [{}] Caption: {}", request_id, caption);

        let request = GenerationRequest::new(&normalized, &caption, params);
        let image = self.generation_client.generate(&request).await?;
        log::info!("✅ [{}] Cartoonize request complete", request_id);

        Ok(CartoonizeOutput {
            normalized,
            caption,
            image,
        })
    }
}
