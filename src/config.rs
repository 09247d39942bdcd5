use std::env;

/// Base URLs of the two remote inference services. Both must be set before a
/// client can be built; everything else about the requests is fixed by the
/// pipeline itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub caption_endpoint: Option<String>,
    pub generation_endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            caption_endpoint: None,
            generation_endpoint: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let caption_endpoint = env::var("CAPTION_ENDPOINT").ok();
        let generation_endpoint = env::var("GENERATION_ENDPOINT").ok();

        Config {
            caption_endpoint,
            generation_endpoint,
        }
    }

    pub fn with_caption_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.caption_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_generation_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.generation_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_endpoints(
        mut self,
        caption_endpoint: impl Into<String>,
        generation_endpoint: impl Into<String>,
    ) -> Self {
        self.caption_endpoint = Some(caption_endpoint.into());
        self.generation_endpoint = Some(generation_endpoint.into());
        self
    }
}
