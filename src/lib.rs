//! Turn photos into cartoon-style artwork by chaining a remote
//! image-captioning service into a text-guided image-to-image diffusion
//! service. The crate owns upload normalization, request encoding, the two
//! sequential remote calls, and response decoding; rendering the results is
//! the caller's concern.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod normalizer;

pub use client::{CartoonizeClient, CartoonizeOutput, CaptionClient, GenerationClient};
pub use config::Config;
pub use error::{CartoonizeError, Result};
pub use models::{
    GeneratedImage, GenerationParameters, GenerationRequest, Modifier, NormalizedImage, Style,
};
