use std::{env, fs};

use cartoonize::{CartoonizeClient, Config, GenerationParameters, Modifier, Style};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cartoonize::logger::init_with_config(
        cartoonize::logger::LoggerConfig::development()
            .with_level(cartoonize::logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    log::info!("🔍 Checking service endpoints...");
    let config = Config::from_env();

    match &config.caption_endpoint {
        Some(endpoint) => log::info!("CAPTION_ENDPOINT: {}", endpoint),
        None => log::warn!("⚠️  CAPTION_ENDPOINT not set"),
    }
    match &config.generation_endpoint {
        Some(endpoint) => log::info!("GENERATION_ENDPOINT: {}", endpoint),
        None => log::warn!("⚠️  GENERATION_ENDPOINT not set"),
    }

    log::info!("🖌️  Available styles:");
    for style in Style::all() {
        log::info!("  {} - {}", style.label(), style.model_id());
    }

    log::info!("🧪 Available modifiers:");
    for modifier in Modifier::all() {
        log::info!("  {} - {}", modifier.label(), modifier.lora_id());
    }

    let Some(path) = env::args().nth(1) else {
        log::error!("❌ Usage: cartoonize <photo>");
        return Err("missing input photo path".into());
    };

    let upload = fs::read(&path)?;
    log::info!("📷 Loaded {} ({} bytes)", path, upload.len());

    let client = match CartoonizeClient::new(config) {
        Ok(client) => {
            log::info!("✅ Cartoonize client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize cartoonize client: {}", e);
            return Err(e.into());
        }
    };

    // Defaults match the interactive front end's initial slider positions.
    let params = GenerationParameters::new(Style::ThreeDAnimatedA)
        .with_strength(7.0)
        .with_steps(30);

    match client.cartoonize(&upload, &params).await {
        Ok(output) => {
            log::info!("🏷️  Caption: {}", output.caption);

            fs::write("normalized.png", output.normalized.png_bytes())?;
            log::info!("💾 Normalized input saved to: normalized.png");

            fs::write(output.image.download_file_name(), output.image.png_bytes())?;
            log::info!("💾 Cartoon saved to: {}", output.image.download_file_name());
        }
        Err(e) => {
            log::error!("❌ Cartoonize request failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
