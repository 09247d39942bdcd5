use serde::{Deserialize, Serialize};

/// Output style preset. Each style selects the diffusion checkpoint the
/// generation service runs for the image-to-image pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    ThreeDAnimatedA,
    ThreeDAnimatedB,
    ThreeDAnimatedC,
    TwoDCartoon,
    Rpg,
    Anime,
}

impl Style {
    pub fn all() -> &'static [Style] {
        &[
            Style::ThreeDAnimatedA,
            Style::ThreeDAnimatedB,
            Style::ThreeDAnimatedC,
            Style::TwoDCartoon,
            Style::Rpg,
            Style::Anime,
        ]
    }

    /// Human-readable name, suitable for a selection widget.
    pub fn label(&self) -> &'static str {
        match self {
            Style::ThreeDAnimatedA => "3D Animated A",
            Style::ThreeDAnimatedB => "3D Animated B",
            Style::ThreeDAnimatedC => "3D Animated C",
            Style::TwoDCartoon => "2D Cartoon",
            Style::Rpg => "RPG",
            Style::Anime => "Anime",
        }
    }

    /// Checkpoint identifier understood by the generation service.
    pub fn model_id(&self) -> &'static str {
        match self {
            Style::ThreeDAnimatedA => "cartoon_v2",
            Style::ThreeDAnimatedB => "3d_cartoon",
            Style::ThreeDAnimatedC => "cartoon",
            Style::TwoDCartoon => "dark-sushi-mix",
            Style::Rpg => "aZovyaRPGArtistTools_v3",
            Style::Anime => "toonyou_beta3",
        }
    }

    pub fn from_label(label: &str) -> Option<Style> {
        Style::all().iter().copied().find(|s| s.label() == label)
    }
}

/// Optional fine-tuning adjustment layered onto the selected style. Each
/// modifier is toggled independently and carries its own strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    LowLighting,
    SimpleAnimation,
    Pixelated,
    PigTails,
    Steampunk,
}

impl Modifier {
    pub fn all() -> &'static [Modifier] {
        &[
            Modifier::LowLighting,
            Modifier::SimpleAnimation,
            Modifier::Pixelated,
            Modifier::PigTails,
            Modifier::Steampunk,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Modifier::LowLighting => "Low Lighting",
            Modifier::SimpleAnimation => "Simple Animation",
            Modifier::Pixelated => "Pixelated",
            Modifier::PigTails => "Pig Tails",
            Modifier::Steampunk => "Steampunk",
        }
    }

    /// LoRA identifier understood by the generation service.
    pub fn lora_id(&self) -> &'static str {
        match self {
            Modifier::LowLighting => "LowRA",
            Modifier::SimpleAnimation => "coolkids_v2.5",
            Modifier::Pixelated => "pixelart",
            Modifier::PigTails => "pigtail_hairstyle",
            Modifier::Steampunk => "steampunkschematics",
        }
    }

    pub fn from_label(label: &str) -> Option<Modifier> {
        Modifier::all().iter().copied().find(|m| m.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_catalog() {
        assert_eq!(Style::all().len(), 6);
        assert_eq!(Style::ThreeDAnimatedA.model_id(), "cartoon_v2");
        assert_eq!(Style::ThreeDAnimatedB.model_id(), "3d_cartoon");
        assert_eq!(Style::ThreeDAnimatedC.model_id(), "cartoon");
        assert_eq!(Style::TwoDCartoon.model_id(), "dark-sushi-mix");
        assert_eq!(Style::Rpg.model_id(), "aZovyaRPGArtistTools_v3");
        assert_eq!(Style::Anime.model_id(), "toonyou_beta3");
    }

    #[test]
    fn test_modifier_catalog() {
        assert_eq!(Modifier::all().len(), 5);
        assert_eq!(Modifier::LowLighting.lora_id(), "LowRA");
        assert_eq!(Modifier::SimpleAnimation.lora_id(), "coolkids_v2.5");
        assert_eq!(Modifier::Pixelated.lora_id(), "pixelart");
        assert_eq!(Modifier::PigTails.lora_id(), "pigtail_hairstyle");
        assert_eq!(Modifier::Steampunk.lora_id(), "steampunkschematics");
    }

    #[test]
    fn test_from_label_round_trip() {
        for style in Style::all() {
            assert_eq!(Style::from_label(style.label()), Some(*style));
        }
        for modifier in Modifier::all() {
            assert_eq!(Modifier::from_label(modifier.label()), Some(*modifier));
        }
        assert_eq!(Style::from_label("Watercolor"), None);
    }
}
