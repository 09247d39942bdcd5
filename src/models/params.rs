use std::collections::HashMap;

use super::catalog::{Modifier, Style};

/// Default position of the imagination slider (user scale 3.0-10.0).
pub const DEFAULT_STRENGTH: f32 = 7.0;
/// Default inference step count (user scale 20-50).
pub const DEFAULT_STEPS: u32 = 30;
/// Default emphasis weight for the free-text description (user scale 1.0-5.0).
pub const DEFAULT_DESCRIPTION_WEIGHT: f32 = 1.0;

/// One generation request's worth of user choices, built fresh per
/// submission and immutable afterwards. A seed of 0 leaves randomization to
/// the generation service; any other value pins its sampling.
#[derive(Debug, Clone)]
pub struct GenerationParameters {
    pub style: Style,
    pub strength: f32,
    pub seed: u32,
    pub steps: u32,
    pub extra_description: Option<String>,
    pub extra_description_weight: f32,
    pub modifiers: HashMap<Modifier, f32>,
}

impl GenerationParameters {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            strength: DEFAULT_STRENGTH,
            seed: 0,
            steps: DEFAULT_STEPS,
            extra_description: None,
            extra_description_weight: DEFAULT_DESCRIPTION_WEIGHT,
            modifiers: HashMap::new(),
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_description(mut self, text: impl Into<String>, weight: f32) -> Self {
        self.extra_description = Some(text.into());
        self.extra_description_weight = weight;
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier, strength: f32) -> Self {
        self.modifiers.insert(modifier, strength);
        self
    }

    /// Strength as the generation service expects it, a 0.0-1.0 fraction.
    pub fn transmitted_strength(&self) -> f32 {
        self.strength / 10.0
    }

    /// The free-text description wrapped with its emphasis weight, in the
    /// `(text: weight)` form the generation service parses. `None` when the
    /// description is unset or empty.
    pub fn weighted_description(&self) -> Option<String> {
        match self.extra_description.as_deref() {
            Some(text) if !text.is_empty() => {
                Some(format!("({}: {:?})", text, self.extra_description_weight))
            }
            _ => None,
        }
    }
}
