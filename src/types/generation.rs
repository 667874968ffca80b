//! Generation settings and essay variants.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sampling controls sent with every generation request.
///
/// Every field is optional; a backend omits unset fields from its request body.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
}

impl GenerationSettings {
    /// Fill unset fields from `defaults`.
    pub fn or(self, defaults: &GenerationSettings) -> GenerationSettings {
        GenerationSettings {
            max_tokens: self.max_tokens.or(defaults.max_tokens),
            temperature: self.temperature.or(defaults.temperature),
            top_p: self.top_p.or(defaults.top_p),
            top_k: self.top_k.or(defaults.top_k),
        }
    }
}

/// Which essay shape to request.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EssayVariant {
    /// One prompt, one exchange, short essay.
    #[default]
    Single,
    /// Three prompts (introduction, body, conclusion) issued one after another.
    Sectioned,
}
