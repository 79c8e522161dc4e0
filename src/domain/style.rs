use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Tone and register the generation service applies to the enhanced prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnhancementStyle {
    #[default]
    #[serde(rename = "Professional")]
    Professional,
    #[serde(rename = "Technical")]
    Technical,
    #[serde(rename = "Academic")]
    Academic,
    #[serde(rename = "Creative/Storytelling")]
    Creative,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Simple & Beginner-friendly")]
    Simple,
}

impl EnhancementStyle {
    /// All available styles in display order.
    pub const ALL: [EnhancementStyle; 6] = [
        EnhancementStyle::Professional,
        EnhancementStyle::Technical,
        EnhancementStyle::Academic,
        EnhancementStyle::Creative,
        EnhancementStyle::Marketing,
        EnhancementStyle::Simple,
    ];

    /// Label sent to the generation service and shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            EnhancementStyle::Professional => "Professional",
            EnhancementStyle::Technical => "Technical",
            EnhancementStyle::Academic => "Academic",
            EnhancementStyle::Creative => "Creative/Storytelling",
            EnhancementStyle::Marketing => "Marketing",
            EnhancementStyle::Simple => "Simple & Beginner-friendly",
        }
    }

    /// Short name accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            EnhancementStyle::Professional => "professional",
            EnhancementStyle::Technical => "technical",
            EnhancementStyle::Academic => "academic",
            EnhancementStyle::Creative => "creative",
            EnhancementStyle::Marketing => "marketing",
            EnhancementStyle::Simple => "simple",
        }
    }

    /// Parse a style from its slug or its full label.
    pub fn from_name(name: &str) -> Option<EnhancementStyle> {
        let needle = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.slug() == needle || style.label().to_lowercase() == needle)
    }
}

impl fmt::Display for EnhancementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnhancementStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AppError::InvalidStyle(s.to_string()))
    }
}
