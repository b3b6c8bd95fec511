/// Feedback categories
///
/// A category picks the asset pool and the fallback stimulus for a play or show.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Feedback category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Correct answer
    Correct,

    /// Wrong answer
    Wrong,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Category {
    /// Both categories, in load order
    pub const ALL: [Category; 2] = [Category::Correct, Category::Wrong];

    /// Name used for asset directories and notifications
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Correct => "correct",
            Category::Wrong => "wrong",
        }
    }

    /// Map an effect type to a category.
    ///
    /// `"correct"` and `"success"` are correct; anything else is wrong.
    pub fn from_effect_type(effect_type: &str) -> Self {
        match effect_type {
            "correct" | "success" => Category::Correct,
            _ => Category::Wrong,
        }
    }

    /// Fallback tone frequency in Hz
    pub fn tone_frequency(&self) -> f32 {
        match self {
            Category::Correct => 800.0,
            Category::Wrong => 400.0,
        }
    }

    /// Fallback overlay glyph
    pub fn glyph(&self) -> char {
        match self {
            Category::Correct => '✓',
            Category::Wrong => '✗',
        }
    }

    /// Fallback overlay color as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            Category::Correct => "#4CAF50",
            Category::Wrong => "#F44336",
        }
    }
}
