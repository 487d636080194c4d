//! Venue records as they appear in the showcase file, plus the card
//! renderer that turns them into display-ready views.

pub mod carousel;
pub mod view;

use serde::{Deserialize, Serialize};

pub use carousel::DisplayState;
pub use view::{derive_view, VenueView};

/// Semantic color of a drink badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Primary,
    Secondary,
    #[default]
    Accent,
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl BadgeColor {
    pub const ALL: [BadgeColor; 8] = [
        BadgeColor::Primary,
        BadgeColor::Secondary,
        BadgeColor::Accent,
        BadgeColor::Neutral,
        BadgeColor::Info,
        BadgeColor::Success,
        BadgeColor::Warning,
        BadgeColor::Error,
    ];

    /// Look up a color tag, ignoring case and surrounding whitespace
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(tag))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeColor::Primary => "primary",
            BadgeColor::Secondary => "secondary",
            BadgeColor::Accent => "accent",
            BadgeColor::Neutral => "neutral",
            BadgeColor::Info => "info",
            BadgeColor::Success => "success",
            BadgeColor::Warning => "warning",
            BadgeColor::Error => "error",
        }
    }
}

/// One favorite drink: either a bare name or a name with a color tag.
///
/// The tag is kept as raw text so an unknown value still loads and
/// falls back to accent when the card is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DrinkEntry {
    Plain(String),
    Tagged {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

impl DrinkEntry {
    pub fn name(&self) -> &str {
        match self {
            DrinkEntry::Plain(name) => name,
            DrinkEntry::Tagged { name, .. } => name,
        }
    }
}

/// A titled paragraph of the long-form review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSection {
    pub heading: String,
    pub body: String,
}

/// One bar, exactly as configured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub rank: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub favorite_drinks: Vec<DrinkEntry>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub last_visit: String,
    #[serde(default)]
    pub google_maps_url: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_served_by: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub review: Vec<ReviewSection>,
}
