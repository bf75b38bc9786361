use serde::Deserialize;
use thiserror::Error;

use crate::components::card_swap::EasingProfile;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub nav_items: Vec<String>,
    pub hero: HeroContent,
    pub about: AboutContent,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub lead: String,
    pub highlight: String,
    pub tagline: String,
    pub scroll_hint: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AboutContent {
    pub heading: String,
    pub cards: Vec<CardContent>,
    #[serde(default)]
    pub carousel: CarouselSettings,
}

/// Timing of the About section's card stack.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CarouselSettings {
    pub easing: EasingProfile,
    pub delay_ms: u32,
    pub pause_on_hover: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            easing: EasingProfile::Elastic,
            delay_ms: 4000,
            pause_on_hover: false,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub content: String,
}

impl SiteContent {
    /// An empty card list is valid; the About section then shows a still stack.
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The copy compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(SITE_JSON)
    }
}
