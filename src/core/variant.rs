//! Hero page variants
//!
//! The hero screen exists in three looks. They share one view and differ only
//! in the [`HeroConfig`] resolved here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::palette::{Palette, RADIANT, SERENE};
use super::particles::ParticleConfig;

pub const BRAND_NAME: &str = "Kaydio";
pub const TAGLINE: &str = "A new realm of wellness";
pub const CTA_LABEL: &str = "Enter the Realm";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroVariant {
    /// Soft palette with water ripples
    #[default]
    Serene,
    /// Saturated palette, faster animation
    Radiant,
    /// Serene palette plus a feature card grid
    Showcase,
}

impl HeroVariant {
    pub const ALL: [HeroVariant; 3] = [
        HeroVariant::Serene,
        HeroVariant::Radiant,
        HeroVariant::Showcase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeroVariant::Serene => "serene",
            HeroVariant::Radiant => "radiant",
            HeroVariant::Showcase => "showcase",
        }
    }

    /// Route segment the variant is served on; the default variant owns `/`
    pub fn segment(&self) -> &'static str {
        match self {
            HeroVariant::Serene => "",
            HeroVariant::Radiant => "radiant",
            HeroVariant::Showcase => "showcase",
        }
    }

    pub fn config(&self) -> HeroConfig {
        match self {
            HeroVariant::Serene => HeroConfig::new(*self, SERENE, 1.0, false),
            HeroVariant::Radiant => HeroConfig::new(*self, RADIANT, 1.6, false),
            HeroVariant::Showcase => HeroConfig::new(*self, SERENE, 1.0, true),
        }
    }
}

impl fmt::Display for HeroVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hero variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for HeroVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeroVariant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Everything the hero view needs to render one variant
#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    pub variant: HeroVariant,
    pub palette: Palette,
    /// Animation speed multiplier, 1.0 is the calm default
    pub intensity: f32,
    pub show_cards: bool,
    pub particles: ParticleConfig,
}

impl HeroConfig {
    fn new(variant: HeroVariant, palette: Palette, intensity: f32, show_cards: bool) -> Self {
        Self {
            variant,
            palette,
            intensity,
            show_cards,
            particles: ParticleConfig::hero(&palette, intensity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particles::HERO_PARTICLE_COUNT;

    #[test]
    fn test_parse_variant() {
        assert_eq!("serene".parse::<HeroVariant>(), Ok(HeroVariant::Serene));
        assert_eq!(" Radiant ".parse::<HeroVariant>(), Ok(HeroVariant::Radiant));
        assert_eq!("SHOWCASE".parse::<HeroVariant>(), Ok(HeroVariant::Showcase));
        assert_eq!(
            "neon".parse::<HeroVariant>(),
            Err(UnknownVariant("neon".to_string()))
        );
    }

    #[test]
    fn test_segments_are_unique() {
        let mut paths: Vec<&str> = HeroVariant::ALL.iter().map(|v| v.segment()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), HeroVariant::ALL.len());
    }

    #[test]
    fn test_only_showcase_has_cards() {
        for variant in HeroVariant::ALL {
            assert_eq!(variant.config().show_cards, variant == HeroVariant::Showcase);
        }
    }

    #[test]
    fn test_every_variant_uses_hero_particle_count() {
        for variant in HeroVariant::ALL {
            let config = variant.config();
            assert_eq!(config.particles.count, HERO_PARTICLE_COUNT);
            assert!(config.particles.validate().is_ok());
        }
    }

    #[test]
    fn test_radiant_is_more_intense() {
        assert!(HeroVariant::Radiant.config().intensity > HeroVariant::Serene.config().intensity);
        assert_eq!(HeroVariant::Radiant.config().palette, RADIANT);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&HeroVariant::Showcase).unwrap();
        assert_eq!(json, "\"showcase\"");

        let parsed: HeroVariant = serde_json::from_str("\"radiant\"").unwrap();
        assert_eq!(parsed, HeroVariant::Radiant);
    }
}
