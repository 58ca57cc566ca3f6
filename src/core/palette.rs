//! Color palettes and the gradients derived from them
//!
//! A palette is four accent colors. Every gradient, glow and orb on a page is
//! computed from those accents so that switching the palette re-skins the
//! whole screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color rendered as a CSS `rgba()` value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Hex form without alpha, used for solid gradient stops
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Horizontal anchor of a floating orb
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Left(f32),
    Right(f32),
}

/// A soft blurred circle drifting behind the content
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub size_px: u32,
    pub top_pct: f32,
    pub anchor: Anchor,
    pub blur_px: u32,
    pub delay_s: f32,
    pub color: Rgba,
}

impl Orb {
    /// Inline style; `intensity` speeds up the float animation
    pub fn style(&self, intensity: f32) -> String {
        let horizontal = match self.anchor {
            Anchor::Left(pct) => format!("left: {}%;", pct),
            Anchor::Right(pct) => format!("right: {}%;", pct),
        };
        format!(
            "width: {size}px; height: {size}px; top: {top}%; {horizontal} \
             background: radial-gradient(circle, {color} 0%, transparent 70%); \
             filter: blur({blur}px); animation-delay: {delay}s; animation-duration: {duration:.2}s;",
            size = self.size_px,
            top = self.top_pct,
            color = self.color,
            blur = self.blur_px,
            delay = self.delay_s,
            duration = FLOAT_PERIOD_S / intensity.max(0.1),
        )
    }
}

/// Base period of the `gentle-float` keyframes
pub const FLOAT_PERIOD_S: f32 = 8.0;

/// Four accent colors plus a display name
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub accents: [Rgba; 4],
}

/// Pink, lavender, sky and salmon: the lake-at-dusk look
pub const SERENE: Palette = Palette {
    name: "serene",
    accents: [
        Rgba::rgb(255, 182, 193),
        Rgba::rgb(186, 164, 255),
        Rgba::rgb(135, 206, 235),
        Rgba::rgb(255, 160, 122),
    ],
};

/// Saturated variant of [`SERENE`]
pub const RADIANT: Palette = Palette {
    name: "radiant",
    accents: [
        Rgba::rgb(255, 105, 180),
        Rgba::rgb(147, 112, 219),
        Rgba::rgb(0, 191, 255),
        Rgba::rgb(255, 127, 80),
    ],
};

/// Oil-painting tones used by the welcome screen
pub const OIL: Palette = Palette {
    name: "oil",
    accents: [
        Rgba::rgb(38, 94, 150),
        Rgba::rgb(135, 169, 107),
        Rgba::rgb(218, 165, 32),
        Rgba::rgb(204, 108, 76),
    ],
};

impl Palette {
    pub fn primary(&self) -> Rgba {
        self.accents[0]
    }

    /// Brand heading fill: all four accents, wrapping back to the first
    pub fn heading_gradient(&self) -> String {
        let [a, b, c, d] = self.accents;
        format!(
            "linear-gradient(135deg, {} 0%, {} 25%, {} 50%, {} 75%, {} 100%)",
            a.hex(),
            b.hex(),
            c.hex(),
            d.hex(),
            a.hex()
        )
    }

    pub fn heading_style(&self) -> String {
        format!(
            "background: {}; -webkit-background-clip: text; -webkit-text-fill-color: transparent; \
             background-clip: text; filter: drop-shadow(0 4px 20px {}); font-weight: 700;",
            self.heading_gradient(),
            self.primary().with_alpha(0.3)
        )
    }

    pub fn aurora_gradient(&self) -> String {
        let [a, b, c, d] = self.accents;
        format!(
            "linear-gradient(45deg, {} 0%, {} 25%, {} 50%, {} 75%, transparent 100%)",
            a.with_alpha(0.08),
            b.with_alpha(0.06),
            c.with_alpha(0.04),
            d.with_alpha(0.06)
        )
    }

    pub fn base_glow(&self) -> String {
        format!(
            "radial-gradient(ellipse at center bottom, {} 0%, {} 40%, transparent 70%)",
            self.accents[0].with_alpha(0.02),
            self.accents[1].with_alpha(0.01)
        )
    }

    pub fn divider_gradient(&self) -> String {
        format!(
            "linear-gradient(90deg, transparent 0%, {} 50%, transparent 100%)",
            self.primary().with_alpha(0.6)
        )
    }

    /// The four floating orbs, one per accent
    pub fn orbs(&self) -> [Orb; 4] {
        let [a, b, c, d] = self.accents;
        [
            Orb {
                size_px: 128,
                top_pct: 15.0,
                anchor: Anchor::Left(10.0),
                blur_px: 20,
                delay_s: 0.0,
                color: a.with_alpha(0.15),
            },
            Orb {
                size_px: 96,
                top_pct: 60.0,
                anchor: Anchor::Right(20.0),
                blur_px: 15,
                delay_s: 2.0,
                color: b.with_alpha(0.12),
            },
            Orb {
                size_px: 160,
                top_pct: 40.0,
                anchor: Anchor::Left(70.0),
                blur_px: 25,
                delay_s: 4.0,
                color: c.with_alpha(0.1),
            },
            Orb {
                size_px: 80,
                top_pct: 25.0,
                anchor: Anchor::Right(15.0),
                blur_px: 12,
                delay_s: 6.0,
                color: d.with_alpha(0.18),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_display() {
        let color = Rgba::rgb(255, 182, 193).with_alpha(0.15);
        assert_eq!(color.to_string(), "rgba(255, 182, 193, 0.15)");
    }

    #[test]
    fn test_rgba_hex_ignores_alpha() {
        assert_eq!(Rgba::rgb(255, 182, 193).with_alpha(0.2).hex(), "#FFB6C1");
        assert_eq!(Rgba::rgb(0, 191, 255).hex(), "#00BFFF");
    }

    #[test]
    fn test_heading_gradient_wraps_to_first_accent() {
        let gradient = SERENE.heading_gradient();
        assert!(gradient.starts_with("linear-gradient(135deg, #FFB6C1 0%"));
        assert!(gradient.ends_with("#FFB6C1 100%)"));
    }

    #[test]
    fn test_orbs_use_each_accent_once() {
        let orbs = SERENE.orbs();
        for (orb, accent) in orbs.iter().zip(SERENE.accents) {
            assert_eq!((orb.color.r, orb.color.g, orb.color.b), (accent.r, accent.g, accent.b));
            assert!(orb.color.a < 0.2);
        }
    }

    #[test]
    fn test_orb_style_anchor_and_intensity() {
        let orbs = SERENE.orbs();

        let left = orbs[0].style(1.0);
        assert!(left.contains("left: 10%;"));
        assert!(left.contains("animation-duration: 8.00s;"));

        let right = orbs[1].style(2.0);
        assert!(right.contains("right: 20%;"));
        assert!(right.contains("animation-duration: 4.00s;"));
    }

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(SERENE.accents, RADIANT.accents);
        assert_ne!(SERENE.accents, OIL.accents);
    }
}
