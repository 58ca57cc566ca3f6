//! Entrance motion rendered as CSS transitions
//!
//! Elements start in an offset pose and transition to rest once the page's
//! `loaded` flag flips, shortly after mount.

use std::fmt;

/// Delay between mount and the `loaded` flag flipping
pub const ENTRANCE_DELAY_MS: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        })
    }
}

/// Starting pose of an entrance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_y_px: 0.0,
        scale: 1.0,
    };

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y_px, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub duration_s: f32,
    pub delay_s: f32,
    pub easing: Easing,
}

impl Motion {
    /// Fade in while rising `offset_px`
    pub const fn fade_up(offset_px: f32, duration_s: f32, delay_s: f32) -> Self {
        Self {
            from: Pose {
                opacity: 0.0,
                translate_y_px: offset_px,
                scale: 1.0,
            },
            duration_s,
            delay_s,
            easing: Easing::EaseOut,
        }
    }

    /// Fade in while growing from `scale`
    pub const fn scale_in(scale: f32, duration_s: f32, delay_s: f32) -> Self {
        Self {
            from: Pose {
                opacity: 0.0,
                translate_y_px: 0.0,
                scale,
            },
            duration_s,
            delay_s,
            easing: Easing::EaseOut,
        }
    }

    pub const fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Inline style for the given `loaded` state
    pub fn style(&self, loaded: bool) -> String {
        if !loaded {
            return self.from.css();
        }
        format!(
            "{} transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s;",
            Pose::REST.css(),
            d = self.duration_s,
            e = self.easing,
            delay = self.delay_s,
        )
    }
}
