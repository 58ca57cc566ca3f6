//! Hover state of the call-to-action and the style derived from it

use super::palette::{Palette, Rgba};

/// Pointer state of the call-to-action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    pub fn on_pointer_enter(self) -> Self {
        HoverState::Hovered
    }

    pub fn on_pointer_leave(self) -> Self {
        HoverState::Idle
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, HoverState::Hovered)
    }
}

/// The three style properties that change on hover
#[derive(Clone, Debug, PartialEq)]
pub struct CtaStyle {
    pub background: String,
    pub box_shadow: String,
    pub border_color: String,
}

impl CtaStyle {
    pub fn for_state(palette: &Palette, state: HoverState) -> Self {
        let [a, b, c, _] = palette.accents;
        let white = Rgba::rgb(255, 255, 255);
        let black = Rgba::rgb(0, 0, 0);

        match state {
            HoverState::Idle => Self {
                background: format!(
                    "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
                    a.with_alpha(0.08),
                    b.with_alpha(0.06),
                    c.with_alpha(0.08)
                ),
                box_shadow: format!(
                    "0 8px 32px {}, inset 0 1px 0 {}, 0 4px 16px {}",
                    a.with_alpha(0.1),
                    white.with_alpha(0.1),
                    black.with_alpha(0.2)
                ),
                border_color: a.with_alpha(0.2).to_string(),
            },
            HoverState::Hovered => Self {
                background: format!(
                    "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
                    a.with_alpha(0.15),
                    b.with_alpha(0.12),
                    c.with_alpha(0.15)
                ),
                box_shadow: format!(
                    "0 12px 40px {}, inset 0 1px 0 {}, 0 6px 20px {}",
                    a.with_alpha(0.2),
                    white.with_alpha(0.2),
                    black.with_alpha(0.3)
                ),
                border_color: a.with_alpha(0.4).to_string(),
            },
        }
    }

    /// Full inline style, including the properties that never change
    pub fn to_inline(&self) -> String {
        format!(
            "background: {}; box-shadow: {}; border: 1px solid {}; border-radius: 12px; \
             backdrop-filter: blur(20px);",
            self.background, self.box_shadow, self.border_color
        )
    }
}
