//! Decorative layers painted behind the page content

use leptos::prelude::*;

use crate::core::{Motion, Palette, Rgba};

/// Blurred aurora ellipse, centered behind the hero
#[component]
pub fn AuroraBackground(palette: Palette, #[prop(default = 1.0)] intensity: f32) -> impl IntoView {
    let style = format!(
        "background: {}; filter: blur(60px); border-radius: 50%; animation-duration: {:.2}s;",
        palette.aurora_gradient(),
        20.0 / intensity.max(0.1)
    );

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" style="z-index: 0;" aria-hidden="true">
            <div class="absolute top-1/2 left-1/2 aurora-layer aurora-effect" style=style></div>
        </div>
    }
}

/// Faint radial glow rising from the bottom edge
#[component]
pub fn AmbientGlow(palette: Palette) -> impl IntoView {
    let style = format!("background: {};", palette.base_glow());

    view! {
        <div class="fixed inset-0 pointer-events-none" style="z-index: -1;" aria-hidden="true">
            <div class="absolute inset-0" style=style></div>
        </div>
    }
}

/// The palette's four floating orbs
#[component]
pub fn FloatingOrbs(palette: Palette, #[prop(default = 1.0)] intensity: f32) -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" style="z-index: 1;" aria-hidden="true">
            {palette
                .orbs()
                .into_iter()
                .map(|orb| view! {
                    <div class="absolute rounded-full gentle-float" style=orb.style(intensity)></div>
                })
                .collect_view()}
        </div>
    }
}

/// A large pulsing glow used on the welcome screen
#[derive(Clone, Copy, Debug)]
pub struct PulseOrb {
    /// Position and size classes
    pub class: &'static str,
    pub color: Rgba,
    /// `pulse-grow` or `pulse-shrink`
    pub keyframes: &'static str,
    pub motion: Motion,
}

impl PulseOrb {
    fn style(&self) -> String {
        format!(
            "background: radial-gradient(circle, {} 0%, transparent 70%); \
             animation: {} {}s {} {}s infinite;",
            self.color, self.keyframes, self.motion.duration_s, self.motion.easing, self.motion.delay_s
        )
    }
}

#[component]
pub fn PulseOrbs(orbs: Vec<PulseOrb>) -> impl IntoView {
    orbs.into_iter()
        .map(|orb| {
            let class = format!("absolute rounded-full blur-2xl pointer-events-none {}", orb.class);
            view! { <div class=class style=orb.style() aria-hidden="true"></div> }
        })
        .collect_view()
}
