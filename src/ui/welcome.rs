//! Standalone welcome splash: particles, staged entrance, one button

use leptos::prelude::*;

use crate::core::{
    CTA_LABEL, ENTRANCE_DELAY_MS, Easing, Motion, OIL, ParticleConfig, TAGLINE,
};
use crate::ui::backdrop::{PulseOrb, PulseOrbs};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::effects::use_loaded;
use crate::ui::particles::ParticleField;

const CONTAINER_ENTRANCE: Motion = Motion::fade_up(60.0, 1.5, 0.0);
const HEADING_ENTRANCE: Motion = Motion::scale_in(0.9, 1.8, 0.3);
const BUTTON_ENTRANCE: Motion = Motion::fade_up(40.0, 1.2, 1.0);

fn pulse_orbs() -> Vec<PulseOrb> {
    let [blue, sage, amber, _] = OIL.accents;
    vec![
        PulseOrb {
            class: "top-1/3 left-[20%] w-40 h-40",
            color: blue.with_alpha(0.15),
            keyframes: "pulse-grow",
            motion: Motion::fade_up(0.0, 12.0, 0.0).with_easing(Easing::EaseInOut),
        },
        PulseOrb {
            class: "bottom-1/3 right-[20%] w-32 h-32",
            color: sage.with_alpha(0.15),
            keyframes: "pulse-shrink",
            motion: Motion::fade_up(0.0, 15.0, 3.0).with_easing(Easing::EaseInOut),
        },
        PulseOrb {
            class: "top-1/2 right-1/3 w-28 h-28",
            color: amber.with_alpha(0.15),
            keyframes: "pulse-grow",
            motion: Motion::fade_up(0.0, 18.0, 6.0).with_easing(Easing::EaseInOut),
        },
    ]
}

#[component]
pub fn WelcomeScreen(
    /// Invoked when the visitor confirms "Enter the Realm"
    on_enter: Callback<()>,
) -> impl IntoView {
    let loaded = use_loaded(ENTRANCE_DELAY_MS);

    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden welcome-root">
            <ParticleField config=ParticleConfig::welcome(&OIL) />

            <div class="absolute inset-0 oil-texture opacity-40" aria-hidden="true"></div>

            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10">
                <div class="space-y-16" style=move || CONTAINER_ENTRANCE.style(loaded.get())>
                    <h1
                        class="text-4xl md:text-6xl lg:text-7xl font-light text-white leading-tight"
                        style=move || HEADING_ENTRANCE.style(loaded.get())
                    >
                        {TAGLINE}
                    </h1>

                    <div style=move || BUTTON_ENTRANCE.style(loaded.get())>
                        <Button
                            variant=ButtonVariant::Glow
                            size=ButtonSize::Large
                            on_click=on_enter
                            class="floating-gentle".to_string()
                        >
                            {CTA_LABEL}
                        </Button>
                    </div>
                </div>

                <PulseOrbs orbs=pulse_orbs() />
            </div>
        </div>
    }
}
