//! Hero page
//!
//! One view for every hero variant. The variant picks palette, animation
//! intensity and whether the feature grid is shown.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{BRAND_NAME, ENTRANCE_DELAY_MS, HeroVariant, TAGLINE};
use crate::ui::backdrop::{AmbientGlow, AuroraBackground, FloatingOrbs};
use crate::ui::boundary::ContainmentBoundary;
use crate::ui::effects::use_loaded;
use crate::ui::hero::HeroContent;
use crate::ui::particles::ParticleField;
use crate::ui::ripples::RippleField;

#[component]
pub fn HeroPage(variant: HeroVariant) -> impl IntoView {
    // What entering leads to is left to the surrounding application
    let on_enter = Callback::new(move |()| {
        leptos::logging::log!("Enter the Realm selected on the {} hero", variant);
    });

    view! {
        <Title text=format!("{} | {}", BRAND_NAME, TAGLINE) />
        <Meta name="description" content=TAGLINE />

        <ContainmentBoundary>
            <HeroScreen variant=variant on_enter=on_enter />
        </ContainmentBoundary>
    }
}

#[component]
fn HeroScreen(variant: HeroVariant, on_enter: Callback<()>) -> impl IntoView {
    let config = variant.config();
    let palette = config.palette;
    let intensity = config.intensity;
    let loaded = use_loaded(ENTRANCE_DELAY_MS);

    view! {
        <div class="min-h-screen text-white overflow-hidden relative hero-root" data-variant=variant.as_str()>
            <AuroraBackground palette=palette intensity=intensity />
            <FloatingOrbs palette=palette intensity=intensity />
            <RippleField />
            <ParticleField config=config.particles.clone() />

            <HeroContent config=config on_enter=on_enter loaded=loaded />

            <AmbientGlow palette=palette />
        </div>
    }
}
