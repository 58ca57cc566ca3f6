//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{BRAND_NAME, SERENE};
use crate::ui::backdrop::{AmbientGlow, AuroraBackground};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen text-white relative overflow-hidden flex flex-col items-center justify-center p-4">
            <AuroraBackground palette=SERENE />

            <div class="text-center relative z-10">
                <div class="w-24 h-24 mx-auto mb-6 rounded-full flex items-center justify-center bg-white/5">
                    <Icon name=icons::COMPASS class="w-12 h-12 opacity-70" />
                </div>

                <h1 class="text-6xl font-bold mb-4" style=SERENE.heading_style()>"404"</h1>

                <h2 class="text-2xl font-light mb-2">"This path leads nowhere"</h2>

                <p class="text-white/70 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-base btn-ghost">
                    "Back to the lake"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-white/50">{format!("© 2025 {}", BRAND_NAME)}</p>
            </div>

            <AmbientGlow palette=SERENE />
        </div>
    }
}
