//! Hero content block: brand heading, tagline, call-to-action and the
//! wellness indicators underneath

use leptos::prelude::*;

use crate::core::{CtaStyle, HeroConfig, HoverState, Motion, Palette, BRAND_NAME, CTA_LABEL, TAGLINE};
use crate::ui::common::click_handler;
use crate::ui::icon::{Icon, icons};

const CONTENT_ENTRANCE: Motion = Motion::fade_up(30.0, 1.2, 0.0);

/// Call-to-action whose inline style is derived from its hover state
#[component]
pub fn CtaButton(
    palette: Palette,
    /// Invoked once per click, with no arguments
    on_click: Callback<()>,
    #[prop(default = CTA_LABEL)]
    label: &'static str,
) -> impl IntoView {
    let hover = RwSignal::new(HoverState::default());
    let style = move || CtaStyle::for_state(&palette, hover.get()).to_inline();

    let [a, _, c, _] = palette.accents;
    let glow = format!(
        "background: linear-gradient(135deg, {} 0%, {} 100%); filter: blur(2px);",
        a.with_alpha(0.03),
        c.with_alpha(0.03)
    );

    view! {
        <button
            class="group relative px-10 py-4 text-lg font-medium text-white transition-all duration-700 hover:scale-105"
            style=style
            data-hover=move || if hover.get().is_hovered() { "true" } else { "false" }
            on:mouseenter=move |_| hover.update(|state| *state = state.on_pointer_enter())
            on:mouseleave=move |_| hover.update(|state| *state = state.on_pointer_leave())
            on:click=click_handler(on_click)
        >
            <span class="relative z-10 tracking-wide font-medium">{label}</span>
            <div
                class="absolute inset-0 rounded-xl opacity-0 group-hover:opacity-100 transition-opacity duration-700"
                style=glow
            ></div>
        </button>
    }
}

/// Breathe / Focus / Flow dots
#[component]
fn WellnessIndicators(palette: Palette) -> impl IntoView {
    let labels = ["Breathe", "Focus", "Flow"];

    view! {
        <div class="mt-20 flex justify-center space-x-8 opacity-60">
            {labels
                .into_iter()
                .zip(palette.accents)
                .map(|(label, color)| {
                    let dot = format!("background: {};", color.with_alpha(0.6));
                    view! {
                        <div class="text-center">
                            <div class="w-2 h-2 rounded-full mx-auto mb-2" style=dot></div>
                            <p class="text-xs font-light tracking-wider">{label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: icons::HEART,
        title: "Mindful Rituals",
        description: "Gentle daily practices that meet you where you are.",
    },
    Feature {
        icon: icons::LEAF,
        title: "Grounded Calm",
        description: "Soundscapes and breathwork drawn from the natural world.",
    },
    Feature {
        icon: icons::MOON,
        title: "Restful Nights",
        description: "Wind-down journeys that ease you into deeper sleep.",
    },
];

#[component]
fn FeatureGrid(palette: Palette) -> impl IntoView {
    view! {
        <div class="mt-16 grid gap-6 md:grid-cols-3 text-left">
            {FEATURES
                .iter()
                .zip(palette.accents)
                .map(|(feature, color)| {
                    let border = format!("border-color: {};", color.with_alpha(0.25));
                    view! {
                        <div class="feature-card rounded-2xl border p-6 backdrop-blur" style=border>
                            <Icon name=feature.icon class="w-8 h-8 mb-4 opacity-80" />
                            <h3 class="text-lg font-medium mb-2">{feature.title}</h3>
                            <p class="text-sm text-white/70 leading-relaxed">{feature.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Centered content stack of the hero page
#[component]
pub fn HeroContent(
    config: HeroConfig,
    on_enter: Callback<()>,
    /// Entrance flag; content rests in its start pose until it flips
    loaded: ReadSignal<bool>,
) -> impl IntoView {
    let palette = config.palette;
    let divider = format!("background: {};", palette.divider_gradient());

    view! {
        <div class="relative z-10 min-h-screen flex flex-col items-center justify-center px-6">
            <div
                class="text-center max-w-5xl mx-auto"
                style=move || CONTENT_ENTRANCE.style(loaded.get())
            >
                <div class="mb-12">
                    <h1
                        class="text-7xl md:text-8xl lg:text-9xl font-bold tracking-tight leading-none"
                        style=palette.heading_style()
                    >
                        {BRAND_NAME}
                    </h1>
                </div>

                <div class="mb-16">
                    <p
                        class="text-xl md:text-2xl lg:text-3xl font-light leading-relaxed tracking-wide"
                        style="color: rgba(255, 255, 255, 0.85); text-shadow: 0 2px 10px rgba(0, 0, 0, 0.3);"
                    >
                        {TAGLINE}
                    </p>
                    <div class="mt-4 w-24 h-0.5 mx-auto" style=divider></div>
                </div>

                <div class="flex justify-center">
                    <CtaButton palette=palette on_click=on_enter />
                </div>

                {config.show_cards.then(|| view! { <FeatureGrid palette=palette /> })}

                <WellnessIndicators palette=palette />
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::{HeroVariant, SERENE};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_cta_renders_idle_style() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! { <CtaButton palette=SERENE on_click=Callback::new(|()| {}) /> }.to_html()
        });

        assert!(html.contains(CTA_LABEL));
        assert!(html.contains("rgba(255, 182, 193, 0.2)"));
        assert!(!html.contains("rgba(255, 182, 193, 0.4)"));
    }

    #[test]
    fn test_cta_click_runs_on_enter_once_each() {
        let owner = Owner::new();
        owner.with(|| {
            let entered = Arc::new(AtomicUsize::new(0));
            let on_enter = Callback::new({
                let entered = entered.clone();
                move |()| {
                    entered.fetch_add(1, Ordering::SeqCst);
                }
            });

            let html = view! { <CtaButton palette=SERENE on_click=on_enter /> }.to_html();
            assert!(html.contains(CTA_LABEL));
            assert_eq!(entered.load(Ordering::SeqCst), 0, "rendering must not click");

            let click = click_handler::<()>(on_enter);
            click(());
            assert_eq!(entered.load(Ordering::SeqCst), 1);
            click(());
            click(());
            assert_eq!(entered.load(Ordering::SeqCst), 3);
        });
    }

    #[test]
    fn test_feature_grid_only_on_showcase() {
        let render = |variant: HeroVariant| {
            let owner = Owner::new();
            owner.with(|| {
                let (loaded, _) = signal(false);
                view! {
                    <HeroContent
                        config=variant.config()
                        on_enter=Callback::new(|()| {})
                        loaded=loaded
                    />
                }
                .to_html()
            })
        };

        let showcase = render(HeroVariant::Showcase);
        assert!(showcase.contains("Mindful Rituals"));
        assert!(showcase.contains(BRAND_NAME));

        let serene = render(HeroVariant::Serene);
        assert!(!serene.contains("Mindful Rituals"));
        assert!(serene.contains("Breathe"));
    }
}
