//! Floating particle field
//!
//! The server renders an empty container; the batch is generated once on the
//! client after mount and kept until the view goes away.

use leptos::prelude::*;

use crate::core::{ParticleConfig, ParticleDescriptor, RenderFault};

#[component]
pub fn ParticleField(
    config: ParticleConfig,
    /// Container class; the particle keyframes hang off `art-particle`
    #[prop(default = "art-particles")]
    class: &'static str,
) -> impl IntoView {
    let particles = RwSignal::new(Vec::<ParticleDescriptor>::new());
    let checked = config.validate().map_err(RenderFault::from);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::spawn_particles;
        use crate::ui::effects::{PARTICLE_SALT, effect_rng};

        if checked.is_ok() {
            Effect::new(move |_| {
                let mut rng = effect_rng(PARTICLE_SALT);
                match spawn_particles(&config, &mut rng) {
                    Ok(batch) => particles.set(batch),
                    Err(e) => leptos::logging::warn!("Particle batch rejected: {}", e),
                }
            });
        }
    }

    #[cfg(feature = "ssr")]
    let _ = config;

    checked.map(|()| {
        view! {
            <div class=class aria-hidden="true">
                <For
                    each=move || particles.get()
                    key=|particle| particle.id
                    children=move |particle: ParticleDescriptor| {
                        view! { <div class="art-particle" style=particle.style()></div> }
                    }
                />
            </div>
        }
    })
}
