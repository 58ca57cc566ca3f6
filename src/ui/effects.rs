//! Mount-time helpers shared by the animated views
//!
//! - the one-shot `loaded` flag driving entrance motion
//! - the seed every generated effect is derived from

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// `<meta>` tag the server uses to hand a fixed seed to the client
pub const SEED_META_NAME: &str = "kaydio-particle-seed";

/// Per-effect salts so two fields on one page never mirror each other
pub const PARTICLE_SALT: u64 = 0x9E37_79B9_7F4A_7C15;
pub const RIPPLE_SALT: u64 = 0xD1B5_4A32_D192_ED03;

/// Flag that flips to `true` once, `delay_ms` after mount
pub fn use_loaded(delay_ms: u32) -> ReadSignal<bool> {
    let (loaded, set_loaded) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                // The view may be gone by now
                let _ = set_loaded.try_set(true);
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (delay_ms, set_loaded);
    }

    loaded
}

/// Generator for one effect: the server-provided seed when present,
/// otherwise a fresh one, mixed with `salt`
#[cfg(not(feature = "ssr"))]
pub fn effect_rng(salt: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;

    let seed = read_seed_meta().unwrap_or_else(random_seed);
    rand::rngs::SmallRng::seed_from_u64(seed ^ salt)
}

#[cfg(not(feature = "ssr"))]
fn read_seed_meta() -> Option<u64> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", SEED_META_NAME);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")?.trim().parse().ok()
}

#[cfg(not(feature = "ssr"))]
fn random_seed() -> u64 {
    // Two draws: one f64 only carries 53 random bits
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
