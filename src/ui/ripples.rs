//! Water ripples appearing at random spots every few seconds
//!
//! A [`RippleSchedule`] decides what is live. In the browser a single timeout
//! is armed for the schedule's next deadline and re-armed after each firing;
//! unmounting clears the pending timeout and cancels the schedule.

use leptos::prelude::*;

use crate::core::{RenderFault, Ripple, RippleSchedule, RippleTiming};

#[component]
pub fn RippleField(#[prop(default = RippleTiming::default())] timing: RippleTiming) -> impl IntoView {
    let ripples = RwSignal::new(Vec::<Ripple>::new());
    let schedule = RippleSchedule::new(timing).map_err(RenderFault::from);

    #[cfg(not(feature = "ssr"))]
    {
        if let Ok(schedule) = &schedule {
            driver::start(schedule.clone(), ripples);
        }
    }

    schedule.map(|_| {
        view! {
            <div class="fixed inset-0 pointer-events-none" style="z-index: 2;" aria-hidden="true">
                <For
                    each=move || ripples.get()
                    key=|ripple| ripple.id
                    children=move |ripple: Ripple| {
                        view! {
                            <div
                                class="absolute rounded-full border border-white/5 ripple-effect"
                                style=ripple.style()
                            ></div>
                        }
                    }
                />
            </div>
        }
    })
}

#[cfg(not(feature = "ssr"))]
mod driver {
    use leptos::prelude::*;
    use rand::rngs::SmallRng;
    use std::time::Duration;

    use crate::core::{Ripple, RippleSchedule};
    use crate::ui::effects::{RIPPLE_SALT, effect_rng};

    #[derive(Clone, Copy)]
    struct Driver {
        origin_ms: f64,
        schedule: StoredValue<RippleSchedule>,
        rng: StoredValue<SmallRng>,
        timer: StoredValue<Option<TimeoutHandle>>,
        ripples: RwSignal<Vec<Ripple>>,
    }

    pub(super) fn start(schedule: RippleSchedule, ripples: RwSignal<Vec<Ripple>>) {
        let driver = Driver {
            origin_ms: js_sys::Date::now(),
            schedule: StoredValue::new(schedule),
            rng: StoredValue::new(effect_rng(RIPPLE_SALT)),
            timer: StoredValue::new(None),
            ripples,
        };

        Effect::new(move |_| driver.arm());

        on_cleanup(move || {
            if let Some(Some(handle)) = driver.timer.try_get_value() {
                handle.clear();
            }
            driver.schedule.try_update_value(|s| s.cancel());
        });
    }

    impl Driver {
        fn elapsed_ms(&self) -> u64 {
            (js_sys::Date::now() - self.origin_ms).max(0.0) as u64
        }

        fn arm(self) {
            let Some(deadline) = self.schedule.try_with_value(|s| s.next_deadline()).flatten() else {
                return;
            };
            let wait = deadline.saturating_sub(self.elapsed_ms());

            match set_timeout_with_handle(move || self.fire(), Duration::from_millis(wait)) {
                Ok(handle) => {
                    self.timer.try_set_value(Some(handle));
                }
                Err(e) => leptos::logging::warn!("Failed to arm ripple timer: {:?}", e),
            }
        }

        fn fire(self) {
            let now = self.elapsed_ms();

            // Disposed storage means the view is gone: stop without re-arming
            let Some(delta) = self
                .rng
                .try_update_value(|rng| self.schedule.try_update_value(|s| s.advance(now, rng)))
                .flatten()
            else {
                return;
            };

            if !delta.is_empty() {
                let Some(live) = self
                    .schedule
                    .try_with_value(|s| s.live().cloned().collect::<Vec<_>>())
                else {
                    return;
                };
                self.ripples.try_set(live);
            }

            self.arm();
        }
    }
}
