#[cfg(test)]
mod tests {
    use crate::core::{
        ConsoleSink, CtaStyle, DiagnosticSink, FaultLatch, HERO_PARTICLE_COUNT, HeroVariant,
        HoverState, OIL, ParticleConfig, ParticleError, RenderFault, RippleSchedule, RippleTiming,
        WELCOME_PARTICLE_COUNT, spawn_particles,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::cell::Cell;
    use std::sync::Mutex;

    /// Counts calls made through a wrapped generator
    struct SpyRng {
        inner: SmallRng,
        calls: Cell<usize>,
    }

    impl SpyRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: SmallRng::seed_from_u64(seed),
                calls: Cell::new(0),
            }
        }
    }

    impl rand::RngCore for SpyRng {
        fn next_u32(&mut self) -> u32 {
            self.calls.set(self.calls.get() + 1);
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.calls.set(self.calls.get() + 1);
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.calls.set(self.calls.get() + 1);
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.calls.set(self.calls.get() + 1);
            self.inner.try_fill_bytes(dest)
        }
    }

    #[derive(Default)]
    struct CountingSink {
        count: Mutex<usize>,
    }

    impl DiagnosticSink for CountingSink {
        fn report(&self, _fault: &RenderFault) {
            *self.count.lock().unwrap() += 1;
        }
    }

    // ========================================================================
    // Particle fields
    // ========================================================================

    #[test]
    fn test_every_page_spawns_its_fixed_count_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(2024);

        for variant in HeroVariant::ALL {
            let particles = spawn_particles(&variant.config().particles, &mut rng).unwrap();
            assert_eq!(particles.len(), HERO_PARTICLE_COUNT, "{}", variant);
            assert!(particles.iter().all(|p| (0.0..=100.0).contains(&p.x)));
        }

        let welcome = spawn_particles(&ParticleConfig::welcome(&OIL), &mut rng).unwrap();
        assert_eq!(welcome.len(), WELCOME_PARTICLE_COUNT);
        assert!(welcome.iter().all(|p| (0.0..=100.0).contains(&p.x)));
    }

    #[test]
    fn test_invalid_particle_config_becomes_render_fault() {
        let mut config = ParticleConfig::welcome(&OIL);
        config.count = 0;

        let fault: RenderFault = spawn_particles(&config, &mut SmallRng::seed_from_u64(0))
            .unwrap_err()
            .into();
        assert_eq!(fault, RenderFault::Particles(ParticleError::EmptyBatch));
    }

    // ========================================================================
    // Ripple lifecycle against a mock clock
    // ========================================================================

    #[test]
    fn test_no_spawn_after_cancel() {
        let mut rng = SpyRng::new(9);
        let mut schedule = RippleSchedule::new(RippleTiming::default()).unwrap();

        schedule.advance(4000, &mut rng);
        assert_eq!(schedule.spawned_total(), 1);

        // Unmount
        schedule.cancel();
        let calls_at_unmount = rng.calls.get();

        for now in (4000..=60_000).step_by(500) {
            let delta = schedule.advance(now, &mut rng);
            assert!(delta.spawned.is_empty(), "spawned after cancel at {}", now);
        }

        assert_eq!(schedule.spawned_total(), 1);
        assert_eq!(schedule.live_count(), 0);
        assert_eq!(rng.calls.get(), calls_at_unmount);
        assert_eq!(schedule.next_deadline(), None);
    }

    #[test]
    fn test_each_ripple_removed_exactly_at_lifetime() {
        let mut rng = SmallRng::seed_from_u64(3);
        let timing = RippleTiming::default();
        let mut schedule = RippleSchedule::new(timing).unwrap();

        // Tick the mock clock in 100ms steps and remember when each id came and went
        let mut created = std::collections::HashMap::new();
        let mut removed = std::collections::HashMap::new();
        for now in (0..=40_000u64).step_by(100) {
            let delta = schedule.advance(now, &mut rng);
            for id in delta.spawned {
                created.insert(id, now);
            }
            for id in delta.expired {
                removed.insert(id, now);
            }
        }

        assert_eq!(created.len(), 10);
        for (id, born) in &created {
            let Some(gone) = removed.get(id) else {
                // The last ripple is still live at the end of the run
                assert_eq!(*born, 40_000);
                continue;
            };
            assert_eq!(gone - born, timing.lifetime_ms, "ripple {}", id);
        }
    }

    #[test]
    fn test_ripple_still_live_just_before_lifetime() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut schedule = RippleSchedule::new(RippleTiming::default()).unwrap();

        schedule.advance(4000, &mut rng);
        schedule.advance(6999, &mut rng);
        assert_eq!(schedule.live_count(), 1);

        schedule.advance(7000, &mut rng);
        assert_eq!(schedule.live_count(), 0);
    }

    #[test]
    fn test_same_seed_same_ripples() {
        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut schedule = RippleSchedule::new(RippleTiming::default()).unwrap();
            schedule.advance(4000, &mut rng);
            schedule.live().cloned().collect::<Vec<_>>()
        };

        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }

    // ========================================================================
    // Call-to-action
    // ========================================================================

    #[test]
    fn test_hover_round_trip_for_every_variant() {
        for variant in HeroVariant::ALL {
            let palette = variant.config().palette;
            let mut state = HoverState::default();
            let before = CtaStyle::for_state(&palette, state);

            state = state.on_pointer_enter();
            assert_ne!(CtaStyle::for_state(&palette, state), before);

            state = state.on_pointer_leave();
            assert_eq!(CtaStyle::for_state(&palette, state), before);
        }
    }

    // ========================================================================
    // Containment
    // ========================================================================

    #[test]
    fn test_fault_reported_once_and_never_heals() {
        let sink = CountingSink::default();
        let mut latch = FaultLatch::new();

        for attempt in 0..5 {
            latch.record(RenderFault::View(format!("attempt {}", attempt)), &sink);
            assert!(latch.is_faulted());
        }

        assert_eq!(*sink.count.lock().unwrap(), 1);
        assert_eq!(latch.fault(), Some(&RenderFault::View("attempt 0".into())));
    }

    #[test]
    fn test_console_sink_accepts_faults() {
        let mut latch = FaultLatch::new();
        assert!(latch.record(RenderFault::View("logged".into()), &ConsoleSink));
    }
}
