//! Particle descriptors for the floating particle fields
//!
//! A batch is generated once per mount from an explicitly passed generator,
//! so a fixed seed always produces the same field.

use rand::Rng;

use super::palette::{Palette, Rgba};

/// Particle count on the hero pages
pub const HERO_PARTICLE_COUNT: usize = 40;

/// Particle count on the welcome screen
pub const WELCOME_PARTICLE_COUNT: usize = 25;

/// Latest start delay of a particle's rise animation
pub const MAX_DELAY_S: f32 = 15.0;

/// Randomized visual parameters of one particle
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleDescriptor {
    pub id: usize,
    /// Horizontal position in percent of the viewport width
    pub x: f32,
    pub delay_s: f32,
    pub size_px: f32,
    pub color: Rgba,
    pub duration_s: f32,
}

impl ParticleDescriptor {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; \
             animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.x, self.size_px, self.size_px, self.color, self.delay_s, self.duration_s
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParticleError {
    #[error("particle count must be at least 1")]
    EmptyBatch,

    #[error("{field} range is inverted ({min} > {max})")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("particle palette has no colors")]
    NoColors,
}

/// Parameters of a particle batch
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub max_delay_s: f32,
    pub size_px: (f32, f32),
    pub duration_s: (f32, f32),
    pub colors: Vec<Rgba>,
}

impl ParticleConfig {
    /// Configuration derived from a palette; `intensity` shortens the rise
    pub fn from_palette(count: usize, palette: &Palette, intensity: f32) -> Self {
        let speed = intensity.max(0.1);
        Self {
            count,
            max_delay_s: MAX_DELAY_S,
            size_px: (2.0, 6.0),
            duration_s: (15.0 / speed, 25.0 / speed),
            colors: palette.accents.iter().map(|c| c.with_alpha(0.6)).collect(),
        }
    }

    pub fn hero(palette: &Palette, intensity: f32) -> Self {
        Self::from_palette(HERO_PARTICLE_COUNT, palette, intensity)
    }

    pub fn welcome(palette: &Palette) -> Self {
        Self::from_palette(WELCOME_PARTICLE_COUNT, palette, 1.0)
    }

    pub fn validate(&self) -> Result<(), ParticleError> {
        if self.count == 0 {
            return Err(ParticleError::EmptyBatch);
        }
        if self.colors.is_empty() {
            return Err(ParticleError::NoColors);
        }
        for (field, (min, max)) in [
            ("max_delay_s", (0.0, self.max_delay_s)),
            ("size_px", self.size_px),
            ("duration_s", self.duration_s),
        ] {
            if min > max {
                return Err(ParticleError::InvertedRange { field, min, max });
            }
        }
        Ok(())
    }
}

/// Generate a full batch of `config.count` particles
pub fn spawn_particles<R: Rng + ?Sized>(
    config: &ParticleConfig,
    rng: &mut R,
) -> Result<Vec<ParticleDescriptor>, ParticleError> {
    config.validate()?;

    let particles = (0..config.count)
        .map(|id| ParticleDescriptor {
            id,
            x: rng.gen_range(0.0..=100.0),
            delay_s: rng.gen_range(0.0..=config.max_delay_s),
            size_px: rng.gen_range(config.size_px.0..=config.size_px.1),
            color: config.colors[rng.gen_range(0..config.colors.len())],
            duration_s: rng.gen_range(config.duration_s.0..=config.duration_s.1),
        })
        .collect();

    Ok(particles)
}
