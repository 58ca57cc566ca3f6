pub mod backdrop;
pub mod boundary;
pub mod common;
pub mod effects;
pub mod hero;
pub mod icon;
pub mod pages;
pub mod particles;
pub mod ripples;
pub mod welcome;

pub use boundary::{ContainmentBoundary, DefaultFallback};
pub use hero::{CtaButton, HeroContent};
pub use icon::{Icon, icons};
pub use particles::ParticleField;
pub use ripples::RippleField;
pub use welcome::WelcomeScreen;
