//! Core models of the landing page: palettes, generated effects, hover and
//! fault state. Nothing in here touches the DOM.

#[cfg(feature = "ssr")]
pub mod config;
mod fault;
mod hover;
mod motion;
mod palette;
mod particles;
mod ripples;
#[cfg(test)]
mod tests;
mod variant;

pub use fault::*;
pub use hover::*;
pub use motion::*;
pub use palette::*;
pub use particles::*;
pub use ripples::*;
pub use variant::*;
