//! Application pages module
//!
//! - Hero page, one per [`HeroVariant`](crate::core::HeroVariant)
//! - Welcome splash
//! - Not found page

mod hero;
mod not_found;
mod welcome;

pub use hero::HeroPage;
pub use not_found::NotFoundPage;
pub use welcome::WelcomePage;
