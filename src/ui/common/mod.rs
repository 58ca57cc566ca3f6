//! Common reusable UI components

pub mod button;

pub use button::{Button, ButtonSize, ButtonVariant, click_handler};
