use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{BRAND_NAME, TAGLINE};
use crate::ui::boundary::ContainmentBoundary;
use crate::ui::welcome::WelcomeScreen;

/// Welcome splash page
#[component]
pub fn WelcomePage() -> impl IntoView {
    let on_enter = Callback::new(|()| {
        leptos::logging::log!("Enter the Realm selected on the welcome screen");
    });

    view! {
        <Title text=format!("Welcome to {} | {}", BRAND_NAME, TAGLINE) />

        <ContainmentBoundary>
            <WelcomeScreen on_enter=on_enter />
        </ContainmentBoundary>
    }
}
