use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::{BRAND_NAME, HeroVariant};
use crate::ui::effects::SEED_META_NAME;
use crate::ui::pages::{HeroPage, NotFoundPage, WelcomePage};

/// Fixed seed for generated effects, provided as context by the server
#[derive(Clone, Copy, Debug, Default)]
pub struct ParticleSeed(pub Option<u64>);

/// Document shell rendered by the server.
///
/// A configured [`ParticleSeed`] is handed to the client through a `<meta>`
/// tag so that generated effects are reproducible.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let particle_seed = use_context::<ParticleSeed>().and_then(|seed| seed.0);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {particle_seed.map(|seed| view! { <meta name=SEED_META_NAME content=seed.to_string()/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="kaydio-body">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/kaydio.css"/>

        // fallback title, pages override it
        <Title text=BRAND_NAME/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(HeroVariant::Serene.segment()) view=|| view! { <HeroPage variant=HeroVariant::Serene/> }/>
                    <Route path=StaticSegment(HeroVariant::Radiant.segment()) view=|| view! { <HeroPage variant=HeroVariant::Radiant/> }/>
                    <Route path=StaticSegment(HeroVariant::Showcase.segment()) view=|| view! { <HeroPage variant=HeroVariant::Showcase/> }/>
                    <Route path=StaticSegment("welcome") view=WelcomePage/>
                </Routes>
            </main>
        </Router>
    }
}
