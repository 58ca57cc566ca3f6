use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, the file stem under `public/icons`
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

pub mod icons {
    pub const HEART: &str = "heart";
    pub const LEAF: &str = "leaf";
    pub const MOON: &str = "moon";
    pub const REFRESH: &str = "refresh";
    pub const COMPASS: &str = "compass";
}
