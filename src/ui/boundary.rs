//! Containment boundary around a page
//!
//! Wraps Leptos' `ErrorBoundary` with a one-way [`FaultLatch`]: once any
//! descendant returns an error the fallback stays up, even if the error
//! later clears. Only a reload brings the children back.
//!
//! When several descendants fail in the same render, which one the latch
//! records is unspecified: `Errors` is keyed by `ErrorId`, which carries no
//! order. Exactly one of them is reported.

use leptos::prelude::*;
use std::sync::Arc;

use crate::core::{ConsoleSink, DiagnosticSink, FaultLatch, RenderFault};
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::icons;

#[component]
pub fn ContainmentBoundary(
    /// Replaces the built-in apology view
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    /// Receives the first caught fault; defaults to the console
    #[prop(optional)]
    sink: Option<Arc<dyn DiagnosticSink>>,
    children: ChildrenFn,
) -> impl IntoView {
    let latch = RwSignal::new(FaultLatch::new());
    let faulted = Memo::new(move |_| latch.with(|l| l.is_faulted()));
    let sink: Arc<dyn DiagnosticSink> = sink.unwrap_or_else(|| Arc::new(ConsoleSink));

    let render_fallback = move || match &fallback {
        Some(view) => view.run(),
        None => view! { <DefaultFallback /> }.into_any(),
    };

    move || {
        if faulted.get() {
            return render_fallback();
        }

        let children = children.clone();
        let sink = sink.clone();
        let render_fallback = render_fallback.clone();

        view! {
            <ErrorBoundary fallback=move |errors| {
                let faults: Vec<RenderFault> = errors
                    .get_untracked()
                    .into_iter()
                    .map(|(_, error)| RenderFault::from_dyn(&*error.into_inner()))
                    .collect();
                for fault in faults {
                    latch.update(|l| {
                        l.record(fault, sink.as_ref());
                    });
                }
                render_fallback()
            }>
                {children()}
            </ErrorBoundary>
        }
        .into_any()
    }
}

/// Built-in apology with a reload action
#[component]
pub fn DefaultFallback() -> impl IntoView {
    let reload = Callback::new(|()| reload_page());

    view! {
        <div class="min-h-screen fallback-root text-white flex items-center justify-center" role="alert">
            <div class="text-center space-y-4">
                <h1 class="text-4xl font-bold text-gradient">"Something went wrong"</h1>
                <p class="text-gray-300 max-w-md">
                    "We're experiencing technical difficulties. Please refresh the page to try again."
                </p>
                <Button variant=ButtonVariant::Primary on_click=reload icon=icons::REFRESH>
                    "Refresh Page"
                </Button>
            </div>
        </div>
    }
}

/// Full page reload; the only way out of a faulted boundary
fn reload_page() {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = leptos::web_sys::window() {
            if let Err(e) = window.location().reload() {
                leptos::logging::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}
