use admybrand_core::Reveal;
use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::browser;

/// Wraps children in a block that plays `reveal` once it first scrolls into view.
#[component]
pub fn InView(
    #[prop(optional)] reveal: Option<Reveal>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let reveal = reveal.unwrap_or_default();
    let node_ref = NodeRef::<html::Div>::new();
    let (shown, set_shown) = signal(false);
    // Owned by this component; dropped with it.
    let observer = StoredValue::new_local(None::<browser::VisibilityObserver>);

    Effect::new(move || {
        let Some(el) = node_ref.get() else { return };
        match browser::observe_once(&el, move || set_shown.set(true)) {
            Ok(handle) => observer.set_value(Some(handle)),
            Err(e) => {
                warn!("Reveal observer unavailable: {}", e);
                set_shown.set(true);
            }
        }
    });

    view! {
        <div node_ref=node_ref class=class style=move || reveal.style(shown.get())>
            {children()}
        </div>
    }
}
