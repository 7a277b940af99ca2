use leptos::prelude::*;

use super::in_view::InView;

/// Badge, title and lede shared by every content section.
#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    lede: &'static str,
) -> impl IntoView {
    view! {
        <InView class="section-heading">
            <span class="badge">{badge}</span>
            <h2>{title}</h2>
            <p class="lede">{lede}</p>
        </InView>
    }
}
