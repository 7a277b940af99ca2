use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found centered">
            <h2>"Page not found"</h2>
            <a href="/" class="btn btn-primary">"Back to home"</a>
        </div>
    }
}
