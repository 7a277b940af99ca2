use admybrand_core::content::LOGO_COUNT;
use leptos::prelude::*;

#[component]
pub fn Logos() -> impl IntoView {
    view! {
        <section class="logos band">
            <div class="container logos-inner">
                <p class="muted small">"Trusted by innovative companies worldwide"</p>
                <div class="logo-row">
                    {(1..=LOGO_COUNT).map(|i| view! {
                        <img
                            src="/placeholder-logo.svg"
                            alt=format!("Company logo {}", i)
                            width="120"
                            height="60"
                            class="partner-logo"
                        />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
