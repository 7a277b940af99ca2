use admybrand_core::content::{Feature, FEATURES};
use admybrand_core::Reveal;
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::in_view::InView;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <SectionHeading
                    badge="Features"
                    title="Everything You Need to Succeed"
                    lede="Our comprehensive platform provides all the tools you need to streamline your workflow, boost productivity, and achieve your goals."
                />
                <div class="card-grid three">
                    {FEATURES.iter().enumerate().map(|(i, feature)| view! {
                        <InView reveal=Reveal::fade_up().staggered(i, 100)>
                            <FeatureCard feature=*feature />
                        </InView>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class="icon-bubble">
                <Icon name=feature.icon />
            </div>
            <h3>{feature.title}</h3>
            <p class="muted">{feature.description}</p>
        </div>
    }
}
