use admybrand_core::content::STEPS;
use admybrand_core::Reveal;
use leptos::prelude::*;

use crate::components::in_view::InView;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section band relative">
            <div class="grid-backdrop" aria-hidden="true"></div>
            <div class="container relative">
                <SectionHeading
                    badge="How It Works"
                    title="Simple Process, Powerful Results"
                    lede="Get started in minutes and see the difference our platform can make for your business."
                />
                <div class="steps">
                    <div class="steps-line" aria-hidden="true"></div>
                    {STEPS.iter().enumerate().map(|(i, step)| view! {
                        <InView class="step" reveal=Reveal::fade_up().staggered(i, 100)>
                            <div class="step-number">{step.step}</div>
                            <h3>{step.title}</h3>
                            <p class="muted">{step.description}</p>
                        </InView>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
