use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::in_view::InView;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="grid-backdrop light" aria-hidden="true"></div>
            <div class="glow glow-top-left" aria-hidden="true"></div>
            <div class="glow glow-bottom-right" aria-hidden="true"></div>
            <div class="container relative">
                <InView class="centered">
                    <h2>"Ready to Transform Your Marketing with AI?"</h2>
                    <p class="lede">
                        "Join thousands of marketers who have revolutionized their campaigns and boosted ROI with our AI-powered marketing suite."
                    </p>
                    <div class="button-row">
                        <a href="#pricing" class="btn btn-secondary btn-lg">
                            "Start Free Trial"
                            <Icon name="arrow-right" class="icon-sm" />
                        </a>
                        <a href="#demo" class="btn btn-outline-light btn-lg">"Schedule a Demo"</a>
                    </div>
                    <p class="small">"No credit card required. 14-day free trial. Cancel anytime."</p>
                </InView>
            </div>
        </section>
    }
}
