use admybrand_core::content::{HERO_CHECKS, HERO_IMAGE_URL};
use admybrand_core::{LandingConfig, Reveal};
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::in_view::InView;

#[component]
pub fn Hero() -> impl IntoView {
    let product = expect_context::<LandingConfig>().brand.product;

    view! {
        <section class="hero">
            <div class="container relative">
                <div class="grid-backdrop" aria-hidden="true"></div>

                <InView class="hero-copy">
                    <span class="badge">"Launching Soon"</span>
                    <h1 class="hero-title">{format!("Revolutionize Your Marketing with {}", product)}</h1>
                    <p class="hero-lede">
                        "The AI-powered marketing platform that creates compelling campaigns, optimizes performance, and scales your brand across all channels. Transform your marketing strategy with intelligent automation."
                    </p>
                    <div class="button-row">
                        <a href="#pricing" class="btn btn-primary btn-lg">
                            "Start Free Trial"
                            <Icon name="arrow-right" class="icon-sm" />
                        </a>
                        <a href="#demo" class="btn btn-outline btn-lg">"Book a Demo"</a>
                    </div>
                    <div class="hero-checks">
                        {HERO_CHECKS.iter().map(|text| view! {
                            <span class="check-item">
                                <Icon name="check" class="icon-sm text-primary" />
                                {*text}
                            </span>
                        }).collect_view()}
                    </div>
                </InView>

                <InView class="hero-shot" reveal=Reveal::fade_up().with_offset_y(40).with_duration(700).with_delay(200)>
                    <div class="shot-frame">
                        <img src=HERO_IMAGE_URL width="1280" height="720" alt="my dashboard" />
                    </div>
                    <div class="glow glow-bottom-right" aria-hidden="true"></div>
                    <div class="glow glow-top-left" aria-hidden="true"></div>
                </InView>
            </div>
        </section>
    }
}
