use admybrand_core::{LandingConfig, PageState, Reveal, VideoEmbed};
use leptos::prelude::*;

use crate::components::demo_modal::DemoModal;
use crate::components::icons::Icon;
use crate::components::in_view::InView;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn Demo() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let video = VideoEmbed::from_config(&expect_context::<LandingConfig>().demo);
    let demo_open = Memo::new(move |_| state.with(|s| s.demo_open));

    view! {
        <section id="demo" class="section band relative">
            <div class="grid-backdrop" aria-hidden="true"></div>
            <div class="container relative">
                <SectionHeading
                    badge="See It In Action"
                    title="Watch ADmyBRAND AI in Action"
                    lede="See how our AI transforms your marketing workflow in just minutes. From content creation to campaign optimization."
                />

                <InView class="demo-player" reveal=Reveal::zoom().with_delay(200)>
                    <div class="video-frame">
                        <iframe
                            src=video.inline_url()
                            title="ADmyBRAND AI Suite Demo - AI Content Generation"
                            allow=video.permissions()
                            allowfullscreen=true
                            {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                            {..::leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
                        ></iframe>
                    </div>
                </InView>

                <InView class="centered" reveal=Reveal::fade().with_delay(400)>
                    <button
                        class="btn btn-outline btn-lg"
                        on:click=move |_| state.update(|s| s.open_demo())
                    >
                        <Icon name="play" class="icon-sm" filled=true />
                        "Watch in Full Screen"
                    </button>
                </InView>

                <Show when=move || demo_open.get()>
                    <DemoModal />
                </Show>
            </div>
        </section>
    }
}
