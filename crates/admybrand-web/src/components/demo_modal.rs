use admybrand_core::{LandingConfig, PageState, VideoEmbed};
use leptos::ev;
use leptos::prelude::*;

use super::icons::Icon;

/// Full-screen player. Closed by the X button, a backdrop click or Escape.
#[component]
pub fn DemoModal() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let video = VideoEmbed::from_config(&expect_context::<LandingConfig>().demo);
    let close = move |_| state.update(|s| s.close_demo());

    let keydown = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            state.update(|s| s.close_demo());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div
                class="modal-dialog"
                role="dialog"
                aria-modal="true"
                on:click=|e| e.stop_propagation()
            >
                <button class="modal-close" aria-label="Close video" on:click=close>
                    <Icon name="x" />
                </button>
                <div class="video-frame">
                    <iframe
                        src=video.modal_url()
                        title="ADmyBRAND AI Suite Demo - Full Screen"
                        allow=video.permissions()
                        allowfullscreen=true
                        {..::leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
                    ></iframe>
                </div>
            </div>
        </div>
    }
}
