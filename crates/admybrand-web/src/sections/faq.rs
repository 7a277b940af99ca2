use admybrand_core::content::FAQS;
use admybrand_core::{Accordion, Reveal};
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::in_view::InView;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new());
    let item_reveal = Reveal::fade().with_offset_y(10).with_duration(300);

    view! {
        <section id="faq" class="section">
            <div class="container narrow">
                <SectionHeading
                    badge="FAQ"
                    title="Frequently Asked Questions"
                    lede="Find answers to common questions about our platform."
                />
                <div class="accordion">
                    {FAQS.iter().enumerate().map(|(i, faq)| {
                        let open = move || accordion.with(|a| a.is_open(i));
                        view! {
                            <InView reveal=item_reveal.staggered(i, 50)>
                                <div class="accordion-item">
                                    <button
                                        class="accordion-trigger"
                                        aria-expanded=move || open().to_string()
                                        on:click=move |_| accordion.update(|a| a.toggle(i))
                                    >
                                        <span>{faq.question}</span>
                                        <span class=move || if open() { "chevron open" } else { "chevron" }>
                                            <Icon name="chevron-right" class="icon-sm" />
                                        </span>
                                    </button>
                                    <Show when=open>
                                        <div class="accordion-content">{faq.answer}</div>
                                    </Show>
                                </div>
                            </InView>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
