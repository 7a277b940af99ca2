use admybrand_core::content::{Testimonial, TESTIMONIALS};
use admybrand_core::Reveal;
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::in_view::InView;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section">
            <div class="container">
                <SectionHeading
                    badge="Testimonials"
                    title="Loved by Teams Worldwide"
                    lede="Don't just take our word for it. See what our customers have to say about their experience."
                />
                <div class="card-grid three">
                    {TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| view! {
                        <InView reveal=Reveal::fade_up().staggered(i, 50)>
                            <TestimonialCard testimonial=*testimonial />
                        </InView>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="card testimonial-card">
            <div class="stars">
                {(0..testimonial.rating).map(|_| view! {
                    <Icon name="star" class="icon-sm star" filled=true />
                }).collect_view()}
            </div>
            <p class="quote">{testimonial.quote}</p>
            <div class="author">
                <div class="avatar">{testimonial.initial()}</div>
                <div>
                    <p class="author-name">{testimonial.author}</p>
                    <p class="muted small">{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}
