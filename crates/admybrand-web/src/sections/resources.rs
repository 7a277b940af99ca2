use admybrand_core::content::{BLOG_POSTS, CASE_STUDIES, GUIDES};
use admybrand_core::{ResourceTab, Reveal};
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::in_view::InView;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn Resources() -> impl IntoView {
    let active = RwSignal::new(ResourceTab::default());

    view! {
        <section id="resources" class="section band relative">
            <div class="grid-backdrop" aria-hidden="true"></div>
            <div class="container relative">
                <SectionHeading
                    badge="Resources"
                    title="Learn & Grow with ADmyBRAND"
                    lede="Discover best practices, case studies, and expert insights to maximize your AI marketing success."
                />

                <div class="tab-list" role="tablist">
                    {ResourceTab::all().iter().map(|&tab| view! {
                        <button
                            role="tab"
                            data-value=tab.value()
                            class=move || if active.get() == tab { "tab active" } else { "tab" }
                            aria-selected=move || (active.get() == tab).to_string()
                            on:click=move |_| active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }).collect_view()}
                </div>

                {move || match active.get() {
                    ResourceTab::Blog => view! { <BlogPanel /> }.into_any(),
                    ResourceTab::Guides => view! { <GuidesPanel /> }.into_any(),
                    ResourceTab::CaseStudies => view! { <CaseStudiesPanel /> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn BlogPanel() -> impl IntoView {
    view! {
        <div class="card-grid three" role="tabpanel">
            {BLOG_POSTS.iter().enumerate().map(|(i, post)| view! {
                <InView reveal=Reveal::fade_up().staggered(i, 100)>
                    <div class="card post-card">
                        <div class="post-cover">
                            <span class="badge badge-solid">{post.category}</span>
                        </div>
                        <div class="card-body">
                            <h3>{post.title}</h3>
                            <p class="muted">{post.excerpt}</p>
                            <div class="meta-row">
                                <span>{post.date}</span>
                                <span>{post.read_time}</span>
                            </div>
                        </div>
                    </div>
                </InView>
            }).collect_view()}
        </div>
    }
}

#[component]
fn GuidesPanel() -> impl IntoView {
    view! {
        <div class="card-grid two" role="tabpanel">
            {GUIDES.iter().enumerate().map(|(i, guide)| view! {
                <InView reveal=Reveal::slide_x(i % 2 == 0).staggered(i, 200)>
                    <div class="card guide-card">
                        <div class="icon-bubble">
                            <Icon name="book-open" />
                        </div>
                        <div>
                            <h3>{guide.title}</h3>
                            <p class="muted">{guide.description}</p>
                            <div class="meta-row">
                                <span>{format!("{} chapters", guide.chapters)}</span>
                                <span>"\u{2022}"</span>
                                <span>{guide.duration}</span>
                            </div>
                        </div>
                    </div>
                </InView>
            }).collect_view()}
        </div>
    }
}

#[component]
fn CaseStudiesPanel() -> impl IntoView {
    view! {
        <div class="stack" role="tabpanel">
            {CASE_STUDIES.iter().enumerate().map(|(i, study)| view! {
                <InView reveal=Reveal::fade_up().with_offset_y(30).with_duration(600).staggered(i, 200)>
                    <div class="card case-card">
                        <div>
                            <div class="case-company">
                                <div class="avatar">{study.logo}</div>
                                <div>
                                    <h3>{study.company}</h3>
                                    <p class="muted small">{study.industry}</p>
                                </div>
                            </div>
                            <h4>"Challenge"</h4>
                            <p class="muted">{study.challenge}</p>
                        </div>
                        <div>
                            <h4>"Solution"</h4>
                            <p class="muted">{study.solution}</p>
                        </div>
                        <div>
                            <h4>"Results"</h4>
                            <ul class="result-list">
                                {study.results.iter().map(|result| view! {
                                    <li class="check-item">
                                        <Icon name="check" class="icon-sm text-primary" />
                                        <span>{*result}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </div>
                </InView>
            }).collect_view()}
        </div>
    }
}
