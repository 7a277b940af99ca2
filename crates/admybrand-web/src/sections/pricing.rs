use admybrand_core::content::CALCULATOR_NOTES;
use admybrand_core::{
    track_gradient, PageState, SliderRange, MONTHLY_WORDS_RANGE, TEAM_SIZE_RANGE,
};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn Pricing() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let input = Memo::new(move |_| state.with(|s| s.calculator));
    let plan = Memo::new(move |_| input.get().recommendation());

    let on_team = move |raw: String| match TEAM_SIZE_RANGE.parse(&raw) {
        Ok(value) => state.update(|s| s.calculator.set_team_size(value)),
        Err(e) => warn!("Team size ignored: {}", e),
    };
    let on_words = move |raw: String| match MONTHLY_WORDS_RANGE.parse(&raw) {
        Ok(value) => state.update(|s| s.calculator.set_monthly_words(value)),
        Err(e) => warn!("Monthly words ignored: {}", e),
    };

    view! {
        <section id="pricing" class="section">
            <div class="container">
                <SectionHeading
                    badge="Pricing Calculator"
                    title="Calculate Your Perfect Plan"
                    lede="Customize your plan based on your team size and content needs. See real-time pricing updates."
                />

                <div class="card calculator">
                    <div class="calculator-controls">
                        <Slider
                            label="Team Size"
                            range=TEAM_SIZE_RANGE
                            value=Signal::derive(move || input.get().team_size)
                            fill=Signal::derive(move || input.get().team_fill_percent())
                            display=Signal::derive(move || input.get().team_size_display())
                            min_label="1 user"
                            max_label="100+ users"
                            on_change=on_team
                        />
                        <Slider
                            label="Monthly AI Words"
                            range=MONTHLY_WORDS_RANGE
                            value=Signal::derive(move || input.get().monthly_words)
                            fill=Signal::derive(move || input.get().words_fill_percent())
                            display=Signal::derive(move || input.get().monthly_words_display())
                            min_label="5K words"
                            max_label="200K+ words"
                            on_change=on_words
                        />

                        <div class="feature-list">
                            <h3>"Recommended Features"</h3>
                            {move || plan.get().tier.features().iter().map(|feature| view! {
                                <div class="check-item">
                                    <Icon name="check" class="icon-sm text-primary" />
                                    <span>{*feature}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="calculator-result">
                        <div class="centered">
                            <h3>"Recommended Plan"</h3>
                            // Rebuilt on every input change so the entry animation replays.
                            {move || {
                                let _ = input.get();
                                let plan = plan.get();
                                view! {
                                    <div class="price price-enter">
                                        {plan.price_display()}
                                        <span class="per-month">"/month"</span>
                                    </div>
                                    <p class="plan-label plan-enter">{plan.label}</p>
                                }
                            }}
                            <a href="#" class="btn btn-primary btn-lg full-width">
                                "Get Started with This Plan"
                                <Icon name="arrow-right" class="icon-sm" />
                            </a>
                        </div>
                        <div class="calculator-notes">
                            {CALCULATOR_NOTES.iter().map(|note| view! { <p>{*note}</p> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Slider(
    label: &'static str,
    range: SliderRange,
    #[prop(into)] value: Signal<u32>,
    #[prop(into)] fill: Signal<f64>,
    #[prop(into)] display: Signal<String>,
    min_label: &'static str,
    max_label: &'static str,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="slider">
            <label class="slider-label">{label}</label>
            <input
                type="range"
                class="slider-track"
                min=range.min.to_string()
                max=range.max.to_string()
                step=range.step.to_string()
                prop:value=move || value.get().to_string()
                style=move || track_gradient(fill.get())
                on:input=move |ev| on_change(event_target_value(&ev))
            />
            <div class="slider-scale">
                <span>{min_label}</span>
                <span class="slider-value">{move || display.get()}</span>
                <span>{max_label}</span>
            </div>
        </div>
    }
}
