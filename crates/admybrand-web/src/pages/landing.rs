use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::sections::{
    cta::CallToAction, demo::Demo, faq::Faq, features::Features, hero::Hero,
    how_it_works::HowItWorks, logos::Logos, pricing::Pricing, resources::Resources,
    testimonials::Testimonials,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header />
            <main class="page-main">
                <Hero />
                <Logos />
                <Features />
                <HowItWorks />
                <Demo />
                <Pricing />
                <Resources />
                <Testimonials />
                <Faq />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}
