use admybrand_core::content::{FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};
use admybrand_core::LandingConfig;
use leptos::prelude::*;

use super::header::Logo;
use super::icons::Icon;
use crate::browser;

#[component]
pub fn Footer() -> impl IntoView {
    let brand = expect_context::<LandingConfig>().brand;
    let copyright = format!(
        "\u{a9} {} {}. All rights reserved.",
        browser::current_year(),
        brand.name
    );

    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Logo name=brand.name.clone() monogram=brand.monogram />
                        <p class="muted small">
                            "Transform your marketing strategy with our AI-powered suite. Create compelling campaigns, optimize performance, and scale your brand effortlessly."
                        </p>
                        <div class="social-links">
                            {SOCIAL_LINKS.iter().map(|link| view! {
                                <a href=link.href class="muted-link">
                                    <Icon name=link.icon />
                                    <span class="sr-only">{link.label}</span>
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                    {FOOTER_COLUMNS.iter().map(|column| view! {
                        <div class="footer-column">
                            <h4>{column.heading}</h4>
                            <ul>
                                {column.links.iter().map(|link| view! {
                                    <li><a href=link.href class="muted-link">{link.label}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
                <div class="footer-bottom">
                    <p class="muted tiny">{copyright}</p>
                    <div class="legal-links">
                        {LEGAL_LINKS.iter().map(|link| view! {
                            <a href=link.href class="muted-link tiny">{link.label}</a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
