use admybrand_core::content::NAV_LINKS;
use admybrand_core::{LandingConfig, PageState};
use leptos::logging::warn;
use leptos::prelude::*;

use super::icons::Icon;
use crate::browser;

#[component]
pub fn Logo(name: String, monogram: String) -> impl IntoView {
    view! {
        <a href="#" class="logo">
            <span class="logo-mark">{monogram}</span>
            <span>{name}</span>
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let brand = expect_context::<LandingConfig>().brand;
    let scrolled = Memo::new(move |_| state.with(|s| s.scrolled));
    let menu_open = Memo::new(move |_| state.with(|s| s.mobile_menu_open));

    view! {
        <header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
            <div class="container header-bar">
                <Logo name=brand.name monogram=brand.monogram />
                <nav class="desktop-nav">
                    {NAV_LINKS.iter().map(|link| view! {
                        <a href=link.href class="nav-link">{link.label}</a>
                    }).collect_view()}
                </nav>
                <div class="header-actions desktop-only">
                    <ThemeToggle />
                    <a href="#" class="nav-link">"Log in"</a>
                    <a href="#pricing" class="btn btn-primary">
                        "Get Started"
                        <Icon name="chevron-right" class="icon-sm" />
                    </a>
                </div>
                <div class="header-actions mobile-only">
                    <ThemeToggle />
                    <button
                        class="btn-icon"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| state.update(|s| s.toggle_mobile_menu())
                    >
                        {move || view! { <Icon name=if menu_open.get() { "x" } else { "menu" } /> }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <MobileMenu />
            </Show>
        </header>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let close = move |_| state.update(|s| s.close_mobile_menu());

    view! {
        <div class="mobile-menu">
            <nav class="container mobile-nav">
                {NAV_LINKS.iter().map(|link| view! {
                    <a href=link.href class="mobile-link" on:click=close>{link.label}</a>
                }).collect_view()}
                <div class="mobile-menu-footer">
                    <a href="#" class="mobile-link" on:click=close>"Log in"</a>
                    <a href="#pricing" class="btn btn-primary" on:click=close>
                        "Get Started"
                        <Icon name="chevron-right" class="icon-sm" />
                    </a>
                </div>
            </nav>
        </div>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let storage_key = expect_context::<LandingConfig>().header.theme_storage_key;
    let dark = Memo::new(move |_| state.with(|s| s.theme.is_dark()));

    let on_toggle = move |_| {
        state.update(|s| s.toggle_theme());
        let theme = state.with_untracked(|s| s.theme);
        if let Err(e) = browser::store_theme(&storage_key, theme) {
            warn!("Theme not persisted: {}", e);
        }
    };

    view! {
        <button class="btn-icon rounded" on:click=on_toggle>
            {move || view! { <Icon name=if dark.get() { "sun" } else { "moon" } /> }}
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}
