use admybrand_core::{LandingConfig, PageState};
use leptos::ev;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::browser;
use crate::pages::{landing::LandingPage, not_found::NotFound};

fn initial_state(config: &LandingConfig) -> PageState {
    let mut state = PageState::new();
    state.theme = browser::initial_theme(&config.header.theme_storage_key);
    state.calculator = config.calculator.input();
    state.on_scroll(browser::scroll_y());
    state
}

#[component]
pub fn App() -> impl IntoView {
    let config = browser::load_config();
    let state = RwSignal::new(initial_state(&config));
    log!("{} landing page mounted, theme {}", config.brand.name, state.with_untracked(|s| s.theme));

    provide_context(state);
    provide_context(config);

    let theme = Memo::new(move |_| state.with(|s| s.theme));
    Effect::new(move || {
        if let Err(e) = browser::apply_theme(theme.get()) {
            warn!("Theme not applied: {}", e);
        }
    });

    let scroll = window_event_listener(ev::scroll, move |_| {
        let scrolled = admybrand_core::is_scrolled(browser::scroll_y());
        if state.with_untracked(|s| s.scrolled) != scrolled {
            state.update(|s| s.scrolled = scrolled);
        }
    });
    on_cleanup(move || scroll.remove());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
            </Routes>
        </Router>
    }
}
