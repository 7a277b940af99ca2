//! Thin wrappers over the browser APIs the page touches.

use admybrand_core::{LandingConfig, LandingError, Result, Theme};
use leptos::logging::warn;
use leptos::prelude::{document, window};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Id of the optional `<script type="application/json">` block holding a `LandingConfig`.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

fn dom_err(e: JsValue) -> LandingError {
    LandingError::Dom(format!("{:?}", e))
}

/// Reads the page config embedded in `index.html`, falling back to defaults.
pub fn load_config() -> LandingConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return LandingConfig::default();
    };

    match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring invalid landing config: {}", e);
            LandingConfig::default()
        }
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

fn storage() -> Result<web_sys::Storage> {
    window()
        .local_storage()
        .map_err(dom_err)?
        .ok_or_else(|| LandingError::Dom("localStorage unavailable".to_string()))
}

pub fn stored_theme(key: &str) -> Result<Option<Theme>> {
    match storage()?.get_item(key).map_err(dom_err)? {
        Some(value) => value.parse().map(Some),
        None => Ok(None),
    }
}

pub fn store_theme(key: &str, theme: Theme) -> Result<()> {
    storage()?.set_item(key, theme.as_str()).map_err(dom_err)
}

pub fn prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Stored choice first, then the OS preference.
pub fn initial_theme(key: &str) -> Theme {
    match stored_theme(key) {
        Ok(Some(theme)) => theme,
        Ok(None) => system_theme(),
        Err(e) => {
            warn!("Falling back to system theme: {}", e);
            system_theme()
        }
    }
}

fn system_theme() -> Theme {
    if prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Sets or clears the `dark` class on `<html>`.
pub fn apply_theme(theme: Theme) -> Result<()> {
    let root = document()
        .document_element()
        .ok_or_else(|| LandingError::Dom("missing document element".to_string()))?;
    let classes = root.class_list();
    match theme.class_name() {
        Some(name) => classes.add_1(name).map_err(dom_err),
        None => classes.remove_1("dark").map_err(dom_err),
    }
}

/// An `IntersectionObserver` together with the callback it invokes.
/// Dropping it disconnects the observer and frees the callback.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_visible` the first time `target` enters the viewport, then stops observing.
pub fn observe_once(
    target: &Element,
    on_visible: impl Fn() + 'static,
) -> Result<VisibilityObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|e| e.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                on_visible();
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom_err)?;
    observer.observe(target);
    Ok(VisibilityObserver {
        observer,
        _callback: callback,
    })
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn stored_theme_round_trips() {
        let key = "admybrand-test-theme";
        store_theme(key, Theme::Dark).unwrap();
        assert_eq!(stored_theme(key).unwrap(), Some(Theme::Dark));
        assert_eq!(initial_theme(key), Theme::Dark);

        storage().unwrap().set_item(key, "sepia").unwrap();
        assert!(stored_theme(key).is_err());
        storage().unwrap().remove_item(key).unwrap();
        assert_eq!(stored_theme(key).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn apply_theme_toggles_dark_class() {
        let root = document().document_element().unwrap();
        apply_theme(Theme::Dark).unwrap();
        assert!(root.class_list().contains("dark"));
        apply_theme(Theme::Light).unwrap();
        assert!(!root.class_list().contains("dark"));
    }

    #[wasm_bindgen_test]
    fn visibility_observer_is_released_on_drop() {
        let target = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&target).unwrap();

        let first = observe_once(&target, || {}).unwrap();
        drop(first);
        let second = observe_once(&target, || {}).unwrap();
        drop(second);

        target.remove();
    }

    #[wasm_bindgen_test]
    fn config_defaults_without_script_block() {
        assert_eq!(load_config(), LandingConfig::default());
    }
}
