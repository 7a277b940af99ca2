use leptos::prelude::*;

/// Stroke paths on a 24x24 grid, keyed by icon name.
pub fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "arrow-right" => &["M5 12h14", "m12 5 7 7-7 7"],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "book-open" => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        "check" => &["M20 6 9 17l-5-5"],
        "chevron-right" => &["m9 18 6-6-6-6"],
        "facebook" => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
        "layers" => &[
            "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
            "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
            "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
        ],
        "linkedin" => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        "menu" => &["M4 6h16", "M4 12h16", "M4 18h16"],
        "moon" => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        "play" => &["M8 5v14l11-7z"],
        "shield" => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
        ],
        "star" => &["m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
        "sun" => &[
            "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        "twitter" => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        "users" => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "x" => &["M18 6 6 18", "m6 6 12 12"],
        "zap" => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        _ => &[],
    }
}

#[component]
pub fn Icon(
    name: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] filled: bool,
) -> impl IntoView {
    let fill = if filled { "currentColor" } else { "none" };
    view! {
        <svg
            class=format!("icon {}", class)
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(name).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admybrand_core::content::{FEATURES, SOCIAL_LINKS};

    #[test]
    fn test_content_icons_resolve() {
        for feature in FEATURES {
            assert!(!paths(feature.icon).is_empty(), "{}", feature.icon);
        }
        for link in SOCIAL_LINKS {
            assert!(!paths(link.icon).is_empty(), "{}", link.label);
        }
        assert!(paths("unknown").is_empty());
    }
}
