// File: src/components/totals_panel.rs
use dioxus::prelude::*;

/// Shown until the first poll has resolved. Missing data is never
/// rendered as zero.
const PLACEHOLDER: &str = "fetching…";

/// One colored summary card of backend-owned counts.
#[component]
pub fn TotalsPanel(title: String, theme: String, counts: Option<(u64, u64)>) -> Element {
    rsx! {
        article {
            class: "totals-panel {theme}",
            p { "{title}" }
            match counts {
                Some((curry, nan)) => rsx! {
                    p {
                        "🍛 "
                        span { class: "totals-count", "{curry}" }
                        " · 🍞 "
                        span { class: "totals-count", "{nan}" }
                    }
                },
                None => rsx! {
                    p { class: "totals-placeholder", "{PLACEHOLDER}" }
                },
            }
        }
    }
}
