// ui/src/components/count_input.rs
use dioxus::prelude::*;

/// The − / value / + strip for one menu item.
///
/// The widget is stateless: the parent owns the count and receives the
/// requested next value through `on_change`. No clamping happens here;
/// requests below zero are passed through and flagged by the parent.
#[component]
pub fn CountInput(count: i64, on_change: EventHandler<i64>) -> Element {
    rsx! {
        div {
            class: "count-input",
            button {
                class: "count-step secondary outline",
                onclick: move |_| on_change.call(count - 1),
                "−"
            }
            div {
                class: "count-value",
                "{count}"
            }
            button {
                class: "count-step secondary outline",
                onclick: move |_| on_change.call(count + 1),
                "＋"
            }
        }
    }
}
