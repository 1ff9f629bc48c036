//=============================================================================
// File: src/screens/order.rs
//=============================================================================
use api::order_counts::OrderCounts;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::app_state_mut::Mode;
use crate::components::count_input::CountInput;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::totals_panel::TotalsPanel;

const NEGATIVE_WARNING: &str = "count cannot go below zero";

/// Guard for the decide button: fire when not both counts are zero,
/// never while a count is negative, never while a mutation is in flight.
fn submit_allowed(pending: OrderCounts, submitting: bool) -> bool {
    !submitting && !pending.is_zero() && !pending.has_negative()
}

#[component]
pub fn OrderScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();

    // The pending order lives here; the count widgets are stateless.
    let mut pending = use_signal(|| OrderCounts::ZERO);
    let mut submitting = use_signal(|| false);

    let mode = (app_state_mut.mode)();
    let totals = (app_state_mut.totals)();

    let can_submit = use_memo(move || submit_allowed(pending(), submitting()));

    let on_decide = move |_| {
        if !can_submit() {
            return;
        }
        submitting.set(true);

        let counts = pending();
        let mode = *app_state_mut.mode.peek();
        spawn(async move {
            let result = match mode {
                Mode::Order => api::add_order(counts).await,
                Mode::Deliver => api::deliver_order(counts).await,
            };
            match result {
                // Mark the totals query stale so the next read reflects
                // the change.
                Ok(()) => *app_state_mut.refresh_serial.write() += 1,
                Err(e) => {
                    dioxus_logger::tracing::warn!("{} submission failed: {}", mode.name(), e);
                }
            }
            // The pending order is cleared once per completed attempt,
            // success or failure alike.
            pending.set(OrderCounts::ZERO);
            submitting.set(false);
        });
    };

    let board_class = if submitting() {
        format!("order-board dimmed {}", mode.accent_class())
    } else {
        format!("order-board {}", mode.accent_class())
    };

    rsx! {
        div {
            class: "{board_class}",

            Grid {
                TotalsPanel {
                    title: "Orders so far",
                    theme: "panel-all",
                    counts: totals.map(|t| (t.curry, t.nan)),
                }
                TotalsPanel {
                    title: "Awaiting delivery",
                    theme: "panel-undelivered",
                    counts: totals.map(|t| (t.undelivered_curry, t.undelivered_nan)),
                }
            }

            Card {
                h2 { "🍛 Curry" }
                CountInput {
                    count: pending().curry,
                    on_change: move |curry| pending.with_mut(|p| p.curry = curry),
                }
                if pending().curry < 0 {
                    small { class: "count-warning", "{NEGATIVE_WARNING}" }
                }
            }

            Card {
                h2 { "🍞 Naan" }
                CountInput {
                    count: pending().nan,
                    on_change: move |nan| pending.with_mut(|p| p.nan = nan),
                }
                if pending().nan < 0 {
                    small { class: "count-warning", "{NEGATIVE_WARNING}" }
                }
            }

            Button {
                button_type: if mode.is_deliver() { ButtonType::Contrast } else { ButtonType::Primary },
                disabled: !can_submit(),
                on_click: on_decide,
                if submitting() {
                    "Sending…"
                } else {
                    "{mode.submit_caption()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_not_both_zero() {
        assert!(submit_allowed(OrderCounts { curry: 3, nan: 0 }, false));
        assert!(submit_allowed(OrderCounts { curry: 0, nan: 1 }, false));
        assert!(submit_allowed(OrderCounts { curry: 2, nan: 5 }, false));
    }

    #[test]
    fn blocked_on_empty_order() {
        assert!(!submit_allowed(OrderCounts::ZERO, false));
    }

    #[test]
    fn blocked_while_a_mutation_is_in_flight() {
        assert!(!submit_allowed(OrderCounts { curry: 3, nan: 0 }, true));
    }

    #[test]
    fn blocked_on_negative_counts() {
        assert!(!submit_allowed(OrderCounts { curry: -1, nan: 0 }, false));
        assert!(!submit_allowed(OrderCounts { curry: 4, nan: -2 }, false));
    }
}
