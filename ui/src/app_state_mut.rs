//! Defines the mutable, reactive state for the application's UI.

use api::order_totals::OrderTotals;
use dioxus::prelude::*;

/// Whether the next submission places an order or marks one delivered.
///
/// Purely client-local: the mode selects the remote method, the accent
/// color, and the decide-button caption. It has no server representation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum Mode {
    #[default]
    Order,
    Deliver,
}

impl Mode {
    /// The other mode. Switching never touches the pending counts.
    pub fn toggled(self) -> Self {
        match self {
            Self::Order => Self::Deliver,
            Self::Deliver => Self::Order,
        }
    }

    /// Short name shown on the header toggle.
    pub fn name(self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Deliver => "Deliver",
        }
    }

    /// Caption on the decide button.
    pub fn submit_caption(self) -> &'static str {
        match self {
            Self::Order => "Place order",
            Self::Deliver => "Mark delivered",
        }
    }

    /// Accent class applied to the board while this mode is active.
    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Order => "mode-order",
            Self::Deliver => "mode-deliver",
        }
    }
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to
/// change and trigger automatic re-renders in the view. It is separate
/// from the stable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Latest successfully polled totals. `None` until the first poll
    /// lands, which consumers render as a placeholder rather than zero.
    pub totals: Signal<Option<OrderTotals>>,
    /// The active submission mode.
    pub mode: Signal<Mode>,
    /// Bumped after each successful mutation; the totals query re-runs
    /// whenever it changes.
    pub refresh_serial: Signal<u64>,
}

#[cfg(test)]
mod tests {
    use super::Mode;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Mode::Order.toggled().toggled(), Mode::Order);
        assert_eq!(Mode::Deliver.toggled().toggled(), Mode::Deliver);
    }

    #[test]
    fn modes_present_distinct_affordances() {
        assert_ne!(Mode::Order.name(), Mode::Deliver.name());
        assert_ne!(Mode::Order.submit_caption(), Mode::Deliver.submit_caption());
        assert_ne!(Mode::Order.accent_class(), Mode::Deliver.accent_class());
    }
}
