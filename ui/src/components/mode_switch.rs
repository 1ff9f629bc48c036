//! The order / deliver toggle shown in the app header.

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Flips the active mode. Switching is always allowed and leaves the
/// pending counts untouched.
#[component]
pub fn ModeSwitch() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mode = (app_state_mut.mode)();

    rsx! {
        Button {
            button_type: if mode.is_deliver() { ButtonType::Contrast } else { ButtonType::Primary },
            outline: true,
            on_click: move |_| {
                let flipped = app_state_mut.mode.peek().toggled();
                app_state_mut.mode.set(flipped);
            },
            "{mode.name()} mode"
        }
    }
}
