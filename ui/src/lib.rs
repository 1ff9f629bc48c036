// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use app_state_mut::Mode;
use components::mode_switch::ModeSwitch;
use components::pico::Container;
use screens::order::OrderScreen;

/// Frame and board styling that depends on app state classes; the rest
/// lives in the linked stylesheet.
const APP_CSS: &str = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        background-color: var(--muted-border-color);
    }

    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: 10px;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--background-color);
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        margin-bottom: 0;
    }

    .app-main-container .content {
        flex: 1;
        overflow-y: auto;
        min-height: 0;
        padding: 0 1rem;
    }

    /* A mutation in flight makes the whole board inert. */
    .order-board.dimmed {
        pointer-events: none;
        opacity: 0.5;
    }
"#;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/css/stall.css"),
        }
        style {
            "{APP_CSS}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let initial_prefs_future =
        use_server_future(move || async move { api::client_prefs().await })?;

    // Read from the future to ensure it's polled during SSR.
    let body = match &*initial_prefs_future.read() {
        Some(Ok(prefs)) => rsx! {
            LoadedApp {
                app_state: AppState::new(*prefs),
            }
        },
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when the
/// startup data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let totals_signal = use_signal(|| None);
    let mode_signal = use_signal(Mode::default);
    let refresh_serial_signal = use_signal(|| 0u64);

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        totals: totals_signal,
        mode: mode_signal,
        refresh_serial: refresh_serial_signal,
    });
    // Get a handle to the mutable state to populate it.
    let mut app_state_mut = use_context::<AppStateMut>();

    // One logical query identity: the combined totals. Reading the
    // refresh serial inside the closure makes a completed mutation
    // re-run the query.
    let totals_resource = use_resource(move || async move {
        let _serial = refresh_serial_signal();
        api::order_totals().await
    });

    let poll_interval = app_state.prefs.poll_interval();
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = totals_resource;
        async move {
            loop {
                compat::sleep(poll_interval).await;
                res.restart();
            }
        }
    });

    use_effect(move || {
        if let Some(result) = totals_resource.read().as_ref() {
            match result {
                Ok(totals) => {
                    // This check prevents re-render loops when a poll
                    // returns unchanged data.
                    if app_state_mut.totals.peek().as_ref() != Some(totals) {
                        app_state_mut.totals.set(Some(*totals));
                    }
                }
                Err(e) => {
                    // The last good totals stay on screen; the next
                    // tick retries.
                    dioxus_logger::tracing::warn!("totals poll failed: {}", e);
                }
            }
        }
    });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Curry Stand"
                                }
                            }
                        }
                        ul {
                            li {
                                ModeSwitch {}
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    OrderScreen {}
                }
            }
        }
    }
}
