use std::ops::Deref;
use std::sync::Arc;

use api::client_prefs::ClientPrefs;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub prefs: ClientPrefs,
}

/// Stable, non-reactive state shared through the Dioxus context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: ClientPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}
