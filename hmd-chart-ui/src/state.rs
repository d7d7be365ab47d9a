//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and report interactions through
//! [`AppState::dispatch`].

use dioxus::prelude::*;
use hmd_analysis::{Dashboard, DashboardView};
use hmd_core::{Catalog, ControlChange, FilterSelection};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Current filter selection
    pub selection: Signal<Option<FilterSelection>>,
    /// View rendered for the current selection
    pub view: Signal<Option<DashboardView>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal error message; no controls are shown while set
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            selection: Signal::new(None),
            view: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Install a freshly loaded dataset and render its initial selection.
    pub fn install(&mut self, dashboard: Dashboard) {
        let initial = dashboard
            .initial_selection()
            .and_then(|sel| dashboard.view(&sel).map(|view| (sel, view)));
        match initial {
            Ok((selection, view)) => {
                self.selection.set(Some(selection));
                self.view.set(Some(view));
                self.dashboard.set(Some(dashboard));
            }
            Err(e) => {
                log::error!("[HMD] state: initial render failed: {}", e);
                self.error_msg.set(Some(format!("Failed to render dashboard: {}", e)));
            }
        }
        self.loading.set(false);
    }

    /// Catalog of the loaded dataset, if any.
    pub fn catalog(&self) -> Option<Catalog> {
        self.dashboard.read().as_ref().map(|d| d.catalog().clone())
    }

    /// Apply one control change: rebuild the selection and re-render.
    pub fn dispatch(&mut self, change: ControlChange) {
        let Some(dashboard) = self.dashboard.read().clone() else {
            log::warn!("[HMD] state: control change before data loaded");
            return;
        };
        let Some(current) = self.selection.read().clone() else {
            return;
        };
        match dashboard.handle(current, change) {
            Ok((selection, view)) => {
                self.selection.set(Some(selection));
                self.view.set(Some(view));
            }
            Err(e) => {
                log::error!("[HMD] state: render failed: {}", e);
                self.error_msg.set(Some(format!("Failed to render analysis: {}", e)));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
