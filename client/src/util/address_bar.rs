//! Reading the current location from the browser's address bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fragment variant owns its location signal and keeps it in sync with
//! `hashchange`. The in-page variants get theirs from `leptos_router` and do
//! not use this module. Outside a browser (`csr` disabled) every read
//! returns `/`.

#[cfg(test)]
#[path = "address_bar_test.rs"]
mod address_bar_test;

use leptos::prelude::*;
use routing::{Location, Strategy};

/// Read the current location as `strategy` sees it.
pub fn current(strategy: Strategy) -> Location {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Location::root();
        };
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        strategy.location(&pathname, &hash)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = strategy;
        Location::root()
    }
}

/// Keep `location` in sync with the URL fragment.
///
/// Every `hashchange` re-reads the fragment; the signal is only written when
/// the normalised path actually changed, so `#/home` to `#/home?_k=x` does not
/// re-render.
pub fn watch_fragment(location: RwSignal<Location>) {
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            let next = current(Strategy::Fragment);
            if location.get_untracked() != next {
                log::debug!("hashchange: {} -> {next}", location.get_untracked());
                location.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = location;
    }
}
