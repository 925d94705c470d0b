//! Applies `ScrollMemory` targets to the window.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. Browser scroll restoration is switched to
//! manual; `popstate` tags the path it lands on, and every location change
//! (path, query or hash) asks the memory for a target. The target is applied
//! on the next animation frame, after the routed view has mounted.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::scroll::ScrollMemory;
#[cfg(feature = "csr")]
use crate::routing::scroll::ScrollTarget;

#[cfg(feature = "csr")]
fn apply_scroll(target: ScrollTarget) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let y = match target {
        ScrollTarget::Top => 0.0,
        ScrollTarget::Restore(y) => y,
    };
    window.scroll_to_with_x_and_y(0.0, y);
}

#[component]
pub fn ScrollRestorer() -> impl IntoView {
    let location = use_location();
    let memory = StoredValue::new(ScrollMemory::new(&location.pathname.get_untracked()));

    #[cfg(feature = "csr")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
        }
        let pop_handle = window_event_listener(leptos::ev::popstate, move |_| {
            if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
                memory.update_value(|m| m.popstate(&path));
            }
        });
        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            memory.update_value(|m| m.record(y));
        });
        on_cleanup(move || {
            pop_handle.remove();
            scroll_handle.remove();
        });
    }

    Effect::new(move || {
        let path = location.pathname.get();
        location.search.track();
        location.hash.track();

        let mut target = None;
        memory.update_value(|m| target = m.arrive(&path));
        let Some(target) = target else {
            return;
        };
        log::debug!("scroll {target:?} on {}", memory.with_value(|m| m.current_path().to_owned()));

        #[cfg(feature = "csr")]
        request_animation_frame(move || {
            apply_scroll(target);
            memory.update_value(ScrollMemory::settle);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = target;
            memory.update_value(ScrollMemory::settle);
        }
    });
}
