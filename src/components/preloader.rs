//! Full-screen loading indicator shown until bootstrap completes.

use leptos::prelude::*;

#[component]
pub fn Preloader() -> impl IntoView {
    view! {
        <div class="preloader" role="status" aria-live="polite">
            <span class="preloader__spinner"></span>
            <span class="preloader__label">"Loading..."</span>
        </div>
    }
}
