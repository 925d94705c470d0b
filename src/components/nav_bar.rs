//! Top navigation bar with theme toggle and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows login/sign-up links for signed-out users and the identity label plus
//! logout for signed-in users. Logout goes through the session store; the
//! route gate handles any resulting redirect.

use leptos::prelude::*;

use crate::app::StoreHandle;
use crate::state::session::Session;
use crate::util::alerts::Alerts;
use crate::util::theme::{self, Theme};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let theme_signal = expect_context::<RwSignal<Theme>>();
    let store = expect_context::<StoreHandle>();
    let alerts = expect_context::<Alerts>();

    let user_label = move || {
        session
            .get()
            .identity()
            .map(|u| u.label().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let store = store.get_value();
            leptos::task::spawn_local(async move {
                crate::state::actions::logout(&store, &alerts).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, alerts);
        }
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Quiz"</a>
            <a href="/quizzes" class="nav-bar__link">"Quizzes"</a>
            <a href="/learn" class="nav-bar__link">"Learn"</a>
            <a href="/about" class="nav-bar__link">"About"</a>
            <a href="/contact" class="nav-bar__link">"Contact"</a>

            <span class="nav-bar__spacer"></span>

            <button
                class="btn nav-bar__theme-toggle"
                on:click=move |_| {
                    let next = theme::toggle(theme_signal.get());
                    theme_signal.set(next);
                }
                title="Toggle dark mode"
            >
                {move || if theme_signal.get().is_dark() { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <Show when=move || session.get().is_resolved()>
                            <a href="/login" class="nav-bar__link">"Login"</a>
                            <a href="/signup" class="btn nav-bar__signup">"Sign Up"</a>
                        </Show>
                    }
                }
            >
                <a href="/profile" class="nav-bar__self">{user_label}</a>
                <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
