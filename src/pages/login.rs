//! Email + password login page.

use leptos::prelude::*;

use super::forms::validate_login;
use crate::app::StoreHandle;
use crate::util::alerts::Alerts;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let alerts = expect_context::<Alerts>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.get_value();
            leptos::task::spawn_local(async move {
                let _ = crate::state::actions::login(&store, &alerts, &busy, &email_value, &password_value).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, alerts, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/reset">"Forgot password?"</a>
                    " "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
