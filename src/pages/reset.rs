//! Password reset page.
//!
//! After a successful send the button stays disabled for the rest of the
//! visit; a failure re-enables it and leaves the address in the field.

use leptos::prelude::*;

use super::forms::validate_reset;
use crate::app::StoreHandle;
use crate::util::alerts::Alerts;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let alerts = expect_context::<Alerts>();

    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let email_value = match validate_reset(&email.get()) {
            Ok(v) => v,
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
                let _ = crate::state::actions::reset_password(&store, &alerts, &loading, &email_value).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, alerts, email_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">"We will mail you a link to choose a new password."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
