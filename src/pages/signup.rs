//! Account creation page.

use leptos::prelude::*;

use super::forms::validate_sign_up;
use crate::app::StoreHandle;
use crate::net::types::SignUpFields;
use crate::util::alerts::Alerts;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let alerts = expect_context::<Alerts>();

    let fields = RwSignal::new(SignUpFields::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let validated = match fields.with(validate_sign_up) {
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
                let _ = crate::state::actions::sign_up(&store, &alerts, &busy, validated).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, alerts, validated);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || fields.with(|f| f.name.clone())
                        on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || fields.with(|f| f.email.clone())
                        on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || fields.with(|f| f.password.clone())
                        on:input=move |ev| fields.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || fields.with(|f| f.confirm_password.clone())
                        on:input=move |ev| fields.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/login">"Already have an account?"</a>
                </p>
            </div>
        </div>
    }
}
