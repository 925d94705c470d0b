//! Contact form. Submission only confirms locally; there is no backend for
//! messages.

use leptos::prelude::*;

use super::forms::{ContactFields, validate_contact};
use crate::state::notifications::NotificationKind;
use crate::util::alerts::show_alert;

#[component]
pub fn ContactPage() -> impl IntoView {
    let fields = RwSignal::new(ContactFields::default());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match fields.with(validate_contact) {
            Ok(sent) => {
                log::debug!("contact message from {}: {}", sent.email, sent.subject);
                show_alert(NotificationKind::Success, "mail-sent");
                fields.set(ContactFields::default());
                info.set(String::new());
            }
            Err(e) => info.set(e.to_string()),
        }
    };

    let on_cancel = move |_| {
        fields.set(ContactFields::default());
        info.set(String::new());
    };

    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <form class="contact-form" on:submit=on_submit>
                <input
                    class="contact-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || fields.with(|f| f.name.clone())
                    on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    class="contact-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || fields.with(|f| f.email.clone())
                    on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    class="contact-input"
                    type="text"
                    placeholder="Subject"
                    prop:value=move || fields.with(|f| f.subject.clone())
                    on:input=move |ev| fields.update(|f| f.subject = event_target_value(&ev))
                />
                <textarea
                    class="contact-input contact-input--message"
                    placeholder="Message"
                    prop:value=move || fields.with(|f| f.message.clone())
                    on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <div class="contact-form__actions">
                    <button class="btn" type="button" on:click=on_cancel>"Cancel"</button>
                    <button class="btn btn--primary" type="submit">"Send"</button>
                </div>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="contact-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
