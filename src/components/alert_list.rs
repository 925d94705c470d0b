//! Stacked toast list for active notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the `Alerts` queue in insertion order. Expiry is driven by the
//! per-alert timers `Alerts::show` schedules; clicking an alert dismisses it
//! early.

use leptos::prelude::*;

use crate::state::notifications::NotificationKind;
use crate::util::alerts::{Alerts, message_for};

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "alert alert--success",
        NotificationKind::Error => "alert alert--error",
    }
}

#[component]
pub fn AlertList() -> impl IntoView {
    let alerts = expect_context::<Alerts>();
    let queue = alerts.queue();

    view! {
        <div class="alert-list" aria-live="assertive">
            {move || {
                queue
                    .get()
                    .active()
                    .iter()
                    .map(|n| {
                        let id = n.id;
                        view! {
                            <div class=kind_class(n.kind) role="alert" on:click=move |_| alerts.dismiss(id)>
                                {message_for(&n.message_key)}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
