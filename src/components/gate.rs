//! Route gate: renders its children only when the access policy allows it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated `<Route>` wraps its page in `Gate` with the route's
//! `AccessLevel`; the decision itself is `routing::policy::authorize`.
//! Redirects replace the current history entry so back never returns to the
//! bounced path. While the session is unresolved nothing renders.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::policy::{AccessLevel, GateDecision, authorize};
use crate::state::session::Session;

#[component]
pub fn Gate(access: AccessLevel, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| authorize(access, &session.get()));

    Effect::new(move || {
        if let GateDecision::Redirect(to) = decision.get() {
            log::debug!("{access:?} gate redirecting to {to}");
            navigate(to, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == GateDecision::Render>
            {children()}
        </Show>
    }
}
