//! Root application component: bootstrap gate, context providers, routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` shows only the preloader until the one-shot bootstrap timer fires.
//! `Shell` then builds the session store, starts resolving the startup
//! session, and provides the presentation surface pages consume: the session
//! read handle, the alert queue, the theme, and the store for operations.
//!
//! Routes marked public-only or protected wrap their page in `Gate`; the rest
//! render for everyone.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert_list::AlertList;
use crate::components::gate::Gate;
use crate::components::nav_bar::NavBar;
use crate::components::preloader::Preloader;
use crate::components::scroll_restorer::ScrollRestorer;
use crate::net::api::HttpIdentityService;
use crate::net::identity::IdentityService;
use crate::pages::contact::ContactPage;
use crate::pages::content::{
    AboutPage, DetailPage, DetailedSubmissionPage, HomePage, LearnPage, NotFoundPage, ProfilePage, QuizzesPage,
    SubmissionsPage,
};
use crate::pages::login::LoginPage;
use crate::pages::reset::ResetPasswordPage;
use crate::pages::signup::SignUpPage;
use crate::routing::policy::AccessLevel;
use crate::state::bootstrap::BootstrapController;
use crate::state::session::{Session, SessionStore};
use crate::util::alerts::Alerts;
use crate::util::config::ShellConfig;
use crate::util::theme::{self, Theme};

/// The session store as held in context. It is `!Send`, so it lives in
/// local storage.
pub type StoreHandle = StoredValue<SessionStore, LocalStorage>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ShellConfig::from_build_env().with_theme(theme::read_preference());
    theme::apply(config.theme);

    let bootstrap = BootstrapController::new();
    let phase = RwSignal::new(bootstrap.phase());

    #[cfg(feature = "csr")]
    match bootstrap.arm(
        gloo_timers::future::TimeoutFuture::new(config.bootstrap_delay_ms),
        move |ready| phase.set(ready),
    ) {
        Ok((task, timer)) => {
            leptos::task::spawn_local(task);
            on_cleanup(move || timer.cancel());
        }
        Err(e) => log::warn!("bootstrap not armed: {e}"),
    }

    view! {
        <Title text="Quiz"/>
        <Show when=move || !phase.get().is_preloading() fallback=|| view! { <Preloader/> }>
            <Shell config=config.clone()/>
        </Show>
    }
}

/// Everything that renders once bootstrap is ready.
#[component]
pub fn Shell(config: ShellConfig) -> impl IntoView {
    let service: Rc<dyn IdentityService> = Rc::new(HttpIdentityService::new(config.api_base.clone()));
    let store = SessionStore::new(service);

    let session = RwSignal::new(store.current());
    store.subscribe(move |s: &Session| session.set(s.clone()));

    #[cfg(feature = "csr")]
    {
        let init = store.initialize();
        leptos::task::spawn_local(async move {
            let resolved = init.await;
            log::debug!("startup session resolved: {:?}", resolved.status());
        });
    }

    let handle: StoreHandle = StoredValue::new_local(store);
    provide_context(session);
    provide_context(handle);
    provide_context(Alerts::new(config.alert_ttl_ms));
    provide_context(RwSignal::<Theme>::new(config.theme));

    // Re-check the identity when the tab regains focus.
    #[cfg(feature = "csr")]
    {
        let focus_handle = window_event_listener(leptos::ev::focus, move |_| {
            if !session.get_untracked().is_resolved() {
                return;
            }
            let refresh = handle.get_value().refresh();
            leptos::task::spawn_local(async move {
                let _ = refresh.await;
            });
        });
        on_cleanup(move || focus_handle.remove());
    }

    view! {
        <Router>
            <NavBar/>
            <ScrollRestorer/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("quizzes") view=QuizzesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("reset") view=ResetPasswordPage/>
                    <Route path=StaticSegment("learn") view=LearnPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <Gate access=AccessLevel::PublicOnly><SignUpPage/></Gate> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Gate access=AccessLevel::PublicOnly><LoginPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("quiz"), ParamSegment("id"))
                        view=|| view! { <Gate access=AccessLevel::Protected><DetailPage title="Quiz"/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("video"), ParamSegment("id"))
                        view=|| view! { <Gate access=AccessLevel::Protected><DetailPage title="Video"/></Gate> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Gate access=AccessLevel::Protected><ProfilePage/></Gate> }
                    />
                    <Route
                        path=StaticSegment("submissions")
                        view=|| view! { <Gate access=AccessLevel::Protected><SubmissionsPage/></Gate> }
                    />
                    <Route
                        path=StaticSegment("detailed-submission")
                        view=|| view! { <Gate access=AccessLevel::Protected><DetailedSubmissionPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("result"), ParamSegment("id"))
                        view=|| view! { <Gate access=AccessLevel::Protected><DetailPage title="Result"/></Gate> }
                    />
                </Routes>
            </main>
            <AlertList/>
        </Router>
    }
}
