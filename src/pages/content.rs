//! Content views. These are placeholders; quiz and video content is served by
//! separate pages that mount here.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"Quiz"</h1>
            <p>"Practice with short quizzes and track your results."</p>
            <a href="/quizzes" class="btn btn--primary">"Browse quizzes"</a>
        </section>
    }
}

#[component]
pub fn QuizzesPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"Quizzes"</h1>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"About"</h1>
        </section>
    }
}

#[component]
pub fn LearnPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"Learn"</h1>
        </section>
    }
}

/// Title plus the `:id` route param for the id-addressed views.
#[component]
pub fn DetailPage(title: &'static str) -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    view! {
        <section class="content-page">
            <h1>{title}</h1>
            <p class="content-page__id">{id}</p>
        </section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let email = move || session.get().identity().map(|u| u.email.clone()).unwrap_or_default();
    let name = move || session.get().identity().map(|u| u.label().to_owned()).unwrap_or_default();

    view! {
        <section class="content-page">
            <h1>"Profile"</h1>
            <p class="content-page__name">{name}</p>
            <p class="content-page__email">{email}</p>
        </section>
    }
}

#[component]
pub fn SubmissionsPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"Submissions"</h1>
        </section>
    }
}

#[component]
pub fn DetailedSubmissionPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"Submission"</h1>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="content-page content-page--not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to home"</a>
        </section>
    }
}
