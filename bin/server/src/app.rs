//! Main Leptos application component and routing.

use crate::pages::{AdminPage, AuthorityPage, GeologistPage, LandingPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
///
/// The three role views must stay in sync with
/// [`Destination::path`](glof_ews_core::Destination::path).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="EWS of GLOF"/>
        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/admin") view=AdminPage/>
                    <Route path=path!("/authority") view=AuthorityPage/>
                    <Route path=path!("/geologist") view=GeologistPage/>
                </Routes>
            </main>
        </Router>
    }
}
