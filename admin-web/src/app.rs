//! Application shell - router plus the session context.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::AdminPage;
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    // One session context for the page lifetime; flows only read from it.
    provide_session_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=AdminPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px;">"404 - Page Not Found"</h1>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to the admin page"
                    </span>
                </A>
            </div>
        </div>
    }
}
