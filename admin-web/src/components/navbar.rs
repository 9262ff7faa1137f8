//! Navigation Bar Component
//!
//! Title, provider status, the ticker quote, and a once-per-second clock.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session_context;
use crate::utils::constants::CLOCK_INTERVAL_MS;
use crate::utils::format::{format_quote, truncate_address};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let (clock, set_clock) = signal(String::new());

    Interval::new(CLOCK_INTERVAL_MS, move || {
        set_clock.set(String::from(js_sys::Date::new_0().to_iso_string()));
    })
    .forget();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Buyback Admin"</span>
                </A>
                <div style="display: flex; gap: 24px; align-items: center; font-family: monospace;">
                    <span class="nav-quote">
                        {move || session.usd_quote.get().map(|q| format!("ETH ${}", format_quote(q)))}
                    </span>
                    <span class="nav-account" title="connected account">
                        {move || {
                            session
                                .provider
                                .with(|state| match state.address() {
                                    Some(address) => truncate_address(address),
                                    None => state.label().to_string(),
                                })
                        }}
                    </span>
                    <span class="nav-clock">{clock}</span>
                </div>
            </div>
        </nav>
    }
}
