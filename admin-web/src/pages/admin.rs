//! Admin Page - publish a buyback contract and inspect a deployment.
//!
//! Two independent, user-triggered flows against the same loaded
//! descriptors: the publish form deploys the buyback contract with a chosen
//! token address, the manage form reads a deployment's linked token and its
//! two balances. `?token=` and `?buyback=` query parameters pre-fill the
//! forms; a valid `buyback` parameter also triggers inspection on load.

use leptos::prelude::*;

use shared::{format_wei, is_address, normalize_address};

use crate::services::{buyback, contracts, provider, ticker};
use crate::state::session::{use_session_context, ProviderState};
use crate::utils::constants::{
    ACCOUNTS_POLICY, BUYBACK_DESCRIPTOR_PATH, DETECT_POLICY, RECEIPT_POLICY, TICKER_ENDPOINT,
    TOKEN_DESCRIPTOR_PATH,
};
use crate::utils::url;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session_context();

    // Publish form
    let (token_field, set_token_field) = signal(String::new());
    let (published_tx, set_published_tx) = signal(String::new());
    let (published_address, set_published_address) = signal(String::new());
    let (publishing, set_publishing) = signal(false);

    // Manage form
    let (buyback_field, set_buyback_field) = signal(String::new());
    let (linked_token_field, set_linked_token_field) = signal(String::new());
    let (token_balance_field, set_token_balance_field) = signal(String::new());
    let (native_balance_field, set_native_balance_field) = signal(String::new());
    let (loading_info, set_loading_info) = signal(false);

    let run_inspect = move |address: String| {
        session.clear_report();
        if !session.is_connected() {
            session.report_error("the wallet is not connected yet");
            return;
        }
        if session.buyback_contract.get_untracked().is_none() {
            session.report_error("contract descriptors are still loading");
            return;
        }
        let Some(address) = normalize_address(&address) else {
            session.report_error(format!("'{address}' is not a chain address"));
            return;
        };

        set_loading_info.set(true);
        leptos::task::spawn_local(async move {
            let token = match buyback::linked_token(&address).await {
                Ok(token) => token,
                Err(error) => {
                    session.report_error(format!("could not read the linked token: {error}"));
                    set_loading_info.set(false);
                    return;
                }
            };
            set_linked_token_field.set(token.clone());

            // The two balance reads are concurrent and independent: either
            // may fail without taking the other down. Both settle before the
            // button re-enables.
            let (token_balance, native_balance) = futures::join!(
                buyback::token_balance(&token, &address),
                buyback::native_balance(&address),
            );
            match token_balance {
                Ok(wei) => set_token_balance_field.set(format_wei(wei)),
                Err(error) => session.report_error(format!("token balance read failed: {error}")),
            }
            match native_balance {
                Ok(wei) => set_native_balance_field.set(format_wei(wei)),
                Err(error) => session.report_error(format!("native balance read failed: {error}")),
            }
            set_loading_info.set(false);
        });
    };

    // Connect the provider, load descriptors and the ticker quote, then
    // apply the deep-link query parameters.
    leptos::task::spawn_local(async move {
        match provider::connect(DETECT_POLICY, ACCOUNTS_POLICY).await {
            Ok(address) => {
                log::info!("connected account {address}");
                session.set_connected(address);
            }
            Err(error) => {
                let state = match error {
                    provider::ProviderError::NotInstalled => ProviderState::Unavailable,
                    provider::ProviderError::Denied => ProviderState::Denied,
                    provider::ProviderError::Locked => ProviderState::Locked,
                    provider::ProviderError::Rpc(_) => ProviderState::Unavailable,
                };
                session.report_error(error.to_string());
                session.provider.set(state);
                // No contract interaction without a provider.
                return;
            }
        }

        match contracts::load_descriptor(TOKEN_DESCRIPTOR_PATH).await {
            Ok(descriptor) => session.token_contract.set(Some(descriptor)),
            Err(error) => session.report_error(format!("failed to load the token contract: {error}")),
        }
        match contracts::load_descriptor(BUYBACK_DESCRIPTOR_PATH).await {
            Ok(descriptor) => session.buyback_contract.set(Some(descriptor)),
            Err(error) => {
                session.report_error(format!("failed to load the buyback contract: {error}"))
            }
        }

        match ticker::fetch_usd_quote(TICKER_ENDPOINT).await {
            Ok(quote) => session.usd_quote.set(Some(quote)),
            // Display-only: leave the quote blank.
            Err(error) => log::warn!("ticker fetch failed: {error}"),
        }

        if let Some(token) = url::get_query_param("token") {
            if is_address(&token) {
                set_token_field.set(token);
            }
        }
        if let Some(address) = url::get_query_param("buyback") {
            if is_address(&address) {
                set_buyback_field.set(address.clone());
                run_inspect(address);
            }
        }
    });

    let on_publish = move |_| {
        session.clear_report();
        let Some(from) = session.account() else {
            session.report_error("the wallet is not connected yet");
            return;
        };
        let Some(descriptor) = session.buyback_contract.get_untracked() else {
            session.report_error("contract descriptors are still loading");
            return;
        };
        let Some(token) = normalize_address(&token_field.get_untracked()) else {
            session.report_error("Bad token address");
            return;
        };

        set_publishing.set(true);
        leptos::task::spawn_local(async move {
            let tx_hash = match buyback::submit_deploy(&from, &descriptor, &token).await {
                Ok(hash) => hash,
                Err(error) => {
                    session.report_error(format!("publishing failed: {error}"));
                    set_publishing.set(false);
                    return;
                }
            };
            set_published_tx.set(tx_hash.clone());

            match buyback::await_receipt(&tx_hash, RECEIPT_POLICY).await {
                Ok(receipt) => match receipt.contract_address {
                    Some(address) => {
                        log::info!("buyback contract address: {address}");
                        set_published_address.set(address.clone());
                        set_buyback_field.set(address.clone());
                        url::redirect_with_buyback(&address);
                    }
                    None => session.report_error("the receipt carries no contract address"),
                },
                Err(error) => session.report_error(format!("publishing failed: {error}")),
            }
            set_publishing.set(false);
        });
    };

    let on_load_info = move |_| run_inspect(buyback_field.get_untracked());

    view! {
        <div class="content-wrapper">
            {move || session.report.get().map(|message| view! {
                <div class="error">
                    <p style="text-align: center;">{message}</p>
                </div>
            })}

            <div class="card">
                <h2 class="card-title">"Publish Buyback"</h2>
                <label>
                    "Token address"
                    <input
                        type="text"
                        placeholder="0x..."
                        prop:value=token_field
                        on:input=move |ev| set_token_field.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" prop:disabled=publishing on:click=on_publish>
                    {move || if publishing.get() { "Publishing..." } else { "Publish" }}
                </button>
                <label>
                    "Transaction hash"
                    <input type="text" readonly=true prop:value=published_tx/>
                </label>
                <label>
                    "Deployed address"
                    <input type="text" readonly=true prop:value=published_address/>
                </label>
                <details>
                    <summary>"Buyback ABI"</summary>
                    <pre class="abi">
                        {move || session.buyback_contract.get().map(|d| d.abi_json())}
                    </pre>
                </details>
            </div>

            <div class="card">
                <h2 class="card-title">"Manage Buyback"</h2>
                <label>
                    "Buyback address"
                    <input
                        type="text"
                        placeholder="0x..."
                        prop:value=buyback_field
                        on:input=move |ev| set_buyback_field.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" prop:disabled=loading_info on:click=on_load_info>
                    {move || if loading_info.get() { "Loading..." } else { "Load info" }}
                </button>
                <label>
                    "Token address"
                    <input type="text" readonly=true prop:value=linked_token_field/>
                </label>
                <label>
                    "Token balance"
                    <input type="text" readonly=true prop:value=token_balance_field/>
                </label>
                <label>
                    "Native balance"
                    <input type="text" readonly=true prop:value=native_balance_field/>
                </label>
                <details>
                    <summary>"Token ABI"</summary>
                    <pre class="abi">
                        {move || session.token_contract.get().map(|d| d.abi_json())}
                    </pre>
                </details>
            </div>
        </div>
    }
}
