//! Session state shared across the page.
//!
//! One context object created at initialization replaces module-level
//! globals: the provider connection, the two loaded contract descriptors,
//! the ticker quote, and the single error-report channel every flow
//! writes user-visible failures to.

use leptos::prelude::*;
use shared::ContractDescriptor;

/// Where the provider bridge currently stands.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderState {
    /// Still probing for an injected provider.
    Detecting,
    /// No provider found after the bounded probe; terminal.
    Unavailable,
    /// The user refused account access; recoverable on reload.
    Denied,
    /// The provider exposed no accounts; recoverable once unlocked.
    Locked,
    Connected { address: String },
}

impl ProviderState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ProviderState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ProviderState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// Status line shown in the navbar.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderState::Detecting => "detecting wallet...",
            ProviderState::Unavailable => "no wallet",
            ProviderState::Denied => "access denied",
            ProviderState::Locked => "wallet locked",
            ProviderState::Connected { .. } => "connected",
        }
    }
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub provider: RwSignal<ProviderState>,
    pub token_contract: RwSignal<Option<ContractDescriptor>>,
    pub buyback_contract: RwSignal<Option<ContractDescriptor>>,
    pub usd_quote: RwSignal<Option<f64>>,
    pub report: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            provider: RwSignal::new(ProviderState::Detecting),
            token_contract: RwSignal::new(None),
            buyback_contract: RwSignal::new(None),
            usd_quote: RwSignal::new(None),
            report: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.provider.with(|state| state.is_connected())
    }

    /// The connected account, if any.
    pub fn account(&self) -> Option<String> {
        self.provider
            .with_untracked(|state| state.address().map(|s| s.to_string()))
    }

    pub fn set_connected(&self, address: String) {
        self.provider.set(ProviderState::Connected { address });
    }

    /// Surface a user-visible error through the single report channel.
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.report.set(Some(message));
    }

    pub fn clear_report(&self) {
        self.report.set(None);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
