//! # Screen Resolver
//!
//! A pure, total function from a session state snapshot to exactly one
//! top-level mode. Evaluated in strict priority order, first matching
//! predicate wins. The ordering is itself a contract: maintenance outranks
//! first-run, first-run outranks the lock screen, and so on.
//!
//! The resolver is recomputed on every state change. There is no cached
//! decision and no hysteresis: maintenance engaging mid-session moves an
//! authenticated user to [`Mode::Maintenance`] exactly like any other
//! recomputation, and clearing it restores [`Mode::Unlocked`] without
//! re-authentication.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::session::SessionState;

/// Step within the first-run flow, in its fixed internal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstRunStep {
    /// Pick the UI language
    LanguagePick,
    /// Accept the terms of service
    TermsOfService,
    /// Configure an unlock method (PIN or system auth)
    UnlockSetup,
}

/// Sub-screen of the locked mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnlockScreen {
    /// Custom PIN entry
    PinUnlock,
    /// Platform biometric prompt
    BiometricUnlock,
}

/// Initial route inside the unlocked mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnlockedRoute {
    /// Wallet list / dashboard
    WalletList,
    /// Wallet creation flow
    WalletCreation,
}

/// Top-level navigation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Bootstrap has not completed
    Splash,
    /// Server maintenance; an authenticated session is suspended, not
    /// logged out
    Maintenance,
    /// Onboarding: language, terms, unlock-method setup
    FirstRun(FirstRunStep),
    /// Developer index for internal tooling (debug builds only)
    DevIndex,
    /// Unlock required
    Locked(UnlockScreen),
    /// Active session surface
    Unlocked,
}

/// Resolve the current mode from a state snapshot
pub fn resolve(state: &SessionState, config: &AppConfig) -> Mode {
    if !state.is_app_initialized {
        return Mode::Splash;
    }
    if state.is_maintenance {
        return Mode::Maintenance;
    }
    if let Some(step) = first_run_step(state) {
        return Mode::FirstRun(step);
    }
    if config.dev_index_enabled() {
        return Mode::DevIndex;
    }
    if state.has_any_wallet() && !state.is_authenticated {
        return if state.settings.is_system_auth_enabled {
            Mode::Locked(UnlockScreen::BiometricUnlock)
        } else {
            Mode::Locked(UnlockScreen::PinUnlock)
        };
    }
    Mode::Unlocked
}

/// First incomplete onboarding step, if any
fn first_run_step(state: &SessionState) -> Option<FirstRunStep> {
    if state.settings.language_code.is_none() {
        return Some(FirstRunStep::LanguagePick);
    }
    if !state.settings.accepted_tos {
        return Some(FirstRunStep::TermsOfService);
    }
    if !state.settings.has_unlock_method() {
        return Some(FirstRunStep::UnlockSetup);
    }
    None
}

/// Initial route for the unlocked mode
///
/// The resolver's default is always the wallet list; only inside the
/// unlocked mode does an empty inventory redirect to wallet creation. Kept
/// separate from [`resolve`] so the mode decision and the in-mode routing
/// stay independently testable.
pub fn unlocked_initial_route(state: &SessionState) -> UnlockedRoute {
    if state.has_any_wallet() {
        UnlockedRoute::WalletList
    } else {
        UnlockedRoute::WalletCreation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::auth::PinHash;
    use vela_core::identifiers::{NetworkId, WalletScheme};
    use vela_core::wallet_meta::WalletMeta;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    fn onboarded_state() -> SessionState {
        let mut state = SessionState::new();
        state.is_app_initialized = true;
        state.settings.language_code = Some("en-US".into());
        state.settings.accepted_tos = true;
        state.settings.custom_pin_hash = Some(PinHash::derive("123456", [0u8; 16]));
        state
    }

    fn with_wallet(mut state: SessionState) -> SessionState {
        let meta = WalletMeta::new(
            "Savings",
            NetworkId::MAINNET,
            WalletScheme::Cip1852,
            false,
            b"xpub",
        );
        state.wallets.insert(meta.id.clone(), meta);
        state
    }

    #[test]
    fn uninitialized_resolves_to_splash() {
        let state = SessionState::new();
        assert_eq!(resolve(&state, &config()), Mode::Splash);
    }

    #[test]
    fn splash_outranks_maintenance() {
        let mut state = SessionState::new();
        state.is_maintenance = true;
        assert_eq!(resolve(&state, &config()), Mode::Splash);
    }

    #[test]
    fn maintenance_outranks_first_run() {
        // A state matching both the Maintenance and FirstRun predicates
        // must resolve to Maintenance.
        let mut state = SessionState::new();
        state.is_app_initialized = true;
        state.is_maintenance = true;
        assert_eq!(resolve(&state, &config()), Mode::Maintenance);
    }

    #[test]
    fn maintenance_suspends_an_authenticated_session() {
        let mut state = with_wallet(onboarded_state());
        state.is_authenticated = true;
        state.is_maintenance = true;
        assert_eq!(resolve(&state, &config()), Mode::Maintenance);

        state.is_maintenance = false;
        assert_eq!(resolve(&state, &config()), Mode::Unlocked);
    }

    #[test]
    fn first_run_steps_in_order() {
        let mut state = SessionState::new();
        state.is_app_initialized = true;
        assert_eq!(
            resolve(&state, &config()),
            Mode::FirstRun(FirstRunStep::LanguagePick)
        );

        state.settings.language_code = Some("ja-JP".into());
        assert_eq!(
            resolve(&state, &config()),
            Mode::FirstRun(FirstRunStep::TermsOfService)
        );

        state.settings.accepted_tos = true;
        assert_eq!(
            resolve(&state, &config()),
            Mode::FirstRun(FirstRunStep::UnlockSetup)
        );

        state.settings.is_system_auth_enabled = true;
        assert_ne!(
            resolve(&state, &config()),
            Mode::FirstRun(FirstRunStep::UnlockSetup)
        );
    }

    #[test]
    fn locked_sub_mode_follows_the_unlock_method() {
        let mut state = with_wallet(onboarded_state());
        assert_eq!(
            resolve(&state, &config()),
            Mode::Locked(UnlockScreen::PinUnlock)
        );

        state.settings.custom_pin_hash = None;
        state.settings.is_system_auth_enabled = true;
        assert_eq!(
            resolve(&state, &config()),
            Mode::Locked(UnlockScreen::BiometricUnlock)
        );
    }

    #[test]
    fn no_wallets_resolves_to_unlocked_with_creation_route() {
        // Rule 5 requires a non-empty inventory; a fully onboarded user with
        // no wallets lands in Unlocked, whose initial route is creation.
        let state = onboarded_state();
        assert_eq!(resolve(&state, &config()), Mode::Unlocked);
        assert_eq!(unlocked_initial_route(&state), UnlockedRoute::WalletCreation);
    }

    #[test]
    fn unlocked_defaults_to_the_wallet_list() {
        let mut state = with_wallet(onboarded_state());
        state.is_authenticated = true;
        assert_eq!(resolve(&state, &config()), Mode::Unlocked);
        assert_eq!(unlocked_initial_route(&state), UnlockedRoute::WalletList);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn dev_index_sits_between_first_run_and_lock() {
        let dev_config = AppConfig {
            start_with_dev_index: true,
        };

        // Overrides the lock screen...
        let state = with_wallet(onboarded_state());
        assert_eq!(resolve(&state, &dev_config), Mode::DevIndex);

        // ...but never an incomplete first run.
        let mut fresh = SessionState::new();
        fresh.is_app_initialized = true;
        assert_eq!(
            resolve(&fresh, &dev_config),
            Mode::FirstRun(FirstRunStep::LanguagePick)
        );
    }
}
