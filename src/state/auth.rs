#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::types::User;

/// Authentication state mirrored from the external auth provider.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// The operations this crate needs from the auth provider.
pub trait Session {
    fn logout(&self);
}

/// Context handle pairing the mirrored auth state with the provider's logout.
///
/// The embedding application builds one with its own logout callback and
/// provides it via `provide_context`.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    pub state: RwSignal<AuthState>,
    logout: Callback<()>,
}

impl SessionHandle {
    pub fn new(state: RwSignal<AuthState>, logout: Callback<()>) -> Self {
        Self { state, logout }
    }

    /// Session with no auth provider behind it: logout only clears the
    /// mirrored user.
    pub fn local(state: RwSignal<AuthState>) -> Self {
        let logout = Callback::new(move |()| state.update(|a| a.user = None));
        Self::new(state, logout)
    }
}

impl Session for SessionHandle {
    fn logout(&self) {
        self.logout.run(());
    }
}

/// Log out through the provider, then navigate to `redirect`.
///
/// Logout always runs exactly once and strictly before navigation.
pub fn logout_and_redirect<S, N>(session: &S, redirect: &str, navigate: N)
where
    S: Session + ?Sized,
    N: FnOnce(&str),
{
    session.logout();
    navigate(redirect);
}
