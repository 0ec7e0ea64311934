use std::cell::{Cell, RefCell};

use super::*;

struct CountingSession {
    logouts: Cell<u32>,
}

impl Session for CountingSession {
    fn logout(&self) {
        self.logouts.set(self.logouts.get() + 1);
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// logout_and_redirect
// =============================================================

#[test]
fn logout_runs_once_then_navigates_home() {
    let session = CountingSession { logouts: Cell::new(0) };
    let visited = RefCell::new(Vec::new());

    logout_and_redirect(&session, "/", |path| {
        // Logout must already have happened when navigation starts.
        assert_eq!(session.logouts.get(), 1);
        visited.borrow_mut().push(path.to_owned());
    });

    assert_eq!(session.logouts.get(), 1);
    assert_eq!(visited.into_inner(), vec!["/".to_owned()]);
}

#[test]
fn logout_uses_configured_redirect() {
    let session = CountingSession { logouts: Cell::new(0) };
    let mut target = None;

    logout_and_redirect(&session, "/goodbye", |path| target = Some(path.to_owned()));

    assert_eq!(target.as_deref(), Some("/goodbye"));
}

#[test]
fn session_handle_forwards_logout_to_callback() {
    let calls = RwSignal::new(0_u32);
    let state = RwSignal::new(AuthState::default());
    let handle = SessionHandle::new(state, Callback::new(move |()| calls.update(|n| *n += 1)));

    logout_and_redirect(&handle, "/", |_| {});

    assert_eq!(calls.get_untracked(), 1);
}

#[test]
fn local_session_logout_clears_user_and_navigates_once() {
    let state = RwSignal::new(AuthState {
        user: Some(User::default()),
        loading: false,
    });
    let handle = SessionHandle::local(state);
    let mut visited = Vec::new();

    logout_and_redirect(&handle, "/goodbye", |path| visited.push(path.to_owned()));

    assert!(state.get_untracked().user.is_none());
    assert_eq!(visited, vec!["/goodbye".to_owned()]);
}
