//! Root session state machine.
//!
//! DESIGN
//! ======
//! `Loading -> {Unauthenticated(Login|Register), Authenticated}`. The state is
//! held in an `RwSignal<AuthState>` provided via context; pages call the
//! transition methods instead of poking fields.
//!
//! Verification results arrive asynchronously. Each verification holds a
//! `VerifyTicket` stamped with the current generation; `sign_in`/`sign_out`
//! bump the generation so a late result cannot resurrect or clobber a newer
//! session. Only one verification may be in flight at a time.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Which unauthenticated screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

/// Top-level view phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Startup verification has not resolved yet.
    #[default]
    Loading,
    Unauthenticated(AuthView),
    Authenticated,
}

/// Permission to apply one verification result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyTicket {
    generation: u64,
}

/// What `finish_verify` did with a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyApplied {
    SignedIn,
    /// Session rejected; the caller must drop the persisted token.
    SignedOut,
    /// Result belonged to an earlier session and was discarded.
    Stale,
}

/// Current user plus view phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: Phase,
    /// Cached profile. Never authoritative; re-verify on doubt.
    pub user: Option<User>,
    /// A verification call is outstanding.
    pub verifying: bool,
    pub(crate) generation: u64,
}

impl AuthState {
    /// Resolve startup given whether a token is persisted.
    ///
    /// Returns a ticket when a verification call should be issued.
    pub fn start(&mut self, has_token: bool) -> Option<VerifyTicket> {
        if !has_token {
            self.phase = Phase::Unauthenticated(AuthView::Login);
            return None;
        }
        self.phase = Phase::Loading;
        self.begin_verify()
    }

    /// Claim the verification slot. `None` while another call is in flight.
    pub fn begin_verify(&mut self) -> Option<VerifyTicket> {
        if self.verifying {
            return None;
        }
        self.verifying = true;
        Some(VerifyTicket { generation: self.generation })
    }

    /// Apply a verification outcome (`None` = rejected or failed).
    pub fn finish_verify(&mut self, ticket: VerifyTicket, user: Option<User>) -> VerifyApplied {
        if ticket.generation != self.generation {
            return VerifyApplied::Stale;
        }
        self.verifying = false;
        match user {
            Some(user) => {
                self.user = Some(user);
                self.phase = Phase::Authenticated;
                VerifyApplied::SignedIn
            }
            None => {
                self.user = None;
                self.phase = Phase::Unauthenticated(AuthView::Login);
                VerifyApplied::SignedOut
            }
        }
    }

    /// Enter the dashboard after a successful login or registration.
    pub fn sign_in(&mut self, user: User) {
        self.invalidate_pending();
        self.user = Some(user);
        self.phase = Phase::Authenticated;
    }

    /// Drop the user and return to Login.
    pub fn sign_out(&mut self) {
        self.invalidate_pending();
        self.user = None;
        self.phase = Phase::Unauthenticated(AuthView::Login);
    }

    pub fn show_register(&mut self) {
        if matches!(self.phase, Phase::Unauthenticated(_)) {
            self.phase = Phase::Unauthenticated(AuthView::Register);
        }
    }

    pub fn show_login(&mut self) {
        if matches!(self.phase, Phase::Unauthenticated(_)) {
            self.phase = Phase::Unauthenticated(AuthView::Login);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == Phase::Authenticated
    }

    fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.verifying = false;
    }
}
