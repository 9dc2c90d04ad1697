use crate::model::user::SessionDto;

/// Shared sign in state, provided as a `Signal<AuthState>` context by the app root.
///
/// The header, the sign in modal, and sign out all write to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<SessionDto>,
    /// Whether the initial session lookup has answered
    pub fetched: bool,
}

impl AuthState {
    pub fn signed_in(&mut self, session: SessionDto) {
        self.session = Some(session);
        self.fetched = true;
    }

    pub fn signed_out(&mut self) {
        self.session = None;
        self.fetched = true;
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin)
    }
}
