//! Session/view controller
//!
//! Holds the current identity (if any) and the visible panel, and is the
//! single authority on panel transitions. The role guard lives here in
//! `navigate`, not in the presentation layer, so the invariant holds no
//! matter which caller requests the transition.

use adeck_core::prelude::*;
use adeck_core::{Panel, User};

use crate::auth::{Authenticator, Credentials};
use crate::registry::UserRegistry;

/// Process-local record of who is signed in and which panel is visible.
///
/// Initial state: anonymous, `Panel::List`.
#[derive(Debug, Default)]
pub struct Session {
    identity: Option<User>,
    panel: Panel,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(User::is_admin)
    }

    /// Sign in via the authenticator. On success the identity is set and
    /// the panel is left unchanged; on failure the session is untouched.
    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
        directory: &UserRegistry,
    ) -> Result<&User> {
        let user = authenticator.authenticate(credentials, directory)?;
        info!("Session identity set to '{}' ({})", user.name, user.role);
        Ok(self.identity.insert(user))
    }

    /// Clear the identity and return to the server grid. Always succeeds,
    /// including for an already-anonymous session.
    pub fn logout(&mut self) {
        if let Some(user) = self.identity.take() {
            info!("Session identity '{}' cleared", user.name);
        }
        self.panel = Panel::List;
    }

    /// Switch the visible panel, enforcing the role guard:
    /// `Admin` needs an admin identity, `Tickets` needs any identity,
    /// `List` is always reachable. A denied request leaves the panel
    /// unchanged.
    pub fn navigate(&mut self, panel: Panel) -> Result<()> {
        match panel {
            Panel::Admin if !self.is_admin() => {
                Err(Error::panel_denied(panel, "an admin identity"))
            }
            Panel::Tickets if !self.is_authenticated() => {
                Err(Error::panel_denied(panel, "a signed-in identity"))
            }
            _ => {
                self.panel = panel;
                Ok(())
            }
        }
    }
}
