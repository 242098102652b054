//! Authentication seam
//!
//! The real deployment authenticates against an external identity service;
//! here the boundary is the [`Authenticator`] trait and the shipped
//! implementation is a static stub driven by the `[auth]` config section.

use adeck_core::prelude::*;
use adeck_core::User;

use crate::registry::UserRegistry;

/// Login form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
        }
    }
}

/// Resolves credentials to an account in the directory.
///
/// Implementations return the matched record on success and
/// [`Error::AuthFailed`] otherwise; no further failure detail is exposed
/// to callers.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials, directory: &UserRegistry) -> Result<User>;
}

/// Stub authenticator with a single static admin credential pair.
///
/// Matches the observed login contract: the configured admin email with the
/// configured secret resolves to the admin record, and any other email
/// found in the directory resolves to its record with the secret ignored.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    admin_email: String,
    admin_secret: String,
}

impl StaticAuthenticator {
    pub fn new(admin_email: impl Into<String>, admin_secret: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_secret: admin_secret.into(),
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials, directory: &UserRegistry) -> Result<User> {
        if credentials.email == self.admin_email && credentials.secret == self.admin_secret {
            if let Some(user) = directory.find_by_email(&self.admin_email) {
                info!("Authenticated '{}' via admin credentials", user.email);
                return Ok(user.clone());
            }
        }

        // Secondary path: any known email signs in as that account. The
        // secret is not checked here -- this stub stands in for an external
        // service, not a password store.
        if credentials.email != self.admin_email {
            if let Some(user) = directory.find_by_email(&credentials.email) {
                info!("Authenticated '{}' via directory lookup", user.email);
                return Ok(user.clone());
            }
        }

        warn!("Authentication failed for '{}'", credentials.email);
        Err(Error::AuthFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adeck_core::Role;

    fn directory() -> UserRegistry {
        UserRegistry::with_users(vec![
            User::new("u1", "Major Admin", "teascblg@gmail.com", Role::Admin),
            User::new("u2", "Case", "case@sprawl.net", Role::User),
        ])
    }

    fn authenticator() -> StaticAuthenticator {
        StaticAuthenticator::new("teascblg@gmail.com", "alex123")
    }

    #[test]
    fn test_admin_pair_resolves_admin_record() {
        let user = authenticator()
            .authenticate(
                &Credentials::new("teascblg@gmail.com", "alex123"),
                &directory(),
            )
            .unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
    }

    #[test]
    fn test_admin_email_with_wrong_secret_fails() {
        let err = authenticator()
            .authenticate(
                &Credentials::new("teascblg@gmail.com", "wrong"),
                &directory(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::AuthFailed));
    }

    #[test]
    fn test_known_email_signs_in_without_secret_check() {
        let user = authenticator()
            .authenticate(&Credentials::new("case@sprawl.net", ""), &directory())
            .unwrap();
        assert_eq!(user.id, "u2");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_unknown_email_fails() {
        let err = authenticator()
            .authenticate(&Credentials::new("nobody@x.com", "alex123"), &directory())
            .unwrap_err();
        assert!(matches!(err, Error::AuthFailed));
    }
}
