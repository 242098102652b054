//! In-memory account directory

use adeck_core::prelude::*;
use adeck_core::User;

/// Ordered collection of registered accounts.
///
/// Doubles as the login directory: `find_by_email` is the lookup the
/// authenticator runs against. No create operation is exposed -- accounts
/// only enter through the seed.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// All accounts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Exact, case-sensitive email match
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Delete the account with the given id, returning the removed record
    pub fn remove(&mut self, id: &str) -> Result<User> {
        let pos = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| Error::user_not_found(id))?;
        let removed = self.users.remove(pos);
        info!("Removed user '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adeck_core::Role;

    fn seeded() -> UserRegistry {
        UserRegistry::with_users(vec![
            User::new("u1", "Major Admin", "teascblg@gmail.com", Role::Admin),
            User::new("u2", "Case", "case@sprawl.net", Role::User),
        ])
    }

    #[test]
    fn test_find_by_email_known() {
        let registry = seeded();
        let admin = registry.find_by_email("teascblg@gmail.com").unwrap();
        assert_eq!(admin.id, "u1");
        assert!(admin.is_admin());
    }

    #[test]
    fn test_find_by_email_unknown() {
        let registry = seeded();
        assert!(registry.find_by_email("nobody@x.com").is_none());
    }

    #[test]
    fn test_find_by_email_is_case_sensitive() {
        let registry = seeded();
        assert!(registry.find_by_email("TEASCBLG@GMAIL.COM").is_none());
    }

    #[test]
    fn test_remove_present() {
        let mut registry = seeded();
        let removed = registry.remove("u2").unwrap();
        assert_eq!(removed.name, "Case");
        assert_eq!(registry.len(), 1);
        assert!(registry.get("u2").is_none());
    }

    #[test]
    fn test_remove_missing_leaves_registry_unchanged() {
        let mut registry = seeded();
        let err = registry.remove("u9").unwrap_err();
        assert!(matches!(err, Error::UserNotFound { .. }));
        assert_eq!(registry.len(), 2);
    }
}
