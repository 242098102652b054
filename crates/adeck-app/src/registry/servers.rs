//! In-memory server directory

use chrono::Utc;

use adeck_core::prelude::*;
use adeck_core::Server;

/// Ordered collection of listed game servers.
///
/// Insertion order is display order. All lookups are by the record's
/// string id.
#[derive(Debug, Default)]
pub struct ServerRegistry {
    servers: Vec<Server>,
}

impl ServerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from seed records
    pub fn with_servers(servers: Vec<Server>) -> Self {
        Self { servers }
    }

    /// All servers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Server> {
        self.servers.iter()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// Servers whose name contains `query`, case-insensitive, in insertion
    /// order. An empty query returns every server unchanged.
    pub fn filter(&self, query: &str) -> Vec<&Server> {
        if query.is_empty() {
            return self.servers.iter().collect();
        }
        let needle = query.to_lowercase();
        self.servers
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Register a new server at the end of the directory
    pub fn add(&mut self, server: Server) -> Result<()> {
        if self.get(&server.id).is_some() {
            return Err(Error::DuplicateServer { id: server.id });
        }
        info!("Registered server '{}' ({})", server.name, server.id);
        self.servers.push(server);
        Ok(())
    }

    /// Delete the server with the given id, returning the removed record
    pub fn remove(&mut self, id: &str) -> Result<Server> {
        let pos = self
            .servers
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::server_not_found(id))?;
        let removed = self.servers.remove(pos);
        info!("Removed server '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }

    /// Record a vote for the server with the given id.
    ///
    /// Increments the stored count, refreshes `last_updated`, and returns
    /// the new total.
    pub fn vote(&mut self, id: &str) -> Result<u64> {
        let server = self
            .servers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::server_not_found(id))?;
        server.votes = server.votes.saturating_add(1);
        server.last_updated = Utc::now();
        debug!("Vote logged for '{}', total {}", server.id, server.votes);
        Ok(server.votes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ServerRegistry {
        ServerRegistry::with_servers(vec![
            Server::new(
                "1",
                "CYBERNETIC ARENA | 128T | EU",
                "192.168.1.100",
                27015,
                "CS2",
                "de_dust2",
                24,
                32,
                1240,
            ),
            Server::new(
                "2",
                "[US] NEON WASTELAND SURVIVAL",
                "45.132.89.2",
                28015,
                "Rust",
                "Procedural World",
                156,
                200,
                890,
            ),
            Server::new(
                "3",
                "GHOST SHELL RP | SEMI-SERIOUS",
                "185.12.3.44",
                30120,
                "FiveM",
                "Los Santos",
                62,
                128,
                750,
            ),
        ])
    }

    #[test]
    fn test_filter_empty_query_returns_all_in_order() {
        let registry = seeded();
        let all = registry.filter("");
        assert_eq!(all.len(), 3);
        let ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let registry = seeded();
        let lower = registry.filter("arena");
        let upper = registry.filter("ARENA");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, "1");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_preserves_order() {
        let registry = seeded();
        let hits = registry.filter("s");
        let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn test_remove_present_shrinks_by_one() {
        let mut registry = seeded();
        let removed = registry.remove("2").unwrap();
        assert_eq!(removed.name, "[US] NEON WASTELAND SURVIVAL");
        assert_eq!(registry.len(), 2);
        assert!(registry.get("2").is_none());
    }

    #[test]
    fn test_remove_missing_is_explicit_and_leaves_registry_unchanged() {
        let mut registry = seeded();
        let before: Vec<String> = registry.iter().map(|s| s.id.clone()).collect();
        let err = registry.remove("99").unwrap_err();
        assert!(matches!(err, Error::ServerNotFound { .. }));
        let after: Vec<String> = registry.iter().map(|s| s.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_vote_increments_stored_count() {
        let mut registry = seeded();
        let before = registry.get("1").unwrap().last_updated;
        assert_eq!(registry.vote("1").unwrap(), 1241);
        assert_eq!(registry.vote("1").unwrap(), 1242);
        let server = registry.get("1").unwrap();
        assert_eq!(server.votes, 1242);
        assert!(server.last_updated >= before);
    }

    #[test]
    fn test_vote_unknown_server() {
        let mut registry = seeded();
        assert!(matches!(
            registry.vote("nope"),
            Err(Error::ServerNotFound { .. })
        ));
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut registry = seeded();
        let dup = Server::new("1", "IMPOSTER", "1.2.3.4", 1, "CS2", "de_inferno", 0, 16, 0);
        assert!(matches!(
            registry.add(dup),
            Err(Error::DuplicateServer { .. })
        ));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut registry = seeded();
        let server = Server::new("4", "FRESH NODE", "10.0.0.9", 27016, "CS2", "de_mirage", 0, 10, 0);
        registry.add(server).unwrap();
        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }
}
