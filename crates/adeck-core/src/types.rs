//! Domain types for the server directory, user base, partners, and tickets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level view of the dashboard. Exactly one panel is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// Public server grid with search and voting
    #[default]
    List,

    /// Admin back office (servers / users / tickets / partners)
    Admin,

    /// Support ticket terminal
    Tickets,
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Panel::List => write!(f, "list"),
            Panel::Admin => write!(f, "admin"),
            Panel::Tickets => write!(f, "tickets"),
        }
    }
}

/// Reachability of a game server as last reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    #[default]
    Online,
    Offline,
}

/// A listed game server
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub port: u16,
    /// Game tag shown on the card (e.g. "CS2", "Rust")
    pub game: String,
    pub map: String,
    pub players: u32,
    pub max_players: u32,
    pub votes: u64,
    pub status: ServerStatus,
    pub last_updated: DateTime<Utc>,
}

impl Server {
    /// Build a server record. `players` is clamped into `0..=max_players`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ip: impl Into<String>,
        port: u16,
        game: impl Into<String>,
        map: impl Into<String>,
        players: u32,
        max_players: u32,
        votes: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ip: ip.into(),
            port,
            game: game.into(),
            map: map.into(),
            players: players.min(max_players),
            max_players,
            votes,
            status: ServerStatus::Online,
            last_updated: Utc::now(),
        }
    }

    /// `ip:port` endpoint string shown in the admin table
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn is_online(&self) -> bool {
        self.status == ServerStatus::Online
    }
}

/// Access level of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A registered account. Email doubles as the login key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Optional avatar reference
    #[serde(default)]
    pub image: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub last_voted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            image: None,
            role,
            last_voted_at: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A partner banner shown in the footer strip
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub link: String,
}

/// Ticket classification, as offered by the new-ticket form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TicketCategory {
    #[default]
    Technical,
    Billing,
    Abuse,
    General,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 4] = [
        TicketCategory::Technical,
        TicketCategory::Billing,
        TicketCategory::Abuse,
        TicketCategory::General,
    ];

    /// Cycle to the next category (wraps). Used by the form selector.
    pub fn next(self) -> Self {
        match self {
            TicketCategory::Technical => TicketCategory::Billing,
            TicketCategory::Billing => TicketCategory::Abuse,
            TicketCategory::Abuse => TicketCategory::General,
            TicketCategory::General => TicketCategory::Technical,
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketCategory::Technical => write!(f, "Technical"),
            TicketCategory::Billing => write!(f, "Billing"),
            TicketCategory::Abuse => write!(f, "Abuse"),
            TicketCategory::General => write!(f, "General"),
        }
    }
}

/// Lifecycle state of a ticket: Open -> Responded -> Closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TicketStatus {
    #[default]
    Open,
    Responded,
    Closed,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "Open"),
            TicketStatus::Responded => write!(f, "Responded"),
            TicketStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// A single message in a ticket conversation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TicketReply {
    pub id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub message: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// A support ticket. The ticket exclusively owns its ordered reply thread.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ticket {
    pub id: String,
    /// Owning user. May reference a since-deleted account.
    pub user_id: String,
    pub subject: String,
    pub category: TicketCategory,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<TicketReply>,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        subject: impl Into<String>,
        category: TicketCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            subject: subject.into(),
            category,
            status: TicketStatus::Open,
            created_at: now,
            last_update: now,
            replies: Vec::new(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status == TicketStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_new_clamps_players_to_capacity() {
        let server = Server::new("1", "TEST", "10.0.0.1", 27015, "CS2", "de_dust2", 64, 32, 0);
        assert_eq!(server.players, 32);
        assert_eq!(server.max_players, 32);
    }

    #[test]
    fn test_server_endpoint() {
        let server = Server::new("1", "TEST", "10.0.0.1", 27015, "CS2", "de_dust2", 4, 32, 0);
        assert_eq!(server.endpoint(), "10.0.0.1:27015");
    }

    #[test]
    fn test_ticket_category_cycle_wraps() {
        let mut category = TicketCategory::Technical;
        for _ in 0..TicketCategory::ALL.len() {
            category = category.next();
        }
        assert_eq!(category, TicketCategory::Technical);
    }

    #[test]
    fn test_ticket_starts_open_with_empty_thread() {
        let ticket = Ticket::new("T9", "u2", "Cannot connect", TicketCategory::Technical);
        assert_eq!(ticket.status, TicketStatus::Open);
        assert!(ticket.replies.is_empty());
        assert_eq!(ticket.created_at, ticket.last_update);
    }

    #[test]
    fn test_panel_display() {
        assert_eq!(Panel::List.to_string(), "list");
        assert_eq!(Panel::Admin.to_string(), "admin");
        assert_eq!(Panel::Tickets.to_string(), "tickets");
    }

    #[test]
    fn test_role_default_is_user() {
        assert_eq!(Role::default(), Role::User);
        assert!(!User::new("u9", "Case", "case@sprawl.net", Role::default()).is_admin());
    }
}
