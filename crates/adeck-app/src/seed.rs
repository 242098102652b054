//! Seed data for a fresh process
//!
//! Every registry starts from these records; nothing is loaded from disk.

use chrono::Utc;

use adeck_core::{
    Partner, Role, Server, Ticket, TicketCategory, TicketReply, TicketStatus, User,
};

/// Initial server directory
pub fn seed_servers() -> Vec<Server> {
    vec![
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
    ]
}

/// Initial account directory: one admin, one regular user
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("u1", "Major Admin", "teascblg@gmail.com", Role::Admin),
        User::new("u2", "Case", "case@sprawl.net", Role::User),
    ]
}

/// Initial partner banners
pub fn seed_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "p1".to_string(),
            name: "Vortex Hosting".to_string(),
            image_url: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=400&h=150&fit=crop"
                .to_string(),
            link: "#".to_string(),
        },
        Partner {
            id: "p2".to_string(),
            name: "HyperX Labs".to_string(),
            image_url: "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=400&h=150&fit=crop"
                .to_string(),
            link: "#".to_string(),
        },
    ]
}

/// Initial tickets. T1 already carries its two-message thread and has been
/// responded to; T2 belongs to a since-removed account and is still open.
pub fn seed_tickets() -> Vec<Ticket> {
    let now = Utc::now();

    let mut vote_ticket = Ticket::new(
        "T1",
        "u2",
        "Server Vote not counting",
        TicketCategory::Technical,
    );
    vote_ticket.replies = vec![
        TicketReply {
            id: "T1-r1".to_string(),
            ticket_id: "T1".to_string(),
            user_id: "u2".to_string(),
            message: "Hello support team, I've voted for the server Cyber Arena multiple times \
                      today but the count is still stuck at 1240. Can you please investigate \
                      this anomaly?"
                .to_string(),
            is_admin: false,
            created_at: now,
        },
        TicketReply {
            id: "T1-r2".to_string(),
            ticket_id: "T1".to_string(),
            user_id: "u1".to_string(),
            message: "Greetings Citizen. We have detected a synchronization lag in our neural \
                      grid. Your vote has been logged and will appear in the next cycle \
                      (approx. 15 minutes). Thank you for your patience."
                .to_string(),
            is_admin: true,
            created_at: now,
        },
    ];
    vote_ticket.status = TicketStatus::Responded;

    let abuse_ticket = Ticket::new(
        "T2",
        "u3",
        "Inappropriate player behavior",
        TicketCategory::Abuse,
    );

    vec![vote_ticket, abuse_ticket]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_servers_match_directory_listing() {
        let servers = seed_servers();
        assert_eq!(servers.len(), 3);
        assert_eq!(servers[0].name, "CYBERNETIC ARENA | 128T | EU");
        assert_eq!(servers[0].votes, 1240);
        assert!(servers.iter().all(|s| s.players <= s.max_players));
    }

    #[test]
    fn test_seed_users_contain_one_admin() {
        let users = seed_users();
        assert_eq!(users.iter().filter(|u| u.is_admin()).count(), 1);
        assert_eq!(users[0].email, "teascblg@gmail.com");
    }

    #[test]
    fn test_seed_ticket_thread_is_owned_data() {
        let tickets = seed_tickets();
        assert_eq!(tickets[0].status, TicketStatus::Responded);
        assert_eq!(tickets[0].replies.len(), 2);
        assert!(tickets[0].replies[1].is_admin);
        assert!(tickets[0].replies.iter().all(|r| r.ticket_id == "T1"));
        // T2's owner is a former account; the ticket survives the owner
        assert_eq!(tickets[1].user_id, "u3");
    }
}
