//! In-memory support ticket registry

use chrono::Utc;

use adeck_core::prelude::*;
use adeck_core::{Ticket, TicketCategory, TicketReply, TicketStatus};

/// Ordered collection of support tickets.
///
/// Each ticket exclusively owns its reply thread; replies are appended
/// through the registry so status transitions stay in one place.
#[derive(Debug, Default)]
pub struct TicketRegistry {
    tickets: Vec<Ticket>,
}

impl TicketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// All tickets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tickets visible to a viewer, in insertion order.
    ///
    /// Admins see every ticket; a regular user sees only their own; an
    /// anonymous viewer sees none.
    pub fn visible_to(&self, user_id: Option<&str>, is_admin: bool) -> Vec<&Ticket> {
        if is_admin {
            return self.tickets.iter().collect();
        }
        match user_id {
            Some(uid) => self.tickets.iter().filter(|t| t.user_id == uid).collect(),
            None => Vec::new(),
        }
    }

    /// Open a new ticket for a user. The subject is required.
    pub fn open(
        &mut self,
        user_id: impl Into<String>,
        subject: impl Into<String>,
        category: TicketCategory,
    ) -> Result<&Ticket> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return Err(Error::invalid_ticket("subject is required"));
        }
        let id = self.fresh_id();
        info!("Opened ticket {} ({})", id, category);
        let idx = self.tickets.len();
        self.tickets
            .push(Ticket::new(id, user_id.into(), subject, category));
        Ok(&self.tickets[idx])
    }

    /// Append a reply to a ticket's thread.
    ///
    /// Bumps `last_update`, and the first admin-authored reply moves an
    /// `Open` ticket to `Responded`. Closed tickets reject replies.
    pub fn reply(
        &mut self,
        ticket_id: &str,
        user_id: impl Into<String>,
        message: impl Into<String>,
        is_admin: bool,
    ) -> Result<&TicketReply> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(Error::invalid_ticket("reply message is required"));
        }
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or_else(|| Error::ticket_not_found(ticket_id))?;
        if ticket.is_closed() {
            return Err(Error::TicketClosed {
                id: ticket.id.clone(),
            });
        }

        let now = Utc::now();
        let reply = TicketReply {
            id: format!("{}-r{}", ticket.id, ticket.replies.len() + 1),
            ticket_id: ticket.id.clone(),
            user_id: user_id.into(),
            message,
            is_admin,
            created_at: now,
        };
        let idx = ticket.replies.len();
        ticket.replies.push(reply);
        ticket.last_update = now;
        if is_admin && ticket.status == TicketStatus::Open {
            ticket.status = TicketStatus::Responded;
        }
        Ok(&ticket.replies[idx])
    }

    /// Close a ticket. Closing is terminal.
    pub fn close(&mut self, ticket_id: &str) -> Result<()> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or_else(|| Error::ticket_not_found(ticket_id))?;
        if ticket.is_closed() {
            return Err(Error::TicketClosed {
                id: ticket.id.clone(),
            });
        }
        ticket.status = TicketStatus::Closed;
        ticket.last_update = Utc::now();
        info!("Closed ticket {}", ticket.id);
        Ok(())
    }

    /// Next id in the `T<n>` sequence, one past the highest seeded number
    fn fresh_id(&self) -> String {
        let max = self
            .tickets
            .iter()
            .filter_map(|t| t.id.strip_prefix('T'))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("T{}", max + 1)
    }
}
