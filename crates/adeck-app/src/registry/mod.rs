//! In-memory registries, one per entity kind
//!
//! Each registry owns an ordered `Vec` of records (insertion order is
//! display order) and exposes id-keyed operations. Lookups that miss and
//! writes that reference unknown ids return explicit errors instead of
//! silently doing nothing, so callers always learn what happened.

pub mod partners;
pub mod servers;
pub mod tickets;
pub mod users;

pub use partners::PartnerRegistry;
pub use servers::ServerRegistry;
pub use tickets::TicketRegistry;
pub use users::UserRegistry;
