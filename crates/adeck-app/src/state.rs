//! Application state (Model in TEA pattern)

use adeck_core::prelude::*;
use adeck_core::{Panel, Server, Ticket, TicketCategory};

use crate::auth::StaticAuthenticator;
use crate::config::Settings;
use crate::registry::{PartnerRegistry, ServerRegistry, TicketRegistry, UserRegistry};
use crate::seed;
use crate::session::Session;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Where key input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Panel navigation and commands
    #[default]
    Normal,

    /// Typing into the server grid search box
    Search,

    /// Typing into the partner entry form (admin panel)
    PartnerForm,

    /// Typing into the new ticket form
    TicketForm,

    /// Composing a reply to the selected ticket
    Reply,

    /// Quit confirmation dialog
    ConfirmQuit,
}

/// Active tab within the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Servers,
    Users,
    Tickets,
    Partners,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Servers,
        AdminTab::Users,
        AdminTab::Tickets,
        AdminTab::Partners,
    ];

    pub fn next(self) -> Self {
        match self {
            AdminTab::Servers => AdminTab::Users,
            AdminTab::Users => AdminTab::Tickets,
            AdminTab::Tickets => AdminTab::Partners,
            AdminTab::Partners => AdminTab::Servers,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AdminTab::Servers => AdminTab::Partners,
            AdminTab::Users => AdminTab::Servers,
            AdminTab::Tickets => AdminTab::Users,
            AdminTab::Partners => AdminTab::Tickets,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AdminTab::Servers => "Server Matrix",
            AdminTab::Users => "Access Protocols",
            AdminTab::Tickets => "Support Nodes",
            AdminTab::Partners => "Partners",
        }
    }
}

/// Field focus within the partner entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartnerField {
    #[default]
    Name,
    Image,
    Link,
}

impl PartnerField {
    pub fn next(self) -> Self {
        match self {
            PartnerField::Name => PartnerField::Image,
            PartnerField::Image => PartnerField::Link,
            PartnerField::Link => PartnerField::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PartnerField::Name => "Partner Name",
            PartnerField::Image => "Banner URL (Image)",
            PartnerField::Link => "Redirect Link",
        }
    }
}

/// Buffers for the partner entry form
#[derive(Debug, Clone, Default)]
pub struct PartnerFormState {
    pub name: String,
    pub image_url: String,
    pub link: String,
    pub focused: PartnerField,
}

impl PartnerFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the currently focused field
    pub fn focused_text(&self) -> &str {
        match self.focused {
            PartnerField::Name => &self.name,
            PartnerField::Image => &self.image_url,
            PartnerField::Link => &self.link,
        }
    }

    pub fn set_focused_text(&mut self, text: String) {
        match self.focused {
            PartnerField::Name => self.name = text,
            PartnerField::Image => self.image_url = text,
            PartnerField::Link => self.link = text,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Buffers for the new ticket form
#[derive(Debug, Clone, Default)]
pub struct TicketFormState {
    pub subject: String,
    pub category: TicketCategory,
}

/// View state for the server grid panel
#[derive(Debug, Clone, Copy, Default)]
pub struct ListViewState {
    /// Index into the filtered server list
    pub selected: usize,
}

/// View state for the tickets panel
#[derive(Debug, Clone, Default)]
pub struct TicketsViewState {
    /// Index into the visible ticket list
    pub selected: usize,

    /// Reply composer buffer
    pub reply_buffer: String,

    /// New-ticket form, present while it is open
    pub form: Option<TicketFormState>,
}

/// View state for the admin panel
#[derive(Debug, Clone, Default)]
pub struct AdminViewState {
    pub tab: AdminTab,

    /// Index into the active tab's rows
    pub selected: usize,

    /// Partner entry form buffers (Partners tab)
    pub partner_form: PartnerFormState,
}

impl AdminViewState {
    /// Switch to the next tab, resetting the row selection
    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.selected = 0;
    }

    /// Switch to the previous tab, resetting the row selection
    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
        self.selected = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Session/view controller: identity + visible panel
    pub session: Session,

    /// Server directory
    pub servers: ServerRegistry,

    /// Account directory
    pub users: UserRegistry,

    /// Partner banners
    pub partners: PartnerRegistry,

    /// Support tickets
    pub tickets: TicketRegistry,

    /// Application settings from config file
    pub settings: Settings,

    /// Auth collaborator (stubbed; driven by `settings.auth`)
    pub authenticator: StaticAuthenticator,

    /// Current application phase
    pub phase: AppPhase,

    /// Where key input is routed
    pub input_mode: InputMode,

    /// Server grid search query
    pub search_query: String,

    /// Server grid view state
    pub list_view: ListViewState,

    /// Tickets panel view state
    pub tickets_view: TicketsViewState,

    /// Admin panel view state
    pub admin_view: AdminViewState,

    /// Transient one-line notice shown in the status bar
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState, seeding every registry
    pub fn with_settings(settings: Settings) -> Self {
        let authenticator = StaticAuthenticator::new(
            settings.auth.admin_email.clone(),
            settings.auth.admin_secret.clone(),
        );

        Self {
            session: Session::new(),
            servers: ServerRegistry::with_servers(seed::seed_servers()),
            users: UserRegistry::with_users(seed::seed_users()),
            partners: PartnerRegistry::with_partners(seed::seed_partners()),
            tickets: TicketRegistry::with_tickets(seed::seed_tickets()),
            settings,
            authenticator,
            phase: AppPhase::Running,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            list_view: ListViewState::default(),
            tickets_view: TicketsViewState::default(),
            admin_view: AdminViewState::default(),
            notice: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Visibility Helpers
    // ─────────────────────────────────────────────────────────

    /// Servers matching the current search query, in directory order
    pub fn visible_servers(&self) -> Vec<&Server> {
        self.servers.filter(&self.search_query)
    }

    /// Tickets the current identity may see
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        let user_id = self.session.identity().map(|u| u.id.as_str());
        self.tickets.visible_to(user_id, self.session.is_admin())
    }

    // ─────────────────────────────────────────────────────────
    // Selection Helpers
    // ─────────────────────────────────────────────────────────

    /// Number of selectable rows in the current panel/tab
    pub fn selection_len(&self) -> usize {
        match self.session.panel() {
            Panel::List => self.visible_servers().len(),
            Panel::Tickets => self.visible_tickets().len(),
            Panel::Admin => match self.admin_view.tab {
                AdminTab::Servers => self.servers.len(),
                AdminTab::Users => self.users.len(),
                AdminTab::Tickets => self.tickets.len(),
                AdminTab::Partners => self.partners.len(),
            },
        }
    }

    fn selection_mut(&mut self) -> &mut usize {
        match self.session.panel() {
            Panel::List => &mut self.list_view.selected,
            Panel::Tickets => &mut self.tickets_view.selected,
            Panel::Admin => &mut self.admin_view.selected,
        }
    }

    /// Select the next row (wraps)
    pub fn select_next(&mut self) {
        let len = self.selection_len();
        if len > 0 {
            let selected = self.selection_mut();
            *selected = (*selected + 1) % len;
        }
    }

    /// Select the previous row (wraps)
    pub fn select_prev(&mut self) {
        let len = self.selection_len();
        if len > 0 {
            let selected = self.selection_mut();
            *selected = if *selected == 0 { len - 1 } else { *selected - 1 };
        }
    }

    /// Pull the selection back into range after the row count changed
    pub fn clamp_selection(&mut self) {
        let len = self.selection_len();
        let selected = self.selection_mut();
        if len == 0 {
            *selected = 0;
        } else if *selected >= len {
            *selected = len - 1;
        }
    }

    /// Id of the server the cursor is on, if any
    pub fn selected_server_id(&self) -> Option<String> {
        match self.session.panel() {
            Panel::List => self
                .visible_servers()
                .get(self.list_view.selected)
                .map(|s| s.id.clone()),
            Panel::Admin if self.admin_view.tab == AdminTab::Servers => self
                .servers
                .iter()
                .nth(self.admin_view.selected)
                .map(|s| s.id.clone()),
            _ => None,
        }
    }

    /// Id of the user the cursor is on (admin Users tab)
    pub fn selected_user_id(&self) -> Option<String> {
        if self.session.panel() == Panel::Admin && self.admin_view.tab == AdminTab::Users {
            return self
                .users
                .iter()
                .nth(self.admin_view.selected)
                .map(|u| u.id.clone());
        }
        None
    }

    /// Id of the partner the cursor is on (admin Partners tab)
    pub fn selected_partner_id(&self) -> Option<String> {
        if self.session.panel() == Panel::Admin && self.admin_view.tab == AdminTab::Partners {
            return self
                .partners
                .iter()
                .nth(self.admin_view.selected)
                .map(|p| p.id.clone());
        }
        None
    }

    /// Id of the ticket the cursor is on, if any
    pub fn selected_ticket_id(&self) -> Option<String> {
        match self.session.panel() {
            Panel::Tickets => self
                .visible_tickets()
                .get(self.tickets_view.selected)
                .map(|t| t.id.clone()),
            Panel::Admin if self.admin_view.tab == AdminTab::Tickets => self
                .tickets
                .iter()
                .nth(self.admin_view.selected)
                .map(|t| t.id.clone()),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────

    /// Put a one-line notice in the status bar, replacing any previous one
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Surface a recoverable error on the notice line; anything else is
    /// only logged (nothing in the update loop should produce one).
    pub fn report(&mut self, err: &Error) {
        if err.is_recoverable() {
            warn!("{}", err);
            self.set_notice(err.to_string());
        } else {
            error!("Unexpected error in update loop: {:?}", err);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit Flow
    // ─────────────────────────────────────────────────────────

    /// Request application quit, possibly via the confirmation dialog
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            self.input_mode = InputMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Confirm quit (from the confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from the confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
