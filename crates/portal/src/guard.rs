//! Route guard decisions.
//!
//! Every guarded page walks `Init -> Checking -> {Allowed, Redirected}` once
//! per load. The terminal states absorb any later event, so a guard can be
//! re-evaluated on every render without issuing a second redirect.

use crate::context::ApplicationContext;

pub const ROOT_PATH: &str = "/";

/// Where a guard sends a visitor it turns away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    Dashboard,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Init,
    Checking,
    Allowed,
    Redirected(Destination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardEvent {
    Check,
    Allow,
    Redirect(Destination),
}

impl GuardState {
    pub fn next(self, event: GuardEvent) -> GuardState {
        if self.is_terminal() {
            return self;
        }
        match event {
            GuardEvent::Check => GuardState::Checking,
            GuardEvent::Allow => GuardState::Allowed,
            GuardEvent::Redirect(destination) => GuardState::Redirected(destination),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GuardState::Allowed | GuardState::Redirected(_))
    }

    /// Still waiting; render a loading indicator.
    pub fn is_pending(&self) -> bool {
        !self.is_terminal()
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardState::Allowed)
    }

    pub fn redirect(&self) -> Option<Destination> {
        match self {
            GuardState::Redirected(destination) => Some(*destination),
            _ => None,
        }
    }
}

/// Decision for pages that need a logged-in visitor. Pure; safe to call on every render.
pub fn login_required(ctx: &ApplicationContext) -> GuardState {
    let event = if ctx.is_authenticated() {
        GuardEvent::Allow
    } else {
        GuardEvent::Redirect(Destination::Login)
    };
    GuardState::Init.next(event)
}

/// Whether the bootstrapper should move an authenticated visitor off `path`.
pub fn is_entry_path(path: &str) -> bool {
    path == ROOT_PATH || path == Destination::Login.path()
}
