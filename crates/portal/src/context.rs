//! The application-wide session context.
//!
//! One [`ApplicationContext`] exists per page session and is owned by the root
//! of the UI. Everything else reads it and changes it only through
//! [`ContextAction`]s, so there is a single source of truth.

use crate::data::{LoginResponse, Member, Qualification};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationContext {
    /// `Some` iff the visitor counts as authenticated for routing.
    pub identity: Option<Member>,
    pub qualifications: Vec<Qualification>,
    pub subordinates: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextAction {
    Replace(ApplicationContext),
    Clear,
}

impl ApplicationContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// What the persisted identity claims. Never use this to authorize; the
    /// backend's admin check is the only authority.
    pub fn claims_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|member| member.admin)
    }

    pub fn apply(&mut self, action: ContextAction) {
        *self = match action {
            ContextAction::Replace(context) => context,
            ContextAction::Clear => Self::empty(),
        };
    }
}

impl From<LoginResponse> for ApplicationContext {
    fn from(response: LoginResponse) -> Self {
        Self {
            identity: Some(response.member),
            qualifications: response.qualifications,
            subordinates: response.subordinates,
        }
    }
}
