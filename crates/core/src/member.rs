// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Team member types: users and managers.
//!
//! Members form a closed set of two kinds. A [`User`] carries a free-form
//! role label; a [`Manager`] has its role pinned to [`MANAGER_ROLE`] and
//! can approve issues. The identity summary diverges per kind and must
//! stay that way: users render all four fields, managers a short form.

use serde::{Deserialize, Serialize};

use crate::event::{Action, Event};
use crate::issue::Issue;

/// Role label carried by every manager.
pub const MANAGER_ROLE: &str = "Manager";

/// A regular team member with a free-form role label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: u32,
    name: String,
    role: String,
    email: String,
}

impl User {
    /// Creates a new user. Id and name are fixed for the user's lifetime.
    pub fn new(id: u32, name: String, role: String, email: String) -> Self {
        User {
            id,
            name,
            role,
            email,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Overwrites the role label. Last write wins, no validation.
    pub fn set_role(&mut self, role: String) {
        self.role = role;
    }

    /// Overwrites the email. Last write wins, no validation.
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }
}

/// A team member whose role is fixed and who can approve issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    id: u32,
    name: String,
    email: String,
}

impl Manager {
    /// Creates a new manager. The role label is [`MANAGER_ROLE`] and
    /// cannot drift; there is no role field to mutate.
    pub fn new(id: u32, name: String, email: String) -> Self {
        Manager { id, name, email }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Overwrites the email. Last write wins, no validation.
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Records approval of an issue.
    ///
    /// Emits an approval event referencing this manager's name and the
    /// issue's title. Neither the issue nor the manager changes state.
    pub fn approve_issue(&self, issue: &Issue) -> Event {
        Event::new(Action::Approved, issue.issue_id(), issue.title().to_string())
            .with_values(None, Some(self.name.clone()))
    }
}

/// Closed set of member kinds tracked on a project team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    User(User),
    Manager(Manager),
}

impl Member {
    pub fn id(&self) -> u32 {
        match self {
            Member::User(u) => u.id(),
            Member::Manager(m) => m.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Member::User(u) => u.name(),
            Member::Manager(m) => m.name(),
        }
    }

    /// Role label; the pinned [`MANAGER_ROLE`] for managers.
    pub fn role(&self) -> &str {
        match self {
            Member::User(u) => u.role(),
            Member::Manager(_) => MANAGER_ROLE,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Member::User(u) => u.email(),
            Member::Manager(m) => m.email(),
        }
    }

    /// Overwrites the email on either kind.
    pub fn set_email(&mut self, email: String) {
        match self {
            Member::User(u) => u.set_email(email),
            Member::Manager(m) => m.set_email(email),
        }
    }

    /// Structured identity summary. The two kinds deliberately render
    /// different field sets.
    pub fn identity(&self) -> MemberIdentity {
        match self {
            Member::User(u) => MemberIdentity::User {
                id: u.id(),
                name: u.name().to_string(),
                role: u.role().to_string(),
                email: u.email().to_string(),
            },
            Member::Manager(m) => MemberIdentity::Manager {
                name: m.name().to_string(),
                email: m.email().to_string(),
            },
        }
    }
}

impl From<User> for Member {
    fn from(user: User) -> Self {
        Member::User(user)
    }
}

impl From<Manager> for Member {
    fn from(manager: Manager) -> Self {
        Member::Manager(manager)
    }
}

/// Per-kind identity summary of a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberIdentity {
    User {
        id: u32,
        name: String,
        role: String,
        email: String,
    },
    Manager {
        name: String,
        email: String,
    },
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod tests;
