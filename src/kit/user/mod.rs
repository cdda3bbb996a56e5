//! User records split by responsibility
//!
//! [`UserManager`] owns the records and is the only type that mutates them.
//! Lookup lives in [`UserFinder`] and listing in [`UserPrinter`]; both borrow
//! the manager read-only.

use crate::error::KitError;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

pub mod finder;
pub mod printer;

pub use finder::UserFinder;
pub use printer::UserPrinter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Parses `NAME=EMAIL`
impl FromStr for User {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, email) = s
            .split_once('=')
            .ok_or_else(|| KitError::invalid_argument(s, "expected NAME=EMAIL"))?;
        Ok(Self::new(name.trim(), email.trim()))
    }
}

/// Insertion-ordered user store; names are unique
#[derive(Debug, Clone, Default)]
pub struct UserManager {
    users: Vec<User>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) -> Result<(), KitError> {
        if user.name.is_empty() {
            return Err(KitError::invalid_argument("user", "name must not be empty"));
        }
        if self.position(&user.name).is_some() {
            return Err(KitError::invalid_argument(
                user.name,
                "a user with this name already exists",
            ));
        }
        debug!(user = %user.name, "Added user");
        self.users.push(user);
        Ok(())
    }

    /// Removes and returns the named user, if present
    pub fn delete_user(&mut self, name: &str) -> Option<User> {
        let index = self.position(name)?;
        debug!(user = name, "Deleted user");
        Some(self.users.remove(index))
    }

    pub fn update_user(&mut self, name: &str, new_name: &str) -> Result<(), KitError> {
        let index = self
            .position(name)
            .ok_or_else(|| KitError::UnknownKey(name.to_string()))?;
        if new_name.is_empty() {
            return Err(KitError::invalid_argument(name, "new name must not be empty"));
        }
        if name != new_name && self.position(new_name).is_some() {
            return Err(KitError::invalid_argument(
                new_name,
                "a user with this name already exists",
            ));
        }
        self.users[index].name = new_name.to_string();
        debug!(from = name, to = new_name, "Renamed user");
        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|u| u.name == name)
    }
}
