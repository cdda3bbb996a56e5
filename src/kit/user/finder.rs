use super::{User, UserManager};

pub struct UserFinder<'a> {
    manager: &'a UserManager,
}

impl<'a> UserFinder<'a> {
    pub fn new(manager: &'a UserManager) -> Self {
        Self { manager }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'a User> {
        self.manager.users().iter().find(|u| u.name == name)
    }
}
