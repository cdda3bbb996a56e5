use super::UserManager;

pub struct UserPrinter<'a> {
    manager: &'a UserManager,
}

impl<'a> UserPrinter<'a> {
    pub fn new(manager: &'a UserManager) -> Self {
        Self { manager }
    }

    /// User names in insertion order
    pub fn names(&self) -> Vec<&'a str> {
        self.manager.users().iter().map(|u| u.name.as_str()).collect()
    }

    /// One name per line
    pub fn print_names(&self) -> String {
        self.names()
            .iter()
            .map(|name| format!("{}\n", name))
            .collect()
    }
}
