use super::{Character, CharacterFactory};

pub struct Warrior {
    name: String,
}

impl Warrior {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character for Warrior {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&self) -> String {
        format!("{} slashes with a sword!", self.name)
    }
}

pub struct WarriorFactory;

impl CharacterFactory for WarriorFactory {
    fn kind(&self) -> &'static str {
        "Warrior"
    }

    fn create_character(&self, name: &str) -> Box<dyn Character> {
        Box::new(Warrior::new(name))
    }
}
