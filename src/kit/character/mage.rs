use super::{Character, CharacterFactory};

pub struct Mage {
    name: String,
}

impl Mage {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character for Mage {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&self) -> String {
        format!("{} casts a fireball spell!", self.name)
    }
}

pub struct MageFactory;

impl CharacterFactory for MageFactory {
    fn kind(&self) -> &'static str {
        "Mage"
    }

    fn create_character(&self, name: &str) -> Box<dyn Character> {
        Box::new(Mage::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mage_attack() {
        let mage = MageFactory.create_character("Gandalf");
        assert_eq!(mage.attack(), "Gandalf casts a fireball spell!");
    }
}
