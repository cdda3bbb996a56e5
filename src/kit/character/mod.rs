//! Game characters created through keyed factory methods
//!
//! Each factory decides which concrete character it returns; callers only see
//! the [`Character`] contract.

pub trait Character: Send + Sync {
    fn name(&self) -> &str;

    fn attack(&self) -> String;
}

pub trait CharacterFactory: Send + Sync {
    /// Class name of the characters this factory creates (e.g., "Warrior")
    fn kind(&self) -> &'static str;

    fn create_character(&self, name: &str) -> Box<dyn Character>;
}

pub mod mage;
pub mod warrior;

pub use mage::{Mage, MageFactory};
pub use warrior::{Warrior, WarriorFactory};
