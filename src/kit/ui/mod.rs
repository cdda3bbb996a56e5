//! Themed UI component families
//!
//! A family factory produces one variant per UI contract. Every variant in a
//! [`Product`] carries the same family tag; a light button is never paired with
//! a dark checkbox.

use crate::error::KitError;
use crate::kit::{Component, ContractId, FamilyKey, Operation};
use serde_json::Value;
use tracing::debug;

/// Button contract
pub trait Button: Send + Sync {
    fn family(&self) -> FamilyKey;

    fn render(&self) -> String;
}

/// Checkbox contract
pub trait Checkbox: Send + Sync {
    fn family(&self) -> FamilyKey;

    fn render(&self) -> String;
}

/// Produces one coherent set of UI variants for a single family
pub trait FamilyFactory: Send + Sync {
    fn family(&self) -> FamilyKey;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

/// Contracts every family provides, in creation order
pub const FAMILY_CONTRACTS: [ContractId; 2] = [ContractId::Button, ContractId::Checkbox];

/// One variant per family contract, all drawn from the same family
pub struct Product {
    family: FamilyKey,
    components: Vec<Component>,
}

impl Product {
    /// Invokes each creation method in [`FAMILY_CONTRACTS`] order and checks
    /// that every variant belongs to the factory's family.
    pub fn assemble(factory: &dyn FamilyFactory) -> Result<Self, KitError> {
        let family = factory.family();
        let components = vec![
            Component::Button(factory.create_button()),
            Component::Checkbox(factory.create_checkbox()),
        ];

        for component in &components {
            if let Some(found) = component.family() {
                if found != family {
                    return Err(KitError::MixedFamily {
                        expected: family.to_string(),
                        found: found.to_string(),
                    });
                }
            }
        }

        debug!(family = %family, components = components.len(), "Assembled product");
        Ok(Self { family, components })
    }

    pub fn family(&self) -> &FamilyKey {
        &self.family
    }

    pub fn get(&self, contract: ContractId) -> Option<&Component> {
        self.components.iter().find(|c| c.contract() == contract)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn contracts(&self) -> Vec<ContractId> {
        self.components.iter().map(Component::contract).collect()
    }

    pub fn invoke(
        &self,
        contract: ContractId,
        operation: Operation,
        args: &[Value],
    ) -> Result<Value, KitError> {
        self.get(contract)
            .ok_or(KitError::MissingContract(contract))?
            .invoke(operation, args)
    }
}

pub mod dark;
pub mod light;

pub use dark::{DarkButton, DarkCheckbox, DarkUi};
pub use light::{LightButton, LightCheckbox, LightUi};
