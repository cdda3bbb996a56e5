//! Component families, keyed factories and step-wise builders.
//!
//! Every capability is a contract (a trait) with interchangeable variants.
//! A [`Registry`] maps runtime keys such as `"Light"`, `"Gaming"` or
//! `"ProcessorA"` to the factory or builder that produces those variants.
//!
//! # Example
//!
//! ```
//! use kitbox::kit::{ContractId, Operation, Registry};
//!
//! # fn main() -> Result<(), kitbox::KitError> {
//! let registry = Registry::with_defaults();
//!
//! let product = registry.create_family("Dark")?;
//! let output = product.invoke(ContractId::Button, Operation::Render, &[])?;
//! assert_eq!(output, "Rendering a dark button.");
//!
//! assert!(registry.create_family("Neon").is_err());
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod builder;
pub mod character;
pub mod component;
pub mod contract_id;
pub mod family_key;
pub mod operation;
pub mod payment;
pub mod registry;
pub mod shape;
pub mod ui;
pub mod user;

pub use builder::{BuildState, BuildStep, Computer, ComputerBuilder, Director};
pub use component::Component;
pub use contract_id::ContractId;
pub use family_key::FamilyKey;
pub use operation::Operation;
pub use registry::{global, install_global, Registration, RegistrationKind, Registry, Resolved};
pub use ui::{FamilyFactory, Product};
