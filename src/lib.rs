//! kitbox - component families, keyed factories and step-wise builders
//!
//! This library resolves runtime keys to interchangeable implementations of a
//! small set of contracts. Families of UI components are created together so
//! their variants always match, computers are assembled step by step under a
//! fixed director sequence, and payment processors, characters, shapes and
//! renderers are looked up by key instead of being hard-wired. Carts total
//! their own items, and user records are kept apart from lookup and listing.
//!
//! # Core Concepts
//!
//! - **Contract**: a trait naming the operations a capability requires
//! - **Family**: one variant per contract, designed to be used together
//! - **Registry**: data-driven table mapping keys to factories and builder
//!   constructors; extension means registering, never editing lookup code
//! - **Director**: drives any builder through the same ordered steps
//!
//! # Example Usage
//!
//! ```
//! use kitbox::kit::builder::Director;
//! use kitbox::Registry;
//!
//! # fn main() -> Result<(), kitbox::KitError> {
//! let registry = Registry::with_defaults();
//!
//! let mut builder = registry.create_builder("Gaming")?;
//! let computer = Director::default().construct(builder.as_mut());
//! assert_eq!(computer.gpu, "NVIDIA RTX 3080");
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`kit`]: contracts, variants, builders and the registry
//! - [`progress`]: construction observers
//! - [`config`]: environment configuration and builder profiles
//! - [`cli`]: command-line parsing, handlers and output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod kit;
pub mod progress;
pub mod util;

pub use config::{ConfigError, KitConfig, ProfileFile};
pub use error::KitError;
pub use kit::{Component, ContractId, FamilyKey, Operation, Product, Registry};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
