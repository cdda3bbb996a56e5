//! Error types surfaced by the registry, factories and component dispatch.
//!
//! Every failure is reported to the caller as-is. Nothing here retries or
//! substitutes a default; the CLI layer decides whether to log, abort or prompt.

use crate::kit::{ContractId, Operation};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KitError {
    /// No family factory is registered under this key
    #[error("Unknown family: {0}")]
    UnknownFamily(String),

    /// No registration (of the requested kind) exists for this key
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// The component's contract does not declare the requested operation
    #[error("Operation '{operation}' is not supported by contract {contract}")]
    UnsupportedOperation {
        contract: ContractId,
        operation: Operation,
    },

    /// The product holds no component for this contract
    #[error("Product has no component for contract {0}")]
    MissingContract(ContractId),

    /// A factory produced a component tagged with another family
    #[error("Family factory for '{expected}' produced a component of family '{found}'")]
    MixedFamily { expected: String, found: String },

    /// An argument was missing, of the wrong type, or out of range
    #[error("Invalid argument for {context}: {reason}")]
    InvalidArgument { context: String, reason: String },

    /// The process-wide registry was already set or read
    #[error("Global registry is already initialized")]
    AlreadyInitialized,
}

impl KitError {
    pub fn invalid_argument(context: impl Into<String>, reason: impl Into<String>) -> Self {
        KitError::InvalidArgument {
            context: context.into(),
            reason: reason.into(),
        }
    }
}
