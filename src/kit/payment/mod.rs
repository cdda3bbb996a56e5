//! Payment processing behind an injected service
//!
//! Orders never construct a processor themselves. The service is chosen by
//! registry key and handed to [`Order::new`].

use crate::error::KitError;

pub trait PaymentService: Send + Sync {
    /// Human-readable processor name (e.g., "Processor A")
    fn processor(&self) -> &str;

    fn process_payment(&self, amount: f64) -> String;
}

/// Rejects amounts that are negative, NaN or infinite. Negative zero is
/// normalised to zero.
pub fn validate_amount(context: &str, amount: f64) -> Result<f64, KitError> {
    if !amount.is_finite() {
        return Err(KitError::invalid_argument(context, "amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(KitError::invalid_argument(context, "amount must not be negative"));
    }
    if amount == 0.0 {
        return Ok(0.0);
    }
    Ok(amount)
}

pub mod cart;
pub mod order;
pub mod processors;

pub use cart::{CartItem, ShoppingCart};
pub use order::{Order, Receipt};
pub use processors::{ProcessorA, ProcessorB};
