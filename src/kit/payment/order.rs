use super::{validate_amount, PaymentService, ShoppingCart};
use crate::error::KitError;
use crate::kit::{Component, Operation};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const CHECKOUT_MESSAGE: &str = "Order has been checked out.";

/// Outcome of a checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub processor: String,
    pub amount: f64,
    pub payment: String,
    pub status: String,
}

pub struct Order {
    amount: f64,
    service: Arc<dyn PaymentService>,
}

impl Order {
    pub fn new(amount: f64, service: Arc<dyn PaymentService>) -> Result<Self, KitError> {
        let amount = validate_amount("order", amount)?;
        Ok(Self { amount, service })
    }

    /// Order for the cart's total; an empty cart cannot be ordered
    pub fn from_cart(cart: &ShoppingCart, service: Arc<dyn PaymentService>) -> Result<Self, KitError> {
        if cart.is_empty() {
            return Err(KitError::invalid_argument("order", "cart is empty"));
        }
        Self::new(cart.total(), service)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Charges the amount through the injected service's `processPayment`
    pub fn checkout(&self) -> Result<Receipt, KitError> {
        let service = Component::PaymentService(Arc::clone(&self.service));
        let payment = match service.invoke(Operation::ProcessPayment, &[Value::from(self.amount)])? {
            Value::String(message) => message,
            other => other.to_string(),
        };
        info!(processor = self.service.processor(), amount = self.amount, "Order checked out");

        Ok(Receipt {
            processor: self.service.processor().to_string(),
            amount: self.amount,
            payment,
            status: CHECKOUT_MESSAGE.to_string(),
        })
    }
}
