//! Shopping cart whose total is computed by the items themselves

use super::validate_amount;
use crate::error::KitError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    name: String,
    unit_price: f64,
    quantity: u32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, unit_price: f64) -> Result<Self, KitError> {
        Self::with_quantity(name, unit_price, 1)
    }

    pub fn with_quantity(
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Result<Self, KitError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KitError::invalid_argument("cart item", "name must not be empty"));
        }
        let unit_price = validate_amount(&name, unit_price)?;
        Ok(Self {
            name,
            unit_price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total for this item
    pub fn price(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of each item's own price
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::price).sum()
    }
}

/// Parses `NAME=PRICE` or `NAME=PRICE*QTY`
impl FromStr for CartItem {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, price) = s
            .rsplit_once('=')
            .ok_or_else(|| KitError::invalid_argument(s, "expected NAME=PRICE"))?;
        let (price, quantity) = match price.split_once('*') {
            Some((price, quantity)) => (price, quantity),
            None => (price, "1"),
        };
        let price: f64 = price
            .trim()
            .parse()
            .map_err(|_| KitError::invalid_argument(name, format!("invalid price '{}'", price)))?;
        let quantity: u32 = quantity.trim().parse().map_err(|_| {
            KitError::invalid_argument(name, format!("invalid quantity '{}'", quantity))
        })?;
        Self::with_quantity(name.trim(), price, quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_delegates_to_items() {
        let mut cart = ShoppingCart::new();
        cart.add_item(CartItem::new("iPhone", 999.0).unwrap());
        cart.add_item(CartItem::new("Mac Book Pro 14", 1899.0).unwrap());
        assert_eq!(cart.total(), 2898.0);
    }

    #[test]
    fn test_quantity_multiplies_line_price() {
        let item = CartItem::with_quantity("Cable", 15.0, 3).unwrap();
        assert_eq!(item.price(), 45.0);
        assert_eq!(CartItem::with_quantity("Cable", 15.0, 0).unwrap().price(), 0.0);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = ShoppingCart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_invalid_items_rejected() {
        assert!(CartItem::new("iPhone", -1.0).is_err());
        assert!(CartItem::new("iPhone", f64::NAN).is_err());
        assert!(CartItem::new("  ", 10.0).is_err());
    }

    #[test]
    fn test_parse_item() {
        let item: CartItem = "Mac Book Pro 14=1899".parse().unwrap();
        assert_eq!(item.name(), "Mac Book Pro 14");
        assert_eq!(item.price(), 1899.0);

        let item: CartItem = "Cable=15*3".parse().unwrap();
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.price(), 45.0);

        assert!("iPhone".parse::<CartItem>().is_err());
        assert!("iPhone=cheap".parse::<CartItem>().is_err());
        assert!("Cable=15*-1".parse::<CartItem>().is_err());
    }
}
