//! Dynamic dispatch over contract implementations
//!
//! [`Component`] wraps one variant of any contract so a caller can invoke an
//! operation by name. The contract's declared operation set is the only thing
//! that decides whether an operation is accepted.

use super::character::Character;
use super::payment::{validate_amount, PaymentService};
use super::shape::{AreaCalculator, Drawable, ShapeCalculator};
use super::ui::{Button, Checkbox};
use super::{ContractId, FamilyKey, Operation};
use crate::error::KitError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub enum Component {
    Button(Box<dyn Button>),
    Checkbox(Box<dyn Checkbox>),
    AreaCalculator(Box<dyn AreaCalculator>),
    Drawable(Box<dyn Drawable>),
    PaymentService(Arc<dyn PaymentService>),
    Character(Box<dyn Character>),
}

impl Component {
    pub fn contract(&self) -> ContractId {
        match self {
            Component::Button(_) => ContractId::Button,
            Component::Checkbox(_) => ContractId::Checkbox,
            Component::AreaCalculator(_) => ContractId::AreaCalculator,
            Component::Drawable(_) => ContractId::Drawable,
            Component::PaymentService(_) => ContractId::PaymentService,
            Component::Character(_) => ContractId::Character,
        }
    }

    /// Family tag for themed variants; `None` for contracts outside any family
    pub fn family(&self) -> Option<FamilyKey> {
        match self {
            Component::Button(b) => Some(b.family()),
            Component::Checkbox(c) => Some(c.family()),
            _ => None,
        }
    }

    pub fn invoke(&self, operation: Operation, args: &[Value]) -> Result<Value, KitError> {
        let contract = self.contract();
        if !contract.declares(operation) {
            return Err(KitError::UnsupportedOperation {
                contract,
                operation,
            });
        }

        debug!(contract = %contract, operation = %operation, args = args.len(), "Invoking component");

        match self {
            Component::Button(b) => Ok(Value::String(b.render())),
            Component::Checkbox(c) => Ok(Value::String(c.render())),
            Component::AreaCalculator(s) => Ok(Value::from(ShapeCalculator::calculate_area(s.as_ref()))),
            Component::Drawable(d) => Ok(Value::String(d.draw())),
            Component::PaymentService(p) => {
                let amount = number_arg(operation, args, 0)?;
                let amount = validate_amount(operation.name(), amount)?;
                Ok(Value::String(p.process_payment(amount)))
            }
            Component::Character(c) => Ok(Value::String(c.attack())),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("contract", &self.contract())
            .field("family", &self.family())
            .finish()
    }
}

fn number_arg(operation: Operation, args: &[Value], index: usize) -> Result<f64, KitError> {
    let value = args.get(index).ok_or_else(|| {
        KitError::invalid_argument(operation.name(), format!("missing argument {}", index))
    })?;
    value.as_f64().ok_or_else(|| {
        KitError::invalid_argument(
            operation.name(),
            format!("argument {} must be a number, got {}", index, value),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::character::Warrior;
    use crate::kit::payment::ProcessorA;
    use crate::kit::shape::{Square, WebRenderer, BridgedCircle};
    use crate::kit::ui::LightButton;
    use serde_json::json;

    #[test]
    fn test_invoke_declared_operations() {
        let button = Component::Button(Box::new(LightButton));
        assert_eq!(
            button.invoke(Operation::Render, &[]).unwrap(),
            json!("Rendering a light button.")
        );

        let square = Component::AreaCalculator(Box::new(Square { side: 4.0 }));
        assert_eq!(square.invoke(Operation::CalculateArea, &[]).unwrap(), json!(16.0));

        let circle = Component::Drawable(Box::new(BridgedCircle::new(5.0, Arc::new(WebRenderer))));
        assert_eq!(
            circle.invoke(Operation::Draw, &[]).unwrap(),
            json!("Drawing a circle with radius 5 on the web")
        );

        let warrior = Component::Character(Box::new(Warrior::new("Aragorn")));
        assert_eq!(
            warrior.invoke(Operation::Attack, &[]).unwrap(),
            json!("Aragorn slashes with a sword!")
        );
    }

    #[test]
    fn test_invoke_undeclared_operation() {
        let button = Component::Button(Box::new(LightButton));
        let err = button.invoke(Operation::Attack, &[]).unwrap_err();
        assert_eq!(
            err,
            KitError::UnsupportedOperation {
                contract: ContractId::Button,
                operation: Operation::Attack,
            }
        );
    }

    #[test]
    fn test_process_payment_arguments() {
        let service = Component::PaymentService(Arc::new(ProcessorA));
        assert_eq!(
            service.invoke(Operation::ProcessPayment, &[json!(150)]).unwrap(),
            json!("Processing payment using Processor A: $150")
        );

        let missing = service.invoke(Operation::ProcessPayment, &[]).unwrap_err();
        assert!(missing.to_string().contains("missing argument 0"));

        let wrong_type = service
            .invoke(Operation::ProcessPayment, &[json!("lots")])
            .unwrap_err();
        assert!(wrong_type.to_string().contains("must be a number"));

        let negative = service
            .invoke(Operation::ProcessPayment, &[json!(-10)])
            .unwrap_err();
        assert!(matches!(negative, KitError::InvalidArgument { .. }));
    }

    #[test]
    fn test_family_tag() {
        let button = Component::Button(Box::new(LightButton));
        assert_eq!(button.family(), Some(FamilyKey::from("Light")));

        let square = Component::AreaCalculator(Box::new(Square { side: 1.0 }));
        assert_eq!(square.family(), None);
    }

    #[test]
    fn test_debug_output() {
        let button = Component::Button(Box::new(LightButton));
        let debug_str = format!("{:?}", button);
        assert!(debug_str.contains("Button"));
        assert!(debug_str.contains("Light"));
    }
}
