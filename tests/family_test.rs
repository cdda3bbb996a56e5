//! Component family creation and contract dispatch through the public API

use kitbox::kit::registry::Registration;
use kitbox::kit::ui::{Button, Checkbox, DarkUi, FamilyFactory, LightUi};
use kitbox::{ContractId, FamilyKey, KitError, Operation, Registry};
use serde_json::json;
use std::sync::Arc;
use yare::parameterized;

#[parameterized(
    light_button = { "Light", ContractId::Button, "Rendering a light button." },
    light_checkbox = { "Light", ContractId::Checkbox, "Rendering a light checkbox." },
    dark_button = { "Dark", ContractId::Button, "Rendering a dark button." },
    dark_checkbox = { "Dark", ContractId::Checkbox, "Rendering a dark checkbox." },
)]
fn test_family_renders_themed_components(family: &str, contract: ContractId, expected: &str) {
    let registry = Registry::with_defaults();
    let product = registry.create_family(family).unwrap();

    let output = product.invoke(contract, Operation::Render, &[]).unwrap();
    assert_eq!(output, json!(expected));
}

#[parameterized(
    neon = { "Neon" },
    lowercase = { "light" },
    empty = { "" },
    builder_key = { "Gaming" },
)]
fn test_unregistered_family_fails(key: &str) {
    let registry = Registry::with_defaults();
    match registry.create_family(key) {
        Err(KitError::UnknownFamily(k)) => assert_eq!(k, key),
        Err(other) => panic!("Expected UnknownFamily, got {:?}", other),
        Ok(_) => panic!("Expected UnknownFamily for '{}'", key),
    }
}

#[test]
fn test_every_component_carries_the_family_tag() {
    let registry = Registry::with_defaults();
    for key in ["Light", "Dark"] {
        let product = registry.create_family(key).unwrap();
        assert_eq!(product.family(), &FamilyKey::from(key));
        assert_eq!(
            product.contracts(),
            vec![ContractId::Button, ContractId::Checkbox]
        );
        for component in product.components() {
            assert_eq!(component.family(), Some(FamilyKey::from(key)));
        }
    }
}

#[test]
fn test_undeclared_operation_is_unsupported() {
    let product = Registry::with_defaults().create_family("Dark").unwrap();

    let err = product
        .invoke(ContractId::Checkbox, Operation::CalculateArea, &[])
        .unwrap_err();
    assert_eq!(
        err,
        KitError::UnsupportedOperation {
            contract: ContractId::Checkbox,
            operation: Operation::CalculateArea,
        }
    );
}

#[test]
fn test_contract_outside_family_is_missing() {
    let product = Registry::with_defaults().create_family("Light").unwrap();
    let err = product
        .invoke(ContractId::PaymentService, Operation::ProcessPayment, &[json!(10)])
        .unwrap_err();
    assert_eq!(err, KitError::MissingContract(ContractId::PaymentService));
}

struct NeonUi;
struct NeonButton;
struct NeonCheckbox;

impl FamilyFactory for NeonUi {
    fn family(&self) -> FamilyKey {
        FamilyKey::from("Neon")
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(NeonButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(NeonCheckbox)
    }
}

impl Button for NeonButton {
    fn family(&self) -> FamilyKey {
        FamilyKey::from("Neon")
    }

    fn render(&self) -> String {
        "Rendering a glowing button.".to_string()
    }
}

impl Checkbox for NeonCheckbox {
    fn family(&self) -> FamilyKey {
        FamilyKey::from("Neon")
    }

    fn render(&self) -> String {
        "Rendering a glowing checkbox.".to_string()
    }
}

#[test]
fn test_new_family_by_registration_only() {
    let mut registry = Registry::with_defaults();
    assert!(registry.create_family("Neon").is_err());

    registry.register_family(Arc::new(NeonUi));

    let product = registry.create_family("Neon").unwrap();
    let output = product
        .invoke(ContractId::Button, Operation::Render, &[])
        .unwrap();
    assert_eq!(output, json!("Rendering a glowing button."));

    // existing families are untouched
    assert!(registry.create_family("Light").is_ok());
}

#[parameterized(
    light_as_neon = { "Neon", Arc::new(LightUi) as Arc<dyn FamilyFactory>, "Light" },
    dark_as_light = { "Light", Arc::new(DarkUi) as Arc<dyn FamilyFactory>, "Dark" },
    neon_as_lowercase = { "neon", Arc::new(NeonUi) as Arc<dyn FamilyFactory>, "Neon" },
)]
fn test_family_registered_under_foreign_key_is_rejected(
    key: &str,
    factory: Arc<dyn FamilyFactory>,
    found: &str,
) {
    let mut registry = Registry::with_defaults();
    registry.register(key, Registration::Family(factory));

    match registry.create_family(key) {
        Err(KitError::MixedFamily { expected, found: actual }) => {
            assert_eq!(expected, key);
            assert_eq!(actual, found);
        }
        Err(other) => panic!("Expected MixedFamily, got {:?}", other),
        Ok(product) => panic!(
            "'{}' produced a {} product",
            key,
            product.family()
        ),
    }
}

#[test]
fn test_generic_registration_under_own_key() {
    let mut registry = Registry::new();
    registry.register("Neon", Registration::Family(Arc::new(NeonUi)));

    let product = registry.create_family("Neon").unwrap();
    for component in product.components() {
        assert_eq!(component.family(), Some(FamilyKey::from("Neon")));
    }
}
