//! Key resolution, extension and replacement

use kitbox::kit::character::WarriorFactory;
use kitbox::kit::payment::{Order, PaymentService, ProcessorA};
use kitbox::kit::registry::{Registration, RegistrationKind, Resolved};
use kitbox::kit::shape::{self, ShapeCalculator};
use kitbox::{KitError, Registry};
use std::sync::Arc;
use yare::parameterized;

#[parameterized(
    light = { "Light", RegistrationKind::Family },
    gaming = { "Gaming", RegistrationKind::Builder },
    mage = { "Mage", RegistrationKind::Character },
    processor_b = { "ProcessorB", RegistrationKind::Payment },
    triangle = { "triangle", RegistrationKind::Shape },
    desktop = { "desktop", RegistrationKind::Renderer },
)]
fn test_resolve_default_keys(key: &str, kind: RegistrationKind) {
    let resolved = Registry::with_defaults().resolve(key).unwrap();
    assert_eq!(resolved.kind(), kind);
}

#[parameterized(
    unknown = { "Quantum" },
    wrong_case = { "processora" },
    empty = { "" },
)]
fn test_resolve_miss_is_unknown_key(key: &str) {
    let result = Registry::with_defaults().resolve(key);
    assert!(matches!(result, Err(KitError::UnknownKey(k)) if k == key));
}

#[test]
fn test_typed_lookup_of_wrong_kind() {
    let registry = Registry::with_defaults();

    assert!(matches!(
        registry.create_builder("Light"),
        Err(KitError::UnknownKey(_))
    ));
    assert!(matches!(
        registry.payment_service("Warrior"),
        Err(KitError::UnknownKey(_))
    ));
    assert!(matches!(
        registry.create_family("ProcessorA"),
        Err(KitError::UnknownFamily(_))
    ));
}

struct ProcessorC;

impl PaymentService for ProcessorC {
    fn processor(&self) -> &str {
        "ProcessorC"
    }

    fn process_payment(&self, amount: f64) -> String {
        format!("Processing payment using Processor C: ${}", amount)
    }
}

#[test]
fn test_register_new_processor() {
    let mut registry = Registry::with_defaults();
    let before = registry.len();

    registry.register_payment("ProcessorC", Arc::new(ProcessorC));
    assert_eq!(registry.len(), before + 1);

    let order = Order::new(42.0, registry.payment_service("ProcessorC").unwrap()).unwrap();
    let receipt = order.checkout().unwrap();
    assert_eq!(receipt.payment, "Processing payment using Processor C: $42");
    assert_eq!(receipt.status, "Order has been checked out.");
}

#[test]
fn test_register_replaces_existing_key() {
    let mut registry = Registry::with_defaults();
    let before = registry.len();

    registry.register("ProcessorA", Registration::Payment(Arc::new(ProcessorC)));
    assert_eq!(registry.len(), before);
    assert_eq!(
        registry.payment_service("ProcessorA").unwrap().processor(),
        "ProcessorC"
    );

    // a key may change kind on replacement
    registry.register_character("ProcessorA", Arc::new(WarriorFactory));
    assert!(registry.payment_service("ProcessorA").is_err());
    let factory = registry.character_factory("ProcessorA").unwrap();
    assert_eq!(factory.create_character("Conan").attack(), "Conan slashes with a sword!");
}

#[test]
fn test_keys_are_sorted_and_grouped_by_kind() {
    let registry = Registry::with_defaults();

    let keys = registry.keys();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    assert_eq!(registry.keys_of(RegistrationKind::Family), vec!["Dark", "Light"]);
    assert_eq!(
        registry.keys_of(RegistrationKind::Builder),
        vec!["Budget", "Gaming", "Office"]
    );
    assert_eq!(
        registry.keys_of(RegistrationKind::Shape),
        vec!["circle", "rectangle", "square", "triangle"]
    );
}

#[test]
fn test_shapes_from_registry_share_one_calculator() {
    let registry = Registry::with_defaults();
    let square = registry.create_shape("square", &[3.0]).unwrap();
    let rectangle = registry.create_shape("rectangle", &[2.0, 5.0]).unwrap();
    let triangle = registry.create_shape("triangle", &[4.0, 3.0]).unwrap();

    let total = ShapeCalculator::total_area(&[square.as_ref(), rectangle.as_ref(), triangle.as_ref()]);
    assert_eq!(total, 9.0 + 10.0 + 6.0);
}

#[parameterized(
    too_few = { "rectangle", vec![2.0] },
    too_many = { "circle", vec![1.0, 2.0] },
    negative = { "square", vec![-3.0] },
    zero = { "triangle", vec![0.0, 3.0] },
    not_finite = { "circle", vec![f64::NAN] },
)]
fn test_invalid_shape_dimensions(key: &str, dims: Vec<f64>) {
    let result = Registry::with_defaults().create_shape(key, &dims);
    assert!(matches!(result, Err(KitError::InvalidArgument { .. })));
}

#[test]
fn test_renderers_bridge_shapes() {
    let registry = Registry::with_defaults();

    let web = registry.renderer("web").unwrap();
    let circle = shape::drawable("circle", 5.0, web).unwrap();
    assert_eq!(circle.draw(), "Drawing a circle with radius 5 on the web");

    let desktop = registry.renderer("desktop").unwrap();
    let square = shape::drawable("square", 10.0, desktop).unwrap();
    assert_eq!(
        square.draw(),
        "Drawing a square with side length 10 on the desktop"
    );
}

#[test]
fn test_resolved_builder_is_constructed() {
    match Registry::with_defaults().resolve("Budget").unwrap() {
        Resolved::Builder(builder) => assert_eq!(builder.name(), "Budget"),
        other => panic!("Expected builder, got {:?}", other.kind()),
    }
}

#[test]
fn test_injected_service_is_used_by_order() {
    let service: Arc<dyn PaymentService> = Arc::new(ProcessorA);
    let receipt = Order::new(150.0, service).unwrap().checkout().unwrap();
    assert_eq!(receipt.payment, "Processing payment using Processor A: $150");
    assert!(Order::new(f64::INFINITY, Arc::new(ProcessorA)).is_err());
}

#[test]
fn test_character_factories() {
    let registry = Registry::with_defaults();
    let mage = registry.character_factory("Mage").unwrap();
    assert_eq!(mage.kind(), "Mage");
    assert_eq!(
        mage.create_character("Merlin").attack(),
        "Merlin casts a fireball spell!"
    );
}
