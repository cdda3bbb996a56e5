//! Key-to-constructor registry
//!
//! Resolution is a table lookup; adding a family, builder, processor or shape
//! means registering one more entry, never touching the lookup code. Builders
//! are stateful, so they are registered as constructors and a fresh builder is
//! made on every resolve.
//!
//! The process-wide registry is read-only once initialised. Install a custom
//! one with [`install_global`] before the first call to [`global`]; otherwise
//! the defaults are used.

use super::builder::{BudgetBuilder, BuildProfile, ComputerBuilder, GamingBuilder, OfficeBuilder, ProfileBuilder};
use super::character::{CharacterFactory, MageFactory, WarriorFactory};
use super::payment::{PaymentService, ProcessorA, ProcessorB};
use super::shape::{self, AreaCalculator, DesktopRenderer, Renderer, WebRenderer};
use super::ui::{DarkUi, FamilyFactory, LightUi, Product};
use crate::error::KitError;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

pub type BuilderCtor = Arc<dyn Fn() -> Box<dyn ComputerBuilder> + Send + Sync>;
pub type ShapeCtor = Arc<dyn Fn(&[f64]) -> Result<Box<dyn AreaCalculator>, KitError> + Send + Sync>;

crate::define_id_enum! {
    /// What a registry key resolves to
    RegistrationKind {
        Family => "family",
        Builder => "builder",
        Character => "character",
        Payment => "payment",
        Shape => "shape",
        Renderer => "renderer",
    }
}

#[derive(Clone)]
pub enum Registration {
    Family(Arc<dyn FamilyFactory>),
    Builder(BuilderCtor),
    Character(Arc<dyn CharacterFactory>),
    Payment(Arc<dyn PaymentService>),
    Shape(ShapeCtor),
    Renderer(Arc<dyn Renderer>),
}

impl Registration {
    pub fn kind(&self) -> RegistrationKind {
        match self {
            Registration::Family(_) => RegistrationKind::Family,
            Registration::Builder(_) => RegistrationKind::Builder,
            Registration::Character(_) => RegistrationKind::Character,
            Registration::Payment(_) => RegistrationKind::Payment,
            Registration::Shape(_) => RegistrationKind::Shape,
            Registration::Renderer(_) => RegistrationKind::Renderer,
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registration({})", self.kind())
    }
}

/// Result of [`Registry::resolve`]; builders are freshly constructed
pub enum Resolved {
    Family(Arc<dyn FamilyFactory>),
    Builder(Box<dyn ComputerBuilder>),
    Character(Arc<dyn CharacterFactory>),
    Payment(Arc<dyn PaymentService>),
    Shape(ShapeCtor),
    Renderer(Arc<dyn Renderer>),
}

impl Resolved {
    pub fn kind(&self) -> RegistrationKind {
        match self {
            Resolved::Family(_) => RegistrationKind::Family,
            Resolved::Builder(_) => RegistrationKind::Builder,
            Resolved::Character(_) => RegistrationKind::Character,
            Resolved::Payment(_) => RegistrationKind::Payment,
            Resolved::Shape(_) => RegistrationKind::Shape,
            Resolved::Renderer(_) => RegistrationKind::Renderer,
        }
    }
}

#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register_family(Arc::new(LightUi));
        registry.register_family(Arc::new(DarkUi));

        registry.register_builder("Gaming", GamingBuilder::default);
        registry.register_builder("Office", OfficeBuilder::default);
        registry.register_builder("Budget", BudgetBuilder::default);

        registry.register_character("Warrior", Arc::new(WarriorFactory));
        registry.register_character("Mage", Arc::new(MageFactory));

        registry.register_payment("ProcessorA", Arc::new(ProcessorA));
        registry.register_payment("ProcessorB", Arc::new(ProcessorB));

        registry.register_shape("circle", shape::circle);
        registry.register_shape("square", shape::square);
        registry.register_shape("rectangle", shape::rectangle);
        registry.register_shape("triangle", shape::triangle);

        registry.register_renderer("web", Arc::new(WebRenderer));
        registry.register_renderer("desktop", Arc::new(DesktopRenderer));

        registry
    }

    /// Adds or replaces the entry for `key`; the last registration wins
    pub fn register(&mut self, key: impl Into<String>, registration: Registration) {
        let key = key.into();
        let kind = registration.kind();
        if let Some(previous) = self.entries.insert(key.clone(), registration) {
            warn!(key = %key, previous = %previous.kind(), replacement = %kind, "Replaced registry entry");
        } else {
            debug!(key = %key, kind = %kind, "Registered");
        }
    }

    /// Registers a family factory under its own family key
    pub fn register_family(&mut self, factory: Arc<dyn FamilyFactory>) {
        let key = factory.family().to_string();
        self.register(key, Registration::Family(factory));
    }

    pub fn register_builder<F, B>(&mut self, key: impl Into<String>, ctor: F)
    where
        F: Fn() -> B + Send + Sync + 'static,
        B: ComputerBuilder + 'static,
    {
        let ctor: BuilderCtor = Arc::new(move || Box::new(ctor()) as Box<dyn ComputerBuilder>);
        self.register(key, Registration::Builder(ctor));
    }

    pub fn register_character(&mut self, key: impl Into<String>, factory: Arc<dyn CharacterFactory>) {
        self.register(key, Registration::Character(factory));
    }

    pub fn register_payment(&mut self, key: impl Into<String>, service: Arc<dyn PaymentService>) {
        self.register(key, Registration::Payment(service));
    }

    pub fn register_shape<F>(&mut self, key: impl Into<String>, ctor: F)
    where
        F: Fn(&[f64]) -> Result<Box<dyn AreaCalculator>, KitError> + Send + Sync + 'static,
    {
        self.register(key, Registration::Shape(Arc::new(ctor)));
    }

    pub fn register_renderer(&mut self, key: impl Into<String>, renderer: Arc<dyn Renderer>) {
        self.register(key, Registration::Renderer(renderer));
    }

    /// Registers each profile as a builder keyed by profile name
    pub fn register_profiles(&mut self, profiles: &BTreeMap<String, BuildProfile>) {
        for (name, profile) in profiles {
            let builder_name = name.clone();
            let profile = profile.clone();
            self.register_builder(name.clone(), move || {
                ProfileBuilder::new(builder_name.clone(), profile.clone())
            });
        }
    }

    pub fn resolve(&self, key: &str) -> Result<Resolved, KitError> {
        let registration = self
            .entries
            .get(key)
            .ok_or_else(|| KitError::UnknownKey(key.to_string()))?;

        debug!(key, kind = %registration.kind(), "Resolved key");

        Ok(match registration {
            Registration::Family(f) => Resolved::Family(Arc::clone(f)),
            Registration::Builder(ctor) => Resolved::Builder(ctor()),
            Registration::Character(c) => Resolved::Character(Arc::clone(c)),
            Registration::Payment(p) => Resolved::Payment(Arc::clone(p)),
            Registration::Shape(s) => Resolved::Shape(Arc::clone(s)),
            Registration::Renderer(r) => Resolved::Renderer(Arc::clone(r)),
        })
    }

    pub fn family_factory(&self, key: &str) -> Result<Arc<dyn FamilyFactory>, KitError> {
        match self.entries.get(key) {
            Some(Registration::Family(f)) => Ok(Arc::clone(f)),
            _ => Err(KitError::UnknownFamily(key.to_string())),
        }
    }

    /// Resolves `key` to a family factory and assembles a full product.
    /// The factory must produce the family named by `key`.
    pub fn create_family(&self, key: &str) -> Result<Product, KitError> {
        let factory = self.family_factory(key)?;
        let family = factory.family();
        if family.as_str() != key {
            return Err(KitError::MixedFamily {
                expected: key.to_string(),
                found: family.to_string(),
            });
        }
        Product::assemble(factory.as_ref())
    }

    pub fn create_builder(&self, key: &str) -> Result<Box<dyn ComputerBuilder>, KitError> {
        match self.entries.get(key) {
            Some(Registration::Builder(ctor)) => Ok(ctor()),
            _ => Err(KitError::UnknownKey(key.to_string())),
        }
    }

    pub fn character_factory(&self, key: &str) -> Result<Arc<dyn CharacterFactory>, KitError> {
        match self.entries.get(key) {
            Some(Registration::Character(c)) => Ok(Arc::clone(c)),
            _ => Err(KitError::UnknownKey(key.to_string())),
        }
    }

    pub fn payment_service(&self, key: &str) -> Result<Arc<dyn PaymentService>, KitError> {
        match self.entries.get(key) {
            Some(Registration::Payment(p)) => Ok(Arc::clone(p)),
            _ => Err(KitError::UnknownKey(key.to_string())),
        }
    }

    pub fn create_shape(&self, key: &str, dims: &[f64]) -> Result<Box<dyn AreaCalculator>, KitError> {
        match self.entries.get(key) {
            Some(Registration::Shape(ctor)) => ctor(dims),
            _ => Err(KitError::UnknownKey(key.to_string())),
        }
    }

    pub fn renderer(&self, key: &str) -> Result<Arc<dyn Renderer>, KitError> {
        match self.entries.get(key) {
            Some(Registration::Renderer(r)) => Ok(Arc::clone(r)),
            _ => Err(KitError::UnknownKey(key.to_string())),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys with their kind, sorted by key
    pub fn entries(&self) -> Vec<(&str, RegistrationKind)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, reg)| (key.as_str(), reg.kind()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    pub fn keys_of(&self, kind: RegistrationKind) -> Vec<&str> {
        self.entries()
            .into_iter()
            .filter(|(_, k)| *k == kind)
            .map(|(key, _)| key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Process-wide registry, initialised with [`Registry::with_defaults`] on first use
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        debug!("Initializing global registry with defaults");
        Registry::with_defaults()
    })
}

/// Sets the process-wide registry. Fails once [`global`] has been read or
/// another registry installed.
pub fn install_global(registry: Registry) -> Result<(), KitError> {
    GLOBAL
        .set(registry)
        .map_err(|_| KitError::AlreadyInitialized)
}
