//! Subcommand handlers
//!
//! Each handler resolves its keys against the process-wide registry, prints the
//! formatted report to stdout and returns the process exit code.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::commands::{
    AreaArgs, BuildArgs, CharacterArgs, CheckoutArgs, DrawArgs, FamilyArgs, ListArgs, PayArgs,
    UsersArgs,
};
use super::output::{
    AreaReport, AttackReport, CheckoutLine, CheckoutReport, ComponentOutput, ComputerReport,
    DrawReport, FamilyReport, HumanReadable, OutputFormat, OutputFormatter, RegistryEntry,
    RegistryReport, UsersReport,
};
use crate::config::KitConfig;
use crate::kit::builder::Director;
use crate::kit::payment::{CartItem, Order, Receipt, ShoppingCart};
use crate::kit::shape;
use crate::kit::user::{User, UserFinder, UserManager, UserPrinter};
use crate::kit::{registry, Component, Operation, Registry};
use crate::progress::LoggingObserver;

fn emit<T>(format: OutputFormat, result: Result<T>) -> i32
where
    T: Serialize + HumanReadable,
{
    let output = result.and_then(|report| OutputFormatter::new(format).format(&report));
    match output {
        Ok(text) => {
            println!("{}", text.trim_end());
            0
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn as_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn invoke(component: &Component, operation: Operation, args: &[Value]) -> Result<Value> {
    component
        .invoke(operation, args)
        .with_context(|| format!("Failed to {} {}", operation, component.contract()))
}

pub fn handle_list(args: &ListArgs) -> i32 {
    emit(args.format.into(), Ok(list_report(registry::global())))
}

fn list_report(registry: &Registry) -> RegistryReport {
    RegistryReport {
        entries: registry
            .entries()
            .into_iter()
            .map(|(key, kind)| RegistryEntry {
                key: key.to_string(),
                kind,
            })
            .collect(),
    }
}

pub fn handle_family(args: &FamilyArgs, config: &KitConfig) -> i32 {
    let key = args.key.as_deref().unwrap_or(&config.default_family);
    emit(args.format.into(), family_report(registry::global(), key))
}

fn family_report(registry: &Registry, key: &str) -> Result<FamilyReport> {
    debug!(family = key, "Creating component family");
    let product = registry
        .create_family(key)
        .with_context(|| format!("Failed to create family '{}'", key))?;

    let mut components = Vec::new();
    for component in product.components() {
        let output = invoke(component, Operation::Render, &[])?;
        components.push(ComponentOutput {
            contract: component.contract(),
            output: as_text(output),
        });
    }

    Ok(FamilyReport {
        family: product.family().to_string(),
        components,
    })
}

pub fn handle_build(args: &BuildArgs, config: &KitConfig) -> i32 {
    let key = args.key.as_deref().unwrap_or(&config.default_builder);
    emit(args.format.into(), build_report(registry::global(), key))
}

fn build_report(registry: &Registry, key: &str) -> Result<ComputerReport> {
    let mut builder = registry
        .create_builder(key)
        .with_context(|| format!("Failed to resolve builder '{}'", key))?;

    let director = Director::new(Some(Box::new(LoggingObserver)));
    let computer = director.construct(builder.as_mut());

    Ok(ComputerReport {
        builder: key.to_string(),
        unpopulated: computer.unpopulated(),
        state: builder.state(),
        computer,
    })
}

pub fn handle_pay(args: &PayArgs) -> i32 {
    emit(args.format.into(), pay(registry::global(), &args.key, args.amount))
}

fn pay(registry: &Registry, key: &str, amount: f64) -> Result<Receipt> {
    let service = registry
        .payment_service(key)
        .with_context(|| format!("Failed to resolve payment processor '{}'", key))?;
    let order = Order::new(amount, service).context("Invalid order")?;
    order.checkout().context("Checkout failed")
}

pub fn handle_checkout(args: &CheckoutArgs) -> i32 {
    emit(
        args.format.into(),
        checkout_report(registry::global(), &args.key, &args.items),
    )
}

fn checkout_report(registry: &Registry, key: &str, items: &[CartItem]) -> Result<CheckoutReport> {
    let service = registry
        .payment_service(key)
        .with_context(|| format!("Failed to resolve payment processor '{}'", key))?;

    let mut cart = ShoppingCart::new();
    for item in items {
        cart.add_item(item.clone());
    }
    let order = Order::from_cart(&cart, service).context("Invalid order")?;
    let receipt = order.checkout().context("Checkout failed")?;

    Ok(CheckoutReport {
        items: cart.items().iter().map(CheckoutLine::from).collect(),
        total: cart.total(),
        receipt,
    })
}

pub fn handle_users(args: &UsersArgs) -> i32 {
    emit(
        args.format.into(),
        users_report(&args.users, &args.remove, args.find.as_deref()),
    )
}

fn users_report(users: &[User], remove: &[String], find: Option<&str>) -> Result<UsersReport> {
    let mut manager = UserManager::new();
    for user in users {
        manager
            .add_user(user.clone())
            .with_context(|| format!("Failed to add user '{}'", user.name))?;
    }
    for name in remove {
        if manager.delete_user(name).is_none() {
            anyhow::bail!("No user named '{}' to remove", name);
        }
    }

    let found = match find {
        Some(name) => Some(
            UserFinder::new(&manager)
                .find_by_name(name)
                .cloned()
                .with_context(|| format!("No user named '{}'", name))?,
        ),
        None => None,
    };

    Ok(UsersReport {
        names: UserPrinter::new(&manager)
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        users: manager.users().to_vec(),
        found,
    })
}

pub fn handle_character(args: &CharacterArgs) -> i32 {
    emit(
        args.format.into(),
        attack_report(registry::global(), &args.key, &args.name),
    )
}

fn attack_report(registry: &Registry, key: &str, name: &str) -> Result<AttackReport> {
    let factory = registry
        .character_factory(key)
        .with_context(|| format!("Failed to resolve character factory '{}'", key))?;
    let character = Component::Character(factory.create_character(name));
    let attack = invoke(&character, Operation::Attack, &[])?;

    Ok(AttackReport {
        class: factory.kind().to_string(),
        name: name.to_string(),
        attack: as_text(attack),
    })
}

pub fn handle_area(args: &AreaArgs) -> i32 {
    emit(
        args.format.into(),
        area_report(registry::global(), &args.shape, &args.dims),
    )
}

fn area_report(registry: &Registry, key: &str, dims: &[f64]) -> Result<AreaReport> {
    let shape = registry
        .create_shape(key, dims)
        .with_context(|| format!("Failed to create shape '{}'", key))?;

    let name = shape.shape_name().to_string();
    let area = invoke(&Component::AreaCalculator(shape), Operation::CalculateArea, &[])?;

    Ok(AreaReport {
        shape: name,
        dimensions: dims.to_vec(),
        area: area.as_f64().context("Area is not a number")?,
    })
}

pub fn handle_draw(args: &DrawArgs) -> i32 {
    emit(
        args.format.into(),
        draw_report(registry::global(), &args.renderer, &args.shape, args.size),
    )
}

fn draw_report(registry: &Registry, renderer_key: &str, shape_key: &str, size: f64) -> Result<DrawReport> {
    let renderer = registry
        .renderer(renderer_key)
        .with_context(|| format!("Failed to resolve renderer '{}'", renderer_key))?;
    let platform = renderer.platform().to_string();
    let drawable = shape::drawable(shape_key, size, renderer)
        .with_context(|| format!("Failed to draw '{}'", shape_key))?;

    let output = invoke(&Component::Drawable(drawable), Operation::Draw, &[])?;

    Ok(DrawReport {
        renderer: platform,
        shape: shape_key.to_string(),
        size,
        output: as_text(output),
    })
}
