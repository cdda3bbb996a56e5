use clap::{Parser, Subcommand, ValueEnum};

use crate::kit::payment::CartItem;
use crate::kit::user::User;

/// Component families, keyed factories and step-wise builders
#[derive(Parser, Debug)]
#[command(
    name = "kitbox",
    about = "Create component families, build computers and dispatch keyed services",
    version,
    author,
    long_about = "kitbox resolves runtime keys against a registry of component families, \
                  computer builders, payment processors, characters, shapes and renderers. \
                  Builder profiles can be added from a TOML file via KITBOX_PROFILES."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "List registered keys",
        long_about = "Lists every registered key with its kind.\n\n\
                      Examples:\n  \
                      kitbox list\n  \
                      kitbox list --format json"
    )]
    List(ListArgs),

    #[command(
        about = "Create a component family and render its components",
        long_about = "Creates every component of a family and renders it.\n\n\
                      Examples:\n  \
                      kitbox family\n  \
                      kitbox family Dark --format yaml"
    )]
    Family(FamilyArgs),

    #[command(
        about = "Construct a computer with a registered builder",
        long_about = "Runs the director's fixed step sequence on a builder.\n\n\
                      Examples:\n  \
                      kitbox build\n  \
                      kitbox build Budget --format json"
    )]
    Build(BuildArgs),

    #[command(about = "Check out an order through a payment processor")]
    Pay(PayArgs),

    #[command(
        about = "Check out a cart of items through a payment processor",
        long_about = "Each item computes its own line price; the order charges the cart total.\n\n\
                      Examples:\n  \
                      kitbox checkout ProcessorA --item iPhone=999 --item \"Mac Book Pro 14=1899\"\n  \
                      kitbox checkout ProcessorB --item Cable=15*3"
    )]
    Checkout(CheckoutArgs),

    #[command(
        about = "Manage an in-memory user list",
        long_about = "Adds users, removes some, then lists names and optionally looks one up.\n\n\
                      Examples:\n  \
                      kitbox users --user alice=alice@example.com --user bob=bob@example.com\n  \
                      kitbox users --user alice=alice@example.com --find alice"
    )]
    Users(UsersArgs),

    #[command(about = "Create a character and attack")]
    Character(CharacterArgs),

    #[command(
        about = "Calculate the area of a shape",
        long_about = "Calculates the area of one registered shape.\n\n\
                      Examples:\n  \
                      kitbox area circle 5\n  \
                      kitbox area rectangle 4 6\n  \
                      kitbox area triangle 10 5"
    )]
    Area(AreaArgs),

    #[command(
        about = "Draw a shape on a renderer",
        long_about = "Examples:\n  \
                      kitbox draw web circle 5\n  \
                      kitbox draw desktop square 10"
    )]
    Draw(DrawArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct FamilyArgs {
    #[arg(
        value_name = "KEY",
        help = "Family key (defaults to KITBOX_DEFAULT_FAMILY)"
    )]
    pub key: Option<String>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    #[arg(
        value_name = "KEY",
        help = "Builder key (defaults to KITBOX_DEFAULT_BUILDER)"
    )]
    pub key: Option<String>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct PayArgs {
    #[arg(value_name = "KEY", help = "Payment processor key (e.g., ProcessorA)")]
    pub key: String,

    #[arg(value_name = "AMOUNT", allow_negative_numbers = true, help = "Order amount")]
    pub amount: f64,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckoutArgs {
    #[arg(value_name = "KEY", help = "Payment processor key (e.g., ProcessorA)")]
    pub key: String,

    #[arg(
        long = "item",
        value_name = "NAME=PRICE[*QTY]",
        required = true,
        help = "Cart item (repeatable)"
    )]
    pub items: Vec<CartItem>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct UsersArgs {
    #[arg(long = "user", value_name = "NAME=EMAIL", help = "User to add (repeatable)")]
    pub users: Vec<User>,

    #[arg(long = "remove", value_name = "NAME", help = "User to remove after adding (repeatable)")]
    pub remove: Vec<String>,

    #[arg(long, value_name = "NAME", help = "Look up one user by name")]
    pub find: Option<String>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct CharacterArgs {
    #[arg(value_name = "KEY", help = "Character factory key (e.g., Warrior)")]
    pub key: String,

    #[arg(value_name = "NAME", help = "Character name")]
    pub name: String,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct AreaArgs {
    #[arg(value_name = "SHAPE", help = "Shape key (circle, square, rectangle, triangle)")]
    pub shape: String,

    #[arg(
        value_name = "DIMS",
        required = true,
        allow_negative_numbers = true,
        help = "Shape dimensions"
    )]
    pub dims: Vec<f64>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct DrawArgs {
    #[arg(value_name = "RENDERER", help = "Renderer key (web, desktop)")]
    pub renderer: String,

    #[arg(value_name = "SHAPE", help = "Shape to draw (circle, square)")]
    pub shape: String,

    #[arg(value_name = "SIZE", allow_negative_numbers = true, help = "Radius or side length")]
    pub size: f64,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
