use kitbox::cli::commands::{CliArgs, Commands};
use kitbox::cli::handlers::{
    handle_area, handle_build, handle_character, handle_checkout, handle_draw, handle_family,
    handle_list, handle_pay, handle_users,
};
use kitbox::config::KitConfig;
use kitbox::kit::registry::{install_global, Registry};
use kitbox::util::logging;
use kitbox::VERSION;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use tracing::{debug, error};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("kitbox v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = match prepare() {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match &args.command {
        Commands::List(list_args) => handle_list(list_args),
        Commands::Family(family_args) => handle_family(family_args, &config),
        Commands::Build(build_args) => handle_build(build_args, &config),
        Commands::Pay(pay_args) => handle_pay(pay_args),
        Commands::Checkout(checkout_args) => handle_checkout(checkout_args),
        Commands::Users(users_args) => handle_users(users_args),
        Commands::Character(character_args) => handle_character(character_args),
        Commands::Area(area_args) => handle_area(area_args),
        Commands::Draw(draw_args) => handle_draw(draw_args),
    };

    std::process::exit(exit_code);
}

/// Loads configuration and installs the process-wide registry
fn prepare() -> Result<KitConfig> {
    let config = KitConfig::default();
    config.validate().context("Invalid configuration")?;
    debug!("{}", config);

    let mut registry = Registry::with_defaults();
    if let Some(profiles) = config
        .load_profiles()
        .context("Failed to load builder profiles")?
    {
        registry.register_profiles(&profiles.builders);
    }

    install_global(registry).context("Registry already initialized")?;
    Ok(config)
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        level_str.clone()
    } else if args.verbose {
        "debug".to_string()
    } else if args.quiet {
        "error".to_string()
    } else {
        env::var("KITBOX_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    };

    logging::with_level(&level);
}
