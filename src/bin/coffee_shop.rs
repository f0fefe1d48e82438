use std::env;
use std::path::Path;
use std::process::ExitCode;

use beverage_decorator::{Beverage, CupSize, DescriptionNormalizer, Menu, MenuError, PriceTag};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

const MENU_ENV: &str = "COFFEE_MENU";

fn load_menu() -> Result<Menu, MenuError> {
    match env::var_os(MENU_ENV) {
        Some(path) => Menu::from_path(Path::new(&path)),
        None => Ok(Menu::default()),
    }
}

fn run() -> Result<(), MenuError> {
    let menu = load_menu()?;

    let mut order = menu.compose("House Blend", &["Milk", "Soy", "Soy"])?;
    for size in CupSize::ALL {
        order.set_size(size);
        println!("{}", PriceTag::new(&*order));
    }

    let order = DescriptionNormalizer::new(order);
    tracing::info!(size = %order.size(), "normalized order");
    println!("{}", PriceTag::new(&order));

    Ok(())
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout only carries price tags.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
