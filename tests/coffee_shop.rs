use std::io::Write;
use std::process::Command;

use beverage_decorator::{Beverage, CondimentKind, ConcreteBeverage, CupSize, OrderBuilder};
use tempfile::NamedTempFile;

const EXPECTED_RECEIPT: &str = "\
Small House Blend, Milk, Soy, Soy: $ 5
Medium House Blend, Milk, Soy, Soy: $ 6.5
Large House Blend, Milk, Soy, Soy: $ 8
Large House Blend, 1 Milk, 2 Soy: $ 8
";

fn coffee_shop() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coffee_shop"));
    cmd.env_remove("COFFEE_MENU").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_prints_receipt() {
    let output = coffee_shop().output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_RECEIPT);
}

#[test]
fn test_demo_reads_menu_from_env() {
    let mut menu = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    menu.write_all(include_bytes!("../menu.toml")).unwrap();

    let output = coffee_shop().env("COFFEE_MENU", menu.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_RECEIPT);
}

#[test]
fn test_demo_fails_on_incomplete_menu() {
    let mut menu = NamedTempFile::new().unwrap();
    write!(menu, r#"{{ "beverages": [{{ "name": "House Blend", "price": 3.0 }}] }}"#).unwrap();

    let output = coffee_shop().env("COFFEE_MENU", menu.path()).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown condiment: 'Milk'"));
}

#[test]
fn test_scenario_small_then_large() {
    let mut order = OrderBuilder::new(ConcreteBeverage::house_blend())
        .with_all([CondimentKind::Milk, CondimentKind::Soy, CondimentKind::Soy])
        .size(CupSize::Small)
        .build();
    assert_eq!(order.cost(), 5.0);
    assert_eq!(order.description(), "Small House Blend, Milk, Soy, Soy");

    order.set_size(CupSize::Large);
    assert_eq!(order.cost(), 8.0);
}

#[test]
fn test_bare_coffee_normalized() {
    let order = OrderBuilder::new(ConcreteBeverage::house_blend())
        .normalized()
        .build();
    assert_eq!(order.description(), "Invalid product description");
}
