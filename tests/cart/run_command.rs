use clap::Parser;
use pharmacy_cart::{infra::Cli, run};
use serde_json::json;

use crate::test_utils::{TempRoot, test_settings};

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("pharmacy-cart").chain(args.iter().copied()))
}

#[test]
fn add_checkout_and_end_session() {
    let root = TempRoot::new();
    let settings = test_settings(&root);

    run(
        &settings,
        cli(&[
            "add",
            r#"{"id": 11, "prescriptionId": "RX1", "pharmacyId": 3, "price": "4.50", "quantity": 2}"#,
            r#"{"id": 12, "prescriptionId": "RX2", "pharmacyId": 3, "price": "1.00"}"#,
        ]),
    )
    .expect("Add should succeed.");

    let summary = run(&settings, cli(&["summary", "RX1"])).expect("Summary should succeed.");
    assert_eq!(summary["total"], json!("9.00"));

    let placed = run(&settings, cli(&["checkout", "RX1", "--payment", "cash"]))
        .expect("Checkout should succeed.");
    assert_eq!(placed["paid"], json!(true));
    assert_eq!(placed["request"]["pharmacies"][0]["pharmacyId"], json!(3));

    let shown = run(&settings, cli(&["show"])).expect("Show should succeed.");
    assert_eq!(shown["items"].as_array().map(Vec::len), Some(1));

    run(&settings, cli(&["end-session"])).expect("End session should succeed.");
    let shown = run(&settings, cli(&["show"])).expect("Show should succeed.");
    assert_eq!(shown, json!({"items": []}));
}

#[test]
fn set_scope_without_items_empties_the_scope() {
    let root = TempRoot::new();
    let settings = test_settings(&root);

    run(
        &settings,
        cli(&[
            "set-scope",
            "--prescription",
            "RX1",
            "--pharmacy",
            "Central",
            r#"{"id": 1}"#,
            r#"{"id": 2, "selected": true}"#,
        ]),
    )
    .expect("Set scope should succeed.");
    let shown = run(&settings, cli(&["show", "--prescription", "RX1"])).unwrap();
    assert_eq!(shown["items"].as_array().map(Vec::len), Some(2));

    run(
        &settings,
        cli(&["set-scope", "--prescription", "RX1", "--pharmacy", "Central"]),
    )
    .unwrap();
    let shown = run(&settings, cli(&["show"])).unwrap();
    assert_eq!(shown, json!({"items": []}));
}

#[test]
fn invalid_session_name_is_rejected() {
    let root = TempRoot::new();
    let settings = test_settings(&root);
    assert!(run(&settings, cli(&["--session", "../other", "show"])).is_err());
}
