use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use fio_shipping::operations::{build_task, days_until_due, size_shipload, PlanetContext, ShipSelection};
use fio_shipping::{ShipClass, ShippingTaskType};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

fn rates(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(ticker, rate)| (ticker.to_string(), *rate)).collect()
}

fn stock(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries.iter().map(|(ticker, amount)| (ticker.to_string(), *amount)).collect()
}

fn ctx(stock: &HashMap<String, f64>) -> PlanetContext<'_> {
    PlanetContext {
        planet_id: "XY-123a",
        planet_name: "Vulcan",
        stock,
        today: today(),
    }
}

fn wcb(days_fit: f64) -> ShipSelection {
    ShipSelection {
        ship_class: ShipClass::Wcb,
        days_fit,
    }
}

#[test]
fn test_shipload_floors_and_drops_zero_entries() {
    let shipload = size_shipload(&rates(&[("A", 12.5), ("B", 0.05), ("C", 0.1)]), 10.0);

    assert_eq!(shipload.get("A"), Some(&125));
    assert_eq!(shipload.get("C"), Some(&1));
    assert!(!shipload.contains_key("B"), "0.5 units rounds down to nothing");
}

#[test]
fn test_empty_shipload_suppresses_task() {
    let stock = stock(&[]);
    let task = build_task(ShippingTaskType::Export, &rates(&[("A", 0.01)]), wcb(50.0), &ctx(&stock));
    assert!(task.is_none());
}

#[test]
fn test_import_due_uses_floor_of_earliest_exhaustion() {
    // Shipload A=100, B=100; A lasts (255-100)/10 = 15.5 days, B (300-100)/10 = 20
    let rates = rates(&[("A", 10.0), ("B", 10.0)]);
    let stock = stock(&[("A", 255.0), ("B", 300.0)]);

    let task = build_task(ShippingTaskType::Import, &rates, wcb(10.0), &ctx(&stock)).unwrap();

    assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2026, 3, 16).unwrap());
    assert_eq!(task.task_type(), ShippingTaskType::Import);
    assert_eq!(task.ship_class(), ShipClass::Wcb);
    assert_eq!(task.planet_id(), "XY-123a");
    assert_eq!(task.planet_name(), "Vulcan");
}

#[test]
fn test_import_short_circuits_when_any_material_is_low() {
    let rates = rates(&[("A", 10.0), ("B", 10.0)]);
    let stock = stock(&[("A", 1000.0), ("B", 50.0)]);
    let shipload = size_shipload(&rates, 10.0);

    assert_eq!(days_until_due(ShippingTaskType::Import, &rates, &shipload, &ctx(&stock)), 0);
}

#[test]
fn test_import_surplus_of_exactly_zero_is_due_now() {
    let rates = rates(&[("A", 10.0)]);
    let stock = stock(&[("A", 100.0)]);
    let shipload = size_shipload(&rates, 10.0);

    assert_eq!(days_until_due(ShippingTaskType::Import, &rates, &shipload, &ctx(&stock)), 0);
}

#[test]
fn test_import_with_missing_stock_is_due_now() {
    let stock = stock(&[]);
    let task = build_task(ShippingTaskType::Import, &rates(&[("A", 10.0)]), wcb(10.0), &ctx(&stock)).unwrap();
    assert_eq!(task.due_date(), today());
}

#[test]
fn test_export_due_uses_ceil_of_slowest_fill() {
    // Shipload A=100, B=40; A needs 5/10 = 0.5 days, B needs 39/4 = 9.75 days
    let rates = rates(&[("A", 10.0), ("B", 4.0)]);
    let stock = stock(&[("A", 95.0), ("B", 1.0)]);

    let task = build_task(ShippingTaskType::Export, &rates, wcb(10.0), &ctx(&stock)).unwrap();

    assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());
    assert_eq!(task.materials().get("A"), Some(&100));
    assert_eq!(task.materials().get("B"), Some(&40));
}

#[test]
fn test_export_ignores_materials_already_covered() {
    let rates = rates(&[("A", 10.0), ("B", 4.0)]);
    let stock = stock(&[("A", 500.0), ("B", 38.0)]);
    let shipload = size_shipload(&rates, 10.0);

    // Only B is short: 2/4 = 0.5 -> 1 day
    assert_eq!(days_until_due(ShippingTaskType::Export, &rates, &shipload, &ctx(&stock)), 1);
}

#[test]
fn test_export_fully_stocked_is_due_today() {
    let rates = rates(&[("A", 10.0)]);
    let stock = stock(&[("A", 9999.0)]);

    let task = build_task(ShippingTaskType::Export, &rates, wcb(10.0), &ctx(&stock)).unwrap();
    assert_eq!(task.due_date(), today());
}

#[test]
fn test_rounding_asymmetry_between_directions() {
    // Same 2.5-day margin: import floors to 2, export ceils to 3
    let rates = rates(&[("A", 10.0)]);
    let shipload = size_shipload(&rates, 10.0);

    let import_stock = stock(&[("A", 125.0)]);
    let export_stock = stock(&[("A", 75.0)]);

    assert_eq!(days_until_due(ShippingTaskType::Import, &rates, &shipload, &ctx(&import_stock)), 2);
    assert_eq!(days_until_due(ShippingTaskType::Export, &rates, &shipload, &ctx(&export_stock)), 3);
}

#[test]
fn test_task_serializes_for_export() {
    let stock = stock(&[]);
    let task = build_task(ShippingTaskType::Export, &rates(&[("AL", 100.0)]), wcb(10.0), &ctx(&stock)).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["type"], "export");
    assert_eq!(json["shipClass"], "WCB");
    assert_eq!(json["planetName"], "Vulcan");
    assert_eq!(json["planetId"], "XY-123a");
    assert_eq!(json["materials"]["AL"], 1000);
    assert_eq!(json["dueDate"], "2026-03-11");
}
