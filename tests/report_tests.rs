use chrono::NaiveDate;

use fio_shipping::report::{due_label, materials_summary, parse_date, task_line};
use fio_shipping::{
    plan_planet, Material, MaterialRegistry, ProductionLine, ProductionOrder, RecipeIo, ShippingError, Storage,
};

fn today() -> NaiveDate {
    // A Sunday
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

fn days(n: i64) -> NaiveDate {
    today() + chrono::Duration::days(n)
}

#[test]
fn test_parse_date_accepts_iso_dates() {
    assert_eq!(parse_date("2026-03-01").unwrap(), today());
}

#[test]
fn test_parse_date_rejects_malformed_input() {
    for raw in ["01.03.2026", "2026-13-01", "2026-02-30", "tomorrow", ""] {
        let err = parse_date(raw).unwrap_err();
        assert!(
            matches!(err, ShippingError::InvalidDate(ref value) if value == raw),
            "'{}' should be rejected as an invalid date",
            raw
        );
    }
    assert_eq!(
        parse_date("03/01/2026").unwrap_err().to_string(),
        "invalid date '03/01/2026', expected YYYY-MM-DD"
    );
}

#[test]
fn test_due_label_boundaries() {
    assert_eq!(due_label(days(-3), today()), "today", "Overdue tasks read as today");
    assert_eq!(due_label(days(0), today()), "today");
    assert_eq!(due_label(days(1), today()), "tomorrow");
    assert_eq!(due_label(days(2), today()), "Tuesday");
    assert_eq!(due_label(days(6), today()), "Saturday");
    assert_eq!(due_label(days(7), today()), "2026-03-08");
}

#[test]
fn test_task_line_renders_import_and_export() {
    let registry = MaterialRegistry::from_materials(vec![
        Material::new("FE", "Iron", 7.8, 1.0),
        Material::new("STL", "Steel", 7.8, 1.0),
    ]);
    let lines = vec![ProductionLine::new(
        "XY-123a",
        "Vulcan",
        "factory",
        vec![ProductionOrder::recurring(
            vec![RecipeIo::new("FE", 20.0)],
            vec![RecipeIo::new("STL", 10.0)],
            86_400_000,
        )],
    )];

    let tasks = plan_planet("XY-123a", &lines, &Storage::default(), &registry, today())
        .unwrap()
        .tasks;
    assert_eq!(tasks.len(), 2);

    assert_eq!(materials_summary(&tasks[0]), "384 FE");
    assert_eq!(task_line(&tasks[0], today()), "today      IMPORT WCB Vulcan (XY-123a): 384 FE");
    assert_eq!(task_line(&tasks[1], today()), "2026-04-09 EXPORT WCB Vulcan (XY-123a): 384 STL");
}
