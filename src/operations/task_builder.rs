// Shipload sizing and due date calculation for one direction of one planet
use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, HashMap};

use crate::models::{ShippingTask, ShippingTaskType};
use crate::operations::ship_selector::ShipSelection;

/// Planet-level inputs shared by the import and export task of a planet.
#[derive(Debug, Clone, Copy)]
pub struct PlanetContext<'a> {
    pub planet_id: &'a str,
    pub planet_name: &'a str,
    pub stock: &'a HashMap<String, f64>,
    pub today: NaiveDate,
}

impl PlanetContext<'_> {
    fn stock_of(&self, ticker: &str) -> f64 {
        self.stock.get(ticker).copied().unwrap_or(0.0)
    }
}

/// Whole units per ticker that fit into `days_fit` days of flow. Tickers that
/// round down to zero are left out.
pub fn size_shipload(rates: &BTreeMap<String, f64>, days_fit: f64) -> BTreeMap<String, u64> {
    rates
        .iter()
        .filter_map(|(ticker, rate)| {
            let units = (rate * days_fit).floor();
            (units >= 1.0).then(|| (ticker.clone(), units as u64))
        })
        .collect()
}

/// Whole days from today until the shipment has to leave.
///
/// Imports are due when the first material would dip below one shipload
/// (floored, and immediately if any already has). Exports are due once the
/// slowest material has accumulated a full shipload (ceiled).
pub fn days_until_due(
    task_type: ShippingTaskType,
    rates: &BTreeMap<String, f64>,
    shipload: &BTreeMap<String, u64>,
    ctx: &PlanetContext<'_>,
) -> u64 {
    let loaded = |ticker: &str| shipload.get(ticker).copied().unwrap_or(0) as f64;

    let days = match task_type {
        ShippingTaskType::Import => {
            let mut days_until_due = f64::MAX;
            for (ticker, rate) in rates.iter().filter(|(_, rate)| **rate > 0.0) {
                let surplus = ctx.stock_of(ticker) - loaded(ticker);
                if surplus <= 0.0 {
                    days_until_due = 0.0;
                    break;
                }
                days_until_due = days_until_due.min(surplus / rate);
            }
            days_until_due.floor()
        }
        ShippingTaskType::Export => {
            let mut days_until_due: f64 = 0.0;
            for (ticker, rate) in rates {
                let remaining = loaded(ticker) - ctx.stock_of(ticker);
                if remaining <= 0.0 {
                    continue;
                }
                days_until_due = days_until_due.max(remaining / rate);
            }
            days_until_due.ceil()
        }
    };

    days.max(0.0) as u64
}

/// Build the task for one direction, or `None` if no material makes up a
/// whole unit within the selected ship's autonomy.
pub fn build_task(
    task_type: ShippingTaskType,
    rates: &BTreeMap<String, f64>,
    selection: ShipSelection,
    ctx: &PlanetContext<'_>,
) -> Option<ShippingTask> {
    let shipload = size_shipload(rates, selection.days_fit);
    if shipload.is_empty() {
        tracing::debug!("{} {}: shipload rounds to nothing, no task", ctx.planet_id, task_type);
        return None;
    }

    let days = days_until_due(task_type, rates, &shipload, ctx);
    let due_date = ctx
        .today
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);

    Some(ShippingTask::new(
        task_type,
        selection.ship_class,
        ctx.planet_name.to_string(),
        ctx.planet_id.to_string(),
        shipload,
        due_date,
    ))
}
