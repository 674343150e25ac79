// Steady-state daily rates from recurring production orders
use std::collections::BTreeMap;

use crate::models::ProductionLine;
use crate::MS_PER_DAY;

/// An order that qualified for rate aggregation but carried an unusable
/// cycle duration, so it contributed nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedOrder {
    pub planet_id: String,
    pub line_type: String,
    pub order_index: usize,
    pub duration_ms: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyRates {
    /// Units consumed per day, by ticker
    pub consumption: BTreeMap<String, f64>,
    /// Units produced per day, by ticker
    pub production: BTreeMap<String, f64>,
    pub skipped_orders: Vec<SkippedOrder>,
}

impl DailyRates {
    pub fn consumption_of(&self, ticker: &str) -> f64 {
        self.consumption.get(ticker).copied().unwrap_or(0.0)
    }

    pub fn production_of(&self, ticker: &str) -> f64 {
        self.production.get(ticker).copied().unwrap_or(0.0)
    }
}

pub fn daily_rates(lines: &[ProductionLine]) -> DailyRates {
    let mut rates = DailyRates::default();

    for line in lines {
        for (order_index, order) in line.orders.iter().enumerate() {
            if !order.contributes_to_rates() {
                continue;
            }

            if order.duration_ms <= 0 {
                tracing::warn!(
                    "⚠️ Skipping {} order #{} on {}: non-positive duration {}ms",
                    line.line_type,
                    order_index,
                    line.planet_natural_id,
                    order.duration_ms
                );
                rates.skipped_orders.push(SkippedOrder {
                    planet_id: line.planet_natural_id.clone(),
                    line_type: line.line_type.clone(),
                    order_index,
                    duration_ms: order.duration_ms,
                });
                continue;
            }

            let cycles_per_day = MS_PER_DAY / order.duration_ms as f64;

            for input in &order.inputs {
                *rates.consumption.entry(input.ticker.clone()).or_insert(0.0) += input.amount * cycles_per_day;
            }
            for output in &order.outputs {
                *rates.production.entry(output.ticker.clone()).or_insert(0.0) += output.amount * cycles_per_day;
            }
        }
    }

    rates
}
