// Ship class selection by days of autonomy
use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::ShipClass;
use crate::registry::MaterialRegistry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyLoad {
    /// t per day
    pub weight: f64,
    /// m³ per day
    pub volume: f64,
}

impl DailyLoad {
    pub fn of(rates: &BTreeMap<String, f64>, registry: &MaterialRegistry) -> Result<Self> {
        let mut load = DailyLoad { weight: 0.0, volume: 0.0 };
        for (ticker, rate) in rates {
            let material = registry.get(ticker)?;
            load.weight += rate * material.weight;
            load.volume += rate * material.volume;
        }
        Ok(load)
    }

    /// Days until the tighter of the two capacities of `ship_class` is used up.
    pub fn days_fit(&self, ship_class: ShipClass) -> f64 {
        (ship_class.weight_capacity() / self.weight).min(ship_class.volume_capacity() / self.volume)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipSelection {
    pub ship_class: ShipClass,
    pub days_fit: f64,
}

/// Pick the class that can carry the longest stretch of `rates`.
///
/// Classes are tried in [`ShipClass::ALL`] order and only a strictly longer
/// autonomy replaces the current pick. Returns `None` when the daily weight or
/// volume is not positive.
pub fn select_ship_class(rates: &BTreeMap<String, f64>, registry: &MaterialRegistry) -> Result<Option<ShipSelection>> {
    let load = DailyLoad::of(rates, registry)?;
    if load.weight <= 0.0 || load.volume <= 0.0 {
        return Ok(None);
    }

    let mut best: Option<ShipSelection> = None;
    let mut best_days_fit = 0.0;

    for ship_class in ShipClass::ALL {
        let days_fit = load.days_fit(ship_class);
        tracing::trace!("{}: {:.2} days", ship_class, days_fit);
        if days_fit > best_days_fit {
            best_days_fit = days_fit;
            best = Some(ShipSelection { ship_class, days_fit });
        }
    }

    if let Some(selection) = &best {
        tracing::debug!(
            "🚢 {} selected: {:.2} days for {:.1}t / {:.1}m³ per day",
            selection.ship_class,
            selection.days_fit,
            load.weight,
            load.volume
        );
    }

    Ok(best)
}
