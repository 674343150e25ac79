// Per-planet shipping plan and the merged, prioritised task list
use chrono::NaiveDate;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

use crate::client::FioSource;
use crate::error::Result;
use crate::models::{ProductionLine, ShippingTask, ShippingTaskType, Storage};
use crate::operations::net_flow::resolve_net_flows;
use crate::operations::rates::{daily_rates, SkippedOrder};
use crate::operations::ship_selector::select_ship_class;
use crate::operations::task_builder::{build_task, PlanetContext};
use crate::registry::MaterialRegistry;

pub const DEFAULT_MAX_CONCURRENT_PLANETS: usize = 4;

/// Tasks of one planet plus the orders that were left out of its rates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetPlan {
    /// Import first, then export
    pub tasks: Vec<ShippingTask>,
    pub skipped_orders: Vec<SkippedOrder>,
}

/// Derive the import and export task of a single planet from its production
/// lines and storage. Pure: the same inputs always give the same plan.
pub fn plan_planet(
    planet_id: &str,
    lines: &[ProductionLine],
    storage: &Storage,
    registry: &MaterialRegistry,
    today: NaiveDate,
) -> Result<PlanetPlan> {
    let Some(first_line) = lines.first() else {
        return Ok(PlanetPlan::default());
    };

    let rates = daily_rates(lines);
    let flows = resolve_net_flows(&rates);
    let stock = storage.stock_by_ticker();
    let ctx = PlanetContext {
        planet_id,
        planet_name: &first_line.planet_name,
        stock: &stock,
        today,
    };

    let mut tasks = Vec::with_capacity(2);
    for (task_type, flow) in [
        (ShippingTaskType::Import, &flows.net_consumption),
        (ShippingTaskType::Export, &flows.net_production),
    ] {
        if flow.is_empty() {
            continue;
        }
        let Some(selection) = select_ship_class(flow, registry)? else {
            continue;
        };
        if let Some(task) = build_task(task_type, flow, selection, &ctx) {
            tasks.push(task);
        }
    }

    Ok(PlanetPlan {
        tasks,
        skipped_orders: rates.skipped_orders,
    })
}

/// Earliest due date first; on the same day imports go before exports.
/// Stable, so remaining ties keep their incoming order.
pub fn sort_tasks(tasks: &mut [ShippingTask]) {
    tasks.sort_by(|a, b| {
        a.due_date()
            .cmp(&b.due_date())
            .then_with(|| a.task_type().cmp(&b.task_type()))
    });
}

pub struct ShippingCalculator {
    source: Arc<dyn FioSource>,
    registry: Arc<MaterialRegistry>,
    today: NaiveDate,
    max_concurrent_planets: usize,
}

impl ShippingCalculator {
    pub fn new(source: Arc<dyn FioSource>, registry: Arc<MaterialRegistry>, today: NaiveDate) -> Self {
        Self {
            source,
            registry,
            today,
            max_concurrent_planets: DEFAULT_MAX_CONCURRENT_PLANETS,
        }
    }

    /// Build the registry from `source` first, then the calculator on top of it.
    pub async fn load(source: Arc<dyn FioSource>, today: NaiveDate) -> Result<Self> {
        let registry = MaterialRegistry::load(source.as_ref()).await?;
        Ok(Self::new(source, Arc::new(registry), today))
    }

    pub fn with_max_concurrent_planets(mut self, limit: usize) -> Self {
        self.max_concurrent_planets = limit.max(1);
        self
    }

    pub async fn calculate_for_planet(&self, planet_id: &str) -> Result<Vec<ShippingTask>> {
        let lines = self.source.get_production_lines(planet_id).await?;
        if lines.is_empty() {
            tracing::debug!("🪐 {}: no production lines", planet_id);
            return Ok(Vec::new());
        }

        let storage = self.source.get_storage(planet_id).await?;
        let plan = plan_planet(planet_id, &lines, &storage, &self.registry, self.today)?;
        if !plan.skipped_orders.is_empty() {
            tracing::warn!(
                "⚠️ {}: {} production order(s) left out of the daily rates",
                planet_id,
                plan.skipped_orders.len()
            );
        }
        let tasks = plan.tasks;

        tracing::info!(
            "🪐 {} ({}): {} task(s) from {} production line(s)",
            planet_id,
            lines[0].planet_name,
            tasks.len(),
            lines.len()
        );
        Ok(tasks)
    }

    pub async fn calculate_all_tasks(&self) -> Result<Vec<ShippingTask>> {
        let planets = self.source.get_player_planets().await?;
        tracing::info!("🌍 Calculating shipping tasks for {} planet(s)", planets.len());

        let per_planet: Vec<Vec<ShippingTask>> = stream::iter(planets.iter())
            .map(|planet_id| self.calculate_for_planet(planet_id))
            .buffered(self.max_concurrent_planets)
            .try_collect()
            .await?;

        let mut tasks: Vec<ShippingTask> = per_planet.into_iter().flatten().collect();
        sort_tasks(&mut tasks);
        Ok(tasks)
    }
}
