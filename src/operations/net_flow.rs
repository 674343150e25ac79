use std::collections::{BTreeMap, BTreeSet};

use crate::operations::rates::DailyRates;

/// Per-ticker balance after netting production against consumption.
/// A ticker is in at most one of the two maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetFlows {
    /// Daily shortfall that has to be imported
    pub net_consumption: BTreeMap<String, f64>,
    /// Daily surplus that has to be exported
    pub net_production: BTreeMap<String, f64>,
}

pub fn resolve_net_flows(rates: &DailyRates) -> NetFlows {
    let tickers: BTreeSet<&String> = rates.consumption.keys().chain(rates.production.keys()).collect();
    let mut flows = NetFlows::default();

    for ticker in tickers {
        let net = rates.production_of(ticker) - rates.consumption_of(ticker);
        if net < 0.0 {
            flows.net_consumption.insert(ticker.clone(), -net);
        } else if net > 0.0 {
            flows.net_production.insert(ticker.clone(), net);
        }
    }

    flows
}
