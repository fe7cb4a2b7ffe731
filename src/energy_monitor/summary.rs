use crate::prelude::*;

/// aggregated current values, as delivered by the data service. `None` = no reading
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Summary {
    pub production: ProductionSummary,
    pub consumption: ConsumptionSummary,
    pub grid: GridSummary,
    pub storage: StorageSummary,
    pub system: SystemSummary,
}
impl Summary {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// parse a sample, treating anything malformed as "no data"
    pub fn from_json_or_none(json: &str) -> Option<Self> {
        Self::from_json(json)
            .log_error_message("unreadable sample, showing no data")
            .ok()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductionSummary {
    /// negative when the inverter is pulling power
    pub active_power: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsumptionSummary {
    pub active_power: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridSummary {
    pub buy_active_power: Option<f32>,
    pub sell_active_power: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageSummary {
    pub soc: Option<f32>,
    pub charge_active_power: Option<f32>,
    pub discharge_active_power: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemSummary {
    /// everything flowing into the system
    pub in_power: Option<f32>,
    /// everything flowing out of the system
    pub out_power: Option<f32>,
}

/// denominators shared by every section, worked out once per sample.
/// zeros are left alone, the sections cope with the resulting NaN/inf
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlowTotals {
    pub in_power: f32,
    pub out_power: f32,
    /// |production| + grid buy + storage discharge
    pub producers_absolute: f32,
    /// |consumption| + grid sell + storage charge
    pub consumers_absolute: f32,
}
impl FlowTotals {
    pub fn from_summary(summary: &Summary) -> Self {
        fn abs(v: Option<f32>) -> f32 { v.unwrap_or_default().abs() }

        Self {
            in_power: summary.system.in_power.unwrap_or_default(),
            out_power: summary.system.out_power.unwrap_or_default(),
            producers_absolute: abs(summary.production.active_power)
                + abs(summary.grid.buy_active_power)
                + abs(summary.storage.discharge_active_power),
            consumers_absolute: abs(summary.consumption.active_power)
                + abs(summary.grid.sell_active_power)
                + abs(summary.storage.charge_active_power),
        }
    }
}
