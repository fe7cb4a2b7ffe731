use crate::prelude::*;

/// the four sections of the energy monitor, kept in sync with the viewport and the latest sample
pub struct EnergyMonitorChart {
    settings: ChartSettings,

    size: Vector2,
    outer_radius: f32,
    inner_radius: f32,

    production: Section<ProductionSection>,
    consumption: Section<ConsumptionSection>,
    grid: Section<GridSection>,
    storage: Section<StorageSection>,
}
impl EnergyMonitorChart {
    pub fn new(settings: ChartSettings) -> Self {
        let square_margin = settings.square_margin;
        let flow_margin = settings.flow_margin;

        Self {
            size: Vector2::ZERO,
            outer_radius: 0.0,
            inner_radius: 0.0,

            production: Section::production().margins(square_margin, flow_margin),
            consumption: Section::consumption().margins(square_margin, flow_margin),
            grid: Section::grid().margins(square_margin, flow_margin),
            storage: Section::storage().margins(square_margin, flow_margin),

            settings,
        }
    }

    /// fit the chart into a new viewport. every section gets the same radii so the rings stay concentric.
    /// a size that isnt finite keeps the last geometry
    pub fn on_resize(&mut self, size: Vector2) {
        if !size.is_finite() {
            warn!("ignoring viewport size {size}");
            return;
        }

        let outer_radius = (size.min_component() / 2.0).max(0.0);
        let inner_radius = outer_radius * (1.0 - self.settings.ring_thickness);
        debug!("energy monitor resized to {}x{}, radius {outer_radius}", size.x, size.y);

        self.size = size;
        self.outer_radius = outer_radius;
        self.inner_radius = inner_radius;

        let (height, width) = (size.y, size.x);
        self.production.update(outer_radius, inner_radius, height, width);
        self.consumption.update(outer_radius, inner_radius, height, width);
        self.grid.update(outer_radius, inner_radius, height, width);
        self.storage.update(outer_radius, inner_radius, height, width);
    }

    /// push a new sample to every section. `None` means there's no data (yet)
    pub fn on_new_sample(&mut self, summary: Option<&Summary>) {
        let Some(summary) = summary else {
            trace!("no data, clearing energy monitor");
            self.production.clear();
            self.consumption.clear();
            self.grid.clear();
            self.storage.clear();
            return;
        };

        let totals = FlowTotals::from_summary(summary);
        trace!("new energy monitor sample: {totals:?}");

        self.production.update_production(summary.production.active_power, &totals);
        self.consumption.update_consumption(summary.consumption.active_power, &totals);
        self.grid.update_grid(summary.grid.buy_active_power, summary.grid.sell_active_power, &totals);
        self.storage.update_storage(
            summary.storage.charge_active_power,
            summary.storage.discharge_active_power,
            summary.storage.soc,
            &totals,
        );
    }

    /// same as `on_new_sample`, for data that still needs parsing
    pub fn on_sample_json(&mut self, json: &str) {
        let summary = Summary::from_json_or_none(json);
        self.on_new_sample(summary.as_ref());
    }

    /// advance the pulse animation of every flow arrow
    pub fn switch_flow_states(&mut self) {
        self.production.flow_mut().switch_state();
        self.consumption.flow_mut().switch_state();
        self.grid.flow_mut().switch_state();
        self.storage.flow_mut().switch_state();
    }

    pub fn hide_flows(&mut self) {
        self.production.flow_mut().hide();
        self.consumption.flow_mut().hide();
        self.grid.flow_mut().hide();
        self.storage.flow_mut().hide();
    }

    pub fn settings(&self) -> &ChartSettings { &self.settings }
    pub fn size(&self) -> Vector2 { self.size }
    pub fn radii(&self) -> (f32, f32) { (self.outer_radius, self.inner_radius) }

    pub fn production(&self) -> &Section<ProductionSection> { &self.production }
    pub fn consumption(&self) -> &Section<ConsumptionSection> { &self.consumption }
    pub fn grid(&self) -> &Section<GridSection> { &self.grid }
    pub fn storage(&self) -> &Section<StorageSection> { &self.storage }

    /// production, consumption, grid, storage
    pub fn views(&self) -> [SectionView; 4] {
        [
            self.production.view(),
            self.consumption.view(),
            self.grid.view(),
            self.storage.view(),
        ]
    }
}
impl Default for EnergyMonitorChart {
    fn default() -> Self {
        Self::new(ChartSettings::default())
    }
}
