use crate::prelude::*;

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(default)]
pub struct ChartSettings {
    #[serde(skip)]
    pub save_path: String,

    /// how long the window has to stop resizing before the chart is recalculated
    pub resize_debounce_ms: u64,
    /// extra wait after a resize burst before the viewport is measured, so the layout can settle
    pub resize_delay_ms: u64,
    /// thickness of the outer ring, relative to the outer radius
    pub ring_thickness: f32,
    /// gap between a section's icon and the start of its flow arrow
    pub flow_margin: f32,
    /// distance between a section square and the inner edge of the ring
    pub square_margin: f32,
    /// how often the flow arrows pulse
    pub animation_interval_ms: u64,
}
impl ChartSettings {
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let mut s = match std::fs::read_to_string(path).map(|s| serde_json::from_str::<ChartSettings>(&s).map_err(|e| e.to_string())).map_err(|e| e.to_string()) {
            Ok(Ok(settings)) => settings,
            Err(e) | Ok(Err(e)) => {
                warn!("Error reading {}\nLoading defaults, {e}", path.display());
                Self::default()
            }
        };
        s.save_path = path.to_string_lossy().to_string();

        s
    }

    pub fn save(&self) -> ChartResult {
        self.save_to(&self.save_path)
    }
    pub fn save_to(&self, path: impl AsRef<Path>) -> ChartResult {
        debug!("Saving chart settings");
        let str = serde_json::to_string_pretty(self)?;
        std::fs::write(path, str)?;
        trace!("chart settings saved successfully");
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration { Duration::from_millis(self.resize_debounce_ms) }
    pub fn resize_delay(&self) -> Duration { Duration::from_millis(self.resize_delay_ms) }
    pub fn animation_interval(&self) -> Duration { Duration::from_millis(self.animation_interval_ms) }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            save_path: SETTINGS_FILE.to_owned(),

            resize_debounce_ms: 200,
            resize_delay_ms: 100,
            ring_thickness: 0.1378,
            flow_margin: 10.0,
            square_margin: 5.0,
            animation_interval_ms: 1000,
        }
    }
}
