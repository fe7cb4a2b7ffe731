use crate::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum StorageState {
    Charge,
    Discharge,
    #[default]
    Idle,
}

/// battery icon for a state of charge. unknown counts as empty
pub fn storage_image(soc: Option<f32>) -> &'static str {
    let soc = soc.filter(|s| !s.is_nan()).unwrap_or_default();

    if soc < 20.0 {
        "assets/img/storage_20.png"
    } else if soc < 40.0 {
        "assets/img/storage_40.png"
    } else if soc < 60.0 {
        "assets/img/storage_60.png"
    } else if soc < 86.0 {
        "assets/img/storage_80.png"
    } else {
        "assets/img/storage_100.png"
    }
}

/// bottom quadrant. the arc shows the state of charge, the arrow points down while charging
#[derive(Copy, Clone, Debug, Default)]
pub struct StorageSection {
    pub soc: Option<f32>,
    pub state: StorageState,
}

impl SectionPolicy for StorageSection {
    fn name(&self) -> &'static str { "storage" }
    fn label(&self) -> &'static str {
        match self.state {
            StorageState::Charge => "Storage charge",
            StorageState::Discharge => "Storage discharge",
            StorageState::Idle => "Storage",
        }
    }
    fn image_path(&self) -> &'static str { storage_image(self.soc) }
    fn gradient(&self) -> GradientDirection { GradientDirection::BOTTOM_TO_TOP }

    fn square_position(&self, square: &SquareBlock, inner_radius: f32, margin: f32) -> SquarePosition {
        SquarePosition::new(-square.length / 2.0, inner_radius - margin - square.length)
    }

    fn flow_shape(&self, intensity: f32, r: f32) -> FlowShape {
        let v = intensity.abs();
        let shape = FlowShape::quad(
            Vector2::new(-v, v),
            Vector2::new(v, v),
            Vector2::new(v, r),
            Vector2::new(-v, r),
        );

        if intensity < 0.0 {
            // discharging, up into the center
            shape.vertical(Vector2::new(0.0, 0.0), Vector2::new(0.0, r - v))
        } else {
            // charging, down out of the center
            shape.vertical(Vector2::new(0.0, 2.0 * v), Vector2::new(0.0, r + v))
        }
    }

    /// state of charge, shown next to the power
    fn secondary_text(&self) -> String {
        match self.soc.filter(|s| !s.is_nan()) {
            Some(soc) => format!("{} %", soc.round() as i64),
            None => String::new(),
        }
    }

    fn reset(&mut self) {
        self.soc = None;
        self.state = StorageState::Idle;
    }
}

impl Section<StorageSection> {
    pub fn storage() -> Self {
        Section::new(StorageSection::default(), 136.0, 224.0, Color::STORAGE)
    }

    pub fn state(&self) -> StorageState { self.policy().state }
    pub fn soc(&self) -> Option<f32> { self.policy().soc }

    /// charging is measured against everything flowing out, discharging against everything flowing in
    pub fn update_storage(&mut self, charge: Option<f32>, discharge: Option<f32>, soc: Option<f32>, totals: &FlowTotals) {
        let charge = charge.unwrap_or_default();
        let discharge = discharge.unwrap_or_default();

        let (state, absolute, share) = if charge > 0.0 {
            (StorageState::Charge, charge, charge / totals.consumers_absolute)
        } else if discharge > 0.0 {
            (StorageState::Discharge, discharge, -(discharge / totals.producers_absolute))
        } else {
            (StorageState::Idle, 0.0, 0.0)
        };

        let policy = self.policy_mut();
        policy.soc = soc;
        policy.state = state;

        self.update_value(Some(absolute), soc, Some(share));
    }
}
