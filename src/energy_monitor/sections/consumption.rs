use crate::prelude::*;

/// right quadrant. consumption only ever pulls energy out of the center
#[derive(Copy, Clone, Debug, Default)]
pub struct ConsumptionSection;

impl SectionPolicy for ConsumptionSection {
    fn name(&self) -> &'static str { "consumption" }
    fn label(&self) -> &'static str { "Consumption" }
    fn image_path(&self) -> &'static str { "assets/img/consumption.png" }
    fn gradient(&self) -> GradientDirection { GradientDirection::LEFT_TO_RIGHT }

    fn square_position(&self, square: &SquareBlock, inner_radius: f32, margin: f32) -> SquarePosition {
        SquarePosition::new(inner_radius - margin - square.length, -square.length / 2.0)
    }

    fn flow_shape(&self, intensity: f32, r: f32) -> FlowShape {
        let v = intensity.abs();
        let shape = FlowShape::quad(
            Vector2::new(v, -v),
            Vector2::new(r, -v),
            Vector2::new(r, v),
            Vector2::new(v, v),
        );

        if intensity < 0.0 {
            // left, into the center
            shape.horizontal(Vector2::new(0.0, 0.0), Vector2::new(r - v, 0.0))
        } else {
            // right, out of the center
            shape.horizontal(Vector2::new(2.0 * v, 0.0), Vector2::new(r + v, 0.0))
        }
    }
}

impl Section<ConsumptionSection> {
    pub fn consumption() -> Self {
        Section::new(ConsumptionSection, 46.0, 134.0, Color::CONSUMPTION)
    }

    /// consumption as a share of everything flowing out of the system
    pub fn update_consumption(&mut self, power: Option<f32>, totals: &FlowTotals) {
        self.update_value(
            power,
            power.map(|p| p / totals.out_power * 100.0),
            power.map(|p| p / totals.consumers_absolute),
        );
    }
}
