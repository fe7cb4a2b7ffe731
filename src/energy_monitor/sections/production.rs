use crate::prelude::*;

/// top quadrant. positive flow points towards the center, negative production (backfeed) points away
#[derive(Copy, Clone, Debug, Default)]
pub struct ProductionSection;

impl SectionPolicy for ProductionSection {
    fn name(&self) -> &'static str { "production" }
    fn label(&self) -> &'static str { "Production" }
    fn image_path(&self) -> &'static str { "assets/img/production.png" }
    fn gradient(&self) -> GradientDirection { GradientDirection::TOP_TO_BOTTOM }

    fn square_position(&self, square: &SquareBlock, inner_radius: f32, margin: f32) -> SquarePosition {
        SquarePosition::new(-square.length / 2.0, -(inner_radius - margin))
    }

    fn flow_shape(&self, intensity: f32, r: f32) -> FlowShape {
        let v = intensity.abs();
        let shape = FlowShape::quad(
            Vector2::new(-v, -r),
            Vector2::new(v, -r),
            Vector2::new(v, -v),
            Vector2::new(-v, -v),
        );

        if intensity > 0.0 {
            // down, into the center
            shape.vertical(Vector2::new(0.0, -r + v), Vector2::new(0.0, 0.0))
        } else {
            // up, out of the center
            shape.vertical(Vector2::new(0.0, -r - v), Vector2::new(0.0, -2.0 * v))
        }
    }
}

impl Section<ProductionSection> {
    pub fn production() -> Self {
        Section::new(ProductionSection, 316.0, 404.0, Color::PRODUCTION)
    }

    /// production as a share of everything flowing into the system
    pub fn update_production(&mut self, power: Option<f32>, totals: &FlowTotals) {
        self.update_value(
            power,
            power.map(|p| p / totals.in_power * 100.0),
            power.map(|p| p / totals.producers_absolute),
        );
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fill_angle_follows_ratio() {
        let mut section = Section::production();
        section.update(100.0, 70.0, 300.0, 300.0);
        section.update_value(Some(800.0), Some(40.0), Some(0.6));

        let arc = section.value_arc();
        assert_eq!(arc.start_angle, 316.0);
        assert!((arc.end_angle - (316.0 + 88.0 * 0.4)).abs() < 0.001);
        assert_eq!(arc.outer_radius, 100.0);
        assert_eq!(arc.inner_radius, 70.0);
        assert_eq!(section.value_text(), "800 W");
    }

    #[test]
    fn flow_points_into_center() {
        let mut section = Section::production();
        section.update(100.0, 70.0, 300.0, 300.0);
        // 70 - 14 (icon y) - 14 (icon size) - 10
        assert_eq!(section.flow().radius, 32.0);

        section.update_value(Some(800.0), Some(40.0), Some(0.6));
        assert_eq!(section.flow().points(), "-6,-32 0,-26 6,-32 6,-6 0,0 -6,-6");
    }

    #[test]
    fn backfeed_reverses_flow() {
        let mut section = Section::production();
        section.update(100.0, 70.0, 300.0, 300.0);
        section.update_value(Some(-200.0), Some(-10.0), Some(-0.2));

        assert_eq!(section.flow().points(), "-2,-32 0,-34 2,-32 2,-2 0,-4 -2,-2");
        // negative ratios dont fill anything
        assert_eq!(section.value_arc().span(), 0.0);
        assert_eq!(section.value_text(), "-200 W");
    }

    #[test]
    fn zero_flow_has_no_width() {
        let mut section = Section::production();
        section.update(100.0, 70.0, 300.0, 300.0);
        section.update_value(Some(0.0), Some(0.0), Some(0.0));

        assert_eq!(section.flow().points(), "0,-32 0,-32 0,-32 0,0 0,0 0,0");
    }

    #[test]
    fn square_sits_at_the_top() {
        let mut section = Section::production();
        section.update(100.0, 70.0, 300.0, 300.0);
        assert_eq!(section.square_position(), SquarePosition::new(-14.0, -65.0));
    }
}
