use crate::prelude::*;

/// which way energy is moving across the grid connection
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum GridState {
    Buy,
    Sell,
    #[default]
    Neutral,
}
impl GridState {
    /// whichever of buy and sell is currently flowing wins
    pub fn from_powers(buy: Option<f32>, sell: Option<f32>) -> Self {
        if buy.unwrap_or_default() > 0.0 {
            Self::Buy
        } else if sell.unwrap_or_default() > 0.0 {
            Self::Sell
        } else {
            Self::Neutral
        }
    }
}

/// left quadrant. the arc fills from its middle, up for buying and down for selling
#[derive(Copy, Clone, Debug, Default)]
pub struct GridSection {
    pub state: GridState,
}

impl SectionPolicy for GridSection {
    fn name(&self) -> &'static str { "grid" }
    fn label(&self) -> &'static str {
        match self.state {
            GridState::Buy => "Grid buy",
            GridState::Sell => "Grid sell",
            GridState::Neutral => "Grid",
        }
    }
    fn image_path(&self) -> &'static str { "assets/img/grid.png" }
    fn gradient(&self) -> GradientDirection { GradientDirection::RIGHT_TO_LEFT }

    fn square_position(&self, square: &SquareBlock, inner_radius: f32, margin: f32) -> SquarePosition {
        SquarePosition::new(-(inner_radius - margin), -square.length / 2.0)
    }

    fn flow_shape(&self, intensity: f32, r: f32) -> FlowShape {
        let v = intensity.abs();
        let shape = FlowShape::quad(
            Vector2::new(-r, -v),
            Vector2::new(-v, -v),
            Vector2::new(-v, v),
            Vector2::new(-r, v),
        );

        if intensity < 0.0 {
            // buying, right into the center
            shape.horizontal(Vector2::new(-r + v, 0.0), Vector2::new(0.0, 0.0))
        } else {
            // selling, left out of the center
            shape.horizontal(Vector2::new(-r - v, 0.0), Vector2::new(-2.0 * v, 0.0))
        }
    }

    fn fill_start_angle(&self, start_angle: f32, end_angle: f32) -> f32 {
        (start_angle + end_angle) / 2.0
    }

    /// grid ratios run -100..100, halved onto half of the arc each way.
    /// out of range values stick to the edge instead of dropping to 0
    fn clamp_ratio(&self, ratio: Option<f32>) -> f32 {
        match ratio.filter(|r| !r.is_nan()) {
            Some(r) => (r / 2.0).clamp(-50.0, 50.0),
            None => 0.0,
        }
    }

    fn reset(&mut self) {
        self.state = GridState::Neutral;
    }
}

impl Section<GridSection> {
    pub fn grid() -> Self {
        Section::new(GridSection::default(), 226.0, 314.0, Color::GRID)
    }

    pub fn state(&self) -> GridState { self.policy().state }

    /// buying flows into the system, selling flows out of it
    pub fn update_grid(&mut self, buy: Option<f32>, sell: Option<f32>, totals: &FlowTotals) {
        let state = GridState::from_powers(buy, sell);
        self.policy_mut().state = state;

        match state {
            GridState::Buy => {
                let buy = buy.unwrap_or_default();
                self.update_value(
                    Some(buy),
                    Some(buy / totals.in_power * 100.0),
                    Some(-(buy / totals.producers_absolute)),
                )
            }
            GridState::Sell => {
                let sell = sell.unwrap_or_default();
                self.update_value(
                    Some(sell),
                    Some(-(sell / totals.out_power * 100.0)),
                    Some(sell / totals.consumers_absolute),
                )
            }
            GridState::Neutral => self.update_value(Some(0.0), Some(0.0), Some(0.0)),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn totals() -> FlowTotals {
        FlowTotals {
            in_power: 1000.0,
            out_power: 1000.0,
            producers_absolute: 1000.0,
            consumers_absolute: 600.0,
        }
    }

    fn grid() -> Section<GridSection> {
        let mut section = Section::grid();
        section.update(100.0, 70.0, 300.0, 300.0);
        section
    }

    #[test]
    fn buying() {
        let mut section = grid();
        section.update_grid(Some(500.0), Some(0.0), &totals());

        assert_eq!(section.state(), GridState::Buy);
        assert_eq!(section.label(), "Grid buy");
        assert_eq!(section.value_text(), "500 W");

        let share = section.last_value().system_share.unwrap();
        assert_eq!(share, -0.5);
        // arrow points right, into the center
        assert_eq!(section.flow().points(), "-32,-5 -5,-5 0,0 -5,5 -32,5 -27,0");

        // 50% buy is a quarter of the arc, growing clockwise from the middle
        let arc = section.value_arc();
        assert_eq!(arc.start_angle, 270.0);
        assert_eq!(arc.end_angle, 270.0 + 22.0);
    }

    #[test]
    fn selling() {
        let mut section = grid();
        section.update_grid(Some(0.0), Some(300.0), &totals());

        assert_eq!(section.state(), GridState::Sell);
        assert_eq!(section.label(), "Grid sell");
        assert_eq!(section.value_text(), "300 W");
        assert_eq!(section.last_value().system_share, Some(0.5));

        let arc = section.value_arc();
        assert!(arc.span() < 0.0);
        assert!((arc.end_angle - (270.0 - 88.0 * 0.15)).abs() < 0.001);
    }

    #[test]
    fn neither() {
        let mut section = grid();
        section.update_grid(Some(500.0), None, &totals());
        section.update_grid(Some(0.0), Some(0.0), &totals());

        assert_eq!(section.state(), GridState::Neutral);
        assert_eq!(section.label(), "Grid");
        assert_eq!(section.value_arc().span(), 0.0);
        assert_eq!(section.last_value().system_share, Some(0.0));
        assert_eq!(section.flow().points(), "-32,0 0,0 0,0 0,0 -32,0 -32,0");
    }

    #[test]
    fn ratio_sticks_to_the_edges() {
        let section = grid();
        let policy = section.policy();
        assert_eq!(policy.clamp_ratio(Some(300.0)), 50.0);
        assert_eq!(policy.clamp_ratio(Some(-300.0)), -50.0);
        assert_eq!(policy.clamp_ratio(Some(-40.0)), -20.0);
        assert_eq!(policy.clamp_ratio(Some(f32::NAN)), 0.0);
        assert_eq!(policy.clamp_ratio(None), 0.0);
    }

    #[test]
    fn clear_goes_back_to_neutral() {
        let mut section = grid();
        section.update_grid(Some(500.0), None, &totals());
        section.clear();

        assert_eq!(section.state(), GridState::Neutral);
        assert_eq!(section.value_text(), "");
        assert_eq!(section.flow().points(), HIDDEN_POINTS);
    }
}
