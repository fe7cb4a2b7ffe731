use crate::prelude::*;

/// points of a polygon nobody can see
pub const HIDDEN_POINTS: &str = "0,0 0,0";

/// animation driver for the flow arrows.
/// `One` and `Two` alternate while the arrow pulses, `Three` is hidden
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowState {
    #[default]
    One,
    Two,
    Three,
}
impl FlowState {
    /// next state of the pulse animation
    pub fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            _ => Self::One,
        }
    }
}
impl Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Two => write!(f, "two"),
            Self::Three => write!(f, "three"),
        }
    }
}

/// the arrow drawn between a section and the center of the chart
#[derive(Clone, Debug, PartialEq)]
pub struct FlowPolygon {
    /// how far the arrow may reach from the center
    pub radius: f32,
    pub gradient: GradientDirection,
    points: String,
    state: FlowState,
}
impl FlowPolygon {
    pub fn new(radius: f32, gradient: GradientDirection) -> Self {
        Self {
            radius,
            gradient,
            points: HIDDEN_POINTS.to_owned(),
            state: FlowState::default(),
        }
    }

    pub fn points(&self) -> &str { &self.points }
    pub fn state(&self) -> FlowState { self.state }

    /// rebuild the svg points. `None` collapses the polygon
    pub fn update(&mut self, shape: Option<&FlowShape>) {
        let Some(p) = shape else {
            self.points = HIDDEN_POINTS.to_owned();
            return;
        };

        let corners = [
            Some(p.top_left),
            p.middle_top,
            Some(p.top_right),
            p.middle_right,
            Some(p.bottom_right),
            p.middle_bottom,
            Some(p.bottom_left),
            p.middle_left,
        ];

        self.points = corners
            .into_iter()
            .flatten()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
    }

    pub fn switch_state(&mut self) {
        self.state = self.state.next();
    }

    pub fn hide(&mut self) {
        self.state = FlowState::Three;
    }
}
