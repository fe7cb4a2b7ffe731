use crate::prelude::*;

/// the last value pushed into a section, kept so a resize can redraw without a new sample
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct SectionValue {
    pub absolute: Option<f32>,
    /// share of the section's arc, in percent
    pub ratio: Option<f32>,
    /// share of the system total, sizes the flow arrow
    pub system_share: Option<f32>,
}

/// clamp a ratio into `[0, 100]`. anything outside (or missing) becomes 0
pub fn clamp_ratio(ratio: Option<f32>) -> f32 {
    match ratio {
        Some(r) if (0.0..=100.0).contains(&r) => r,
        _ => 0.0,
    }
}

/// turn a system share (roughly -1..1) into the arrow's half-width, in `[-10, 10]`.
///
/// `None` (or NaN) means there is nothing to draw
pub fn flow_intensity(system_share: Option<f32>) -> Option<f32> {
    let share = system_share.filter(|s| !s.is_nan())?;
    if share == 0.0 { return Some(0.0) }

    let v = share * 10.0;
    // anything flowing at all gets at least a thin arrow
    let v = if v.abs() < 1.0 { v.signum() } else { v.round() };
    Some(v.clamp(-10.0, 10.0))
}

/// `<value> W`, or nothing if there's no value
pub fn format_power(value: Option<f32>) -> String {
    match value.filter(|v| !v.is_nan()) {
        Some(v) => format!("{} W", v.round() as i64),
        None => String::new(),
    }
}

/// the parts of a section that differ between production, consumption, grid and storage
pub trait SectionPolicy: Send + Sync {
    /// stable identifier, used for svg ids and css classes
    fn name(&self) -> &'static str;
    /// human readable label, may change with the current value
    fn label(&self) -> &'static str;
    fn image_path(&self) -> &'static str;
    fn gradient(&self) -> GradientDirection;

    /// where this section's square goes, depends on which side of the circle it sits on
    fn square_position(&self, square: &SquareBlock, inner_radius: f32, margin: f32) -> SquarePosition;

    /// shape of the arrow for a signed intensity. `intensity == 0` must give a zero-width strip
    fn flow_shape(&self, intensity: f32, radius: f32) -> FlowShape;

    fn init_flow(&self, radius: f32) -> FlowPolygon {
        FlowPolygon::new(radius, self.gradient())
    }

    fn value_text(&self, value: Option<f32>) -> String {
        format_power(value)
    }
    fn secondary_text(&self) -> String {
        String::new()
    }

    /// angle the value arc grows from
    fn fill_start_angle(&self, start_angle: f32, _end_angle: f32) -> f32 {
        start_angle
    }
    fn clamp_ratio(&self, ratio: Option<f32>) -> f32 {
        clamp_ratio(ratio)
    }

    /// forget any per-sample state (ie, when the data goes away)
    fn reset(&mut self) {}
}

pub struct Section<P: SectionPolicy> {
    policy: P,

    start_angle: f32,
    end_angle: f32,
    color: Color,

    outer_radius: f32,
    inner_radius: f32,
    height: f32,
    width: f32,
    square_margin: f32,
    flow_margin: f32,

    outline: ArcPath,
    outline_path: String,
    value_arc: ArcPath,
    value_path: String,
    value_text: String,

    flow: FlowPolygon,
    square: SquareBlock,
    square_position: SquarePosition,

    last_value: SectionValue,
}
impl<P: SectionPolicy> Section<P> {
    pub fn new(policy: P, start_angle: f32, end_angle: f32, color: Color) -> Self {
        let flow = policy.init_flow(0.0);

        Self {
            policy,
            start_angle,
            end_angle,
            color,

            outer_radius: 0.0,
            inner_radius: 0.0,
            height: 0.0,
            width: 0.0,
            square_margin: 5.0,
            flow_margin: 10.0,

            outline: ArcPath::default(),
            outline_path: String::new(),
            value_arc: ArcPath::default(),
            value_path: String::new(),
            value_text: String::new(),

            flow,
            square: SquareBlock::default(),
            square_position: SquarePosition::default(),

            last_value: SectionValue::default(),
        }
    }

    pub fn margins(mut self, square_margin: f32, flow_margin: f32) -> Self {
        self.square_margin = square_margin;
        self.flow_margin = flow_margin;
        self
    }

    /// recalculate everything that depends on the chart size, then redraw the last value.
    /// call once the first layout is known, and again on every resize
    pub fn update(&mut self, outer_radius: f32, inner_radius: f32, height: f32, width: f32) {
        self.outer_radius = outer_radius;
        self.inner_radius = inner_radius;
        self.height = height;
        self.width = width;

        self.outline = ArcPath::new(inner_radius, outer_radius, self.start_angle, self.end_angle);
        self.outline_path = self.outline.to_path();

        self.square = SquareBlock::from_inner_radius(inner_radius);
        self.square_position = self.policy.square_position(&self.square, inner_radius, self.square_margin);

        // the arrow runs from just below the icon to the center
        let available = inner_radius - self.square.image.y - self.square.image.length - self.flow_margin;
        self.flow.radius = available.max(0.0);

        let SectionValue { absolute, ratio, system_share } = self.last_value;
        self.update_value(absolute, ratio, system_share);
    }

    /// redraw the value arc, label and flow arrow for a new value
    pub fn update_value(&mut self, absolute: Option<f32>, ratio: Option<f32>, system_share: Option<f32>) {
        self.last_value = SectionValue { absolute, ratio, system_share };
        self.value_text = self.policy.value_text(absolute);

        let ratio = self.policy.clamp_ratio(ratio);
        let start = self.policy.fill_start_angle(self.start_angle, self.end_angle);
        let end = start + (self.end_angle - self.start_angle) * ratio / 100.0;
        self.value_arc = ArcPath::new(self.inner_radius, self.outer_radius, start, end);
        self.value_path = self.value_arc.to_path();

        let shape = flow_intensity(system_share).map(|intensity| self.policy.flow_shape(intensity, self.flow.radius));
        self.flow.update(shape.as_ref());
    }

    /// drop back to the no-data state
    pub fn clear(&mut self) {
        self.policy.reset();
        self.update_value(None, None, None);
    }

    pub(crate) fn policy_mut(&mut self) -> &mut P { &mut self.policy }
    pub(crate) fn flow_mut(&mut self) -> &mut FlowPolygon { &mut self.flow }

    pub fn policy(&self) -> &P { &self.policy }
    pub fn start_angle(&self) -> f32 { self.start_angle }
    pub fn end_angle(&self) -> f32 { self.end_angle }
    pub fn color(&self) -> Color { self.color }
    pub fn name(&self) -> &'static str { self.policy.name() }
    pub fn label(&self) -> &'static str { self.policy.label() }
    pub fn image_path(&self) -> &'static str { self.policy.image_path() }
    pub fn outline(&self) -> ArcPath { self.outline }
    pub fn outline_path(&self) -> &str { &self.outline_path }
    pub fn value_arc(&self) -> ArcPath { self.value_arc }
    pub fn value_path(&self) -> &str { &self.value_path }
    pub fn value_text(&self) -> &str { &self.value_text }
    pub fn secondary_text(&self) -> String { self.policy.secondary_text() }
    pub fn flow(&self) -> &FlowPolygon { &self.flow }
    pub fn square(&self) -> &SquareBlock { &self.square }
    pub fn square_position(&self) -> SquarePosition { self.square_position }
    pub fn last_value(&self) -> SectionValue { self.last_value }
    pub fn size(&self) -> Vector2 { Vector2::new(self.width, self.height) }

    /// read-only snapshot for whatever draws the chart
    pub fn view(&self) -> SectionView {
        SectionView {
            name: self.name(),
            label: self.label(),
            color: self.color,
            outline_path: self.outline_path.clone(),
            value_path: self.value_path.clone(),
            value_text: self.value_text.clone(),
            secondary_text: self.secondary_text(),
            image_path: self.image_path(),
            square: self.square,
            square_position: self.square_position,
            flow_points: self.flow.points().to_owned(),
            flow_state: self.flow.state(),
            gradient: self.flow.gradient,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionView {
    pub name: &'static str,
    pub label: &'static str,
    pub color: Color,
    pub outline_path: String,
    pub value_path: String,
    pub value_text: String,
    pub secondary_text: String,
    pub image_path: &'static str,
    pub square: SquareBlock,
    pub square_position: SquarePosition,
    pub flow_points: String,
    pub flow_state: FlowState,
    pub gradient: GradientDirection,
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamp_stays_in_range() {
        for r in [-1000.0, -0.01, 0.0, 0.5, 42.0, 99.99, 100.0, 100.01, 1e9, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let c = clamp_ratio(Some(r));
            assert!((0.0..=100.0).contains(&c), "{r} -> {c}");
        }

        assert_eq!(clamp_ratio(None), 0.0);
        assert_eq!(clamp_ratio(Some(f32::NAN)), 0.0);
        assert_eq!(clamp_ratio(Some(-5.0)), 0.0);
        assert_eq!(clamp_ratio(Some(150.0)), 0.0);
        assert_eq!(clamp_ratio(Some(40.0)), 40.0);
        assert_eq!(clamp_ratio(Some(100.0)), 100.0);
    }

    #[test]
    fn intensity() {
        assert_eq!(flow_intensity(None), None);
        assert_eq!(flow_intensity(Some(f32::NAN)), None);
        assert_eq!(flow_intensity(Some(0.0)), Some(0.0));
        assert_eq!(flow_intensity(Some(0.6)), Some(6.0));
        assert_eq!(flow_intensity(Some(-0.34)), Some(-3.0));
        // tiny flows still show up
        assert_eq!(flow_intensity(Some(0.01)), Some(1.0));
        assert_eq!(flow_intensity(Some(-0.01)), Some(-1.0));
        // out of range gets pinned to the edge
        assert_eq!(flow_intensity(Some(3.0)), Some(10.0));
        assert_eq!(flow_intensity(Some(f32::NEG_INFINITY)), Some(-10.0));
    }

    #[test]
    fn power_text() {
        assert_eq!(format_power(Some(800.0)), "800 W");
        assert_eq!(format_power(Some(-49.6)), "-50 W");
        assert_eq!(format_power(None), "");
        assert_eq!(format_power(Some(f32::NAN)), "");
    }
}
