use super::*;

/// an annular sector between two radii, with angles in degrees (0 = up, clockwise)
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ArcPath {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}
impl ArcPath {
    pub fn new(inner_radius: f32, outer_radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
        }
    }

    /// signed angle covered by this arc. negative means counter-clockwise
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// build the svg path `d` attribute for this arc
    pub fn to_path(&self) -> String {
        let span = self.span();
        let large = if span.abs() > 180.0 { 1 } else { 0 };
        let sweep = if span >= 0.0 { 1 } else { 0 };

        let ro = fmt_num(self.outer_radius);
        let outer_start = Vector2::polar(self.outer_radius, self.start_angle);
        let outer_end = Vector2::polar(self.outer_radius, self.end_angle);
        let mut path = format!("M{outer_start} A{ro},{ro} 0 {large},{sweep} {outer_end}");

        if self.inner_radius > 0.0 {
            let ri = fmt_num(self.inner_radius);
            let inner_start = Vector2::polar(self.inner_radius, self.start_angle);
            let inner_end = Vector2::polar(self.inner_radius, self.end_angle);
            path += &format!(" L{inner_end} A{ri},{ri} 0 {large},{} {inner_start}", 1 - sweep);
        } else {
            path += " L0,0";
        }

        path + " Z"
    }
}
