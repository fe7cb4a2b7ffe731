use crate::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}
impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// where a label goes, relative to the top left of its square
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct TextPosition {
    pub x: f32,
    pub y: f32,
    pub anchor: TextAnchor,
    pub font_size: f32,
}
impl TextPosition {
    pub fn new(x: f32, y: f32, anchor: TextAnchor, font_size: f32) -> Self {
        Self { x, y, anchor, font_size }
    }
}

/// where the icon goes, relative to the top left of its square. icons are always square
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImagePosition {
    pub x: f32,
    pub y: f32,
    pub length: f32,
}
impl ImagePosition {
    pub fn new(x: f32, y: f32, length: f32) -> Self {
        Self { x, y, length }
    }
}

/// the imaginary square each section places its icon and labels in.
///
/// the labels sit in the top half, the icon fills the middle of the bottom half
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct SquareBlock {
    pub length: f32,
    pub value_ratio: TextPosition,
    pub value_text: TextPosition,
    pub image: ImagePosition,
}
impl SquareBlock {
    pub fn from_inner_radius(inner_radius: f32) -> Self {
        let length = (inner_radius / 2.5).max(0.0);
        let font_size = length / 6.0;
        let center = length / 2.0;

        Self {
            length,
            value_ratio: TextPosition::new(center, length / 5.0, TextAnchor::Middle, font_size),
            value_text: TextPosition::new(center, length * 2.0 / 5.0, TextAnchor::Middle, font_size),
            image: ImagePosition::new(length / 4.0, center, center),
        }
    }
}

/// top left of a square, relative to the center of the chart
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct SquarePosition {
    pub x: f32,
    pub y: f32,
}
impl SquarePosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// svg `linearGradient` direction for a flow arrow
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradientDirection {
    pub x1: &'static str,
    pub y1: &'static str,
    pub x2: &'static str,
    pub y2: &'static str,
}
impl GradientDirection {
    pub const fn new(x1: &'static str, y1: &'static str, x2: &'static str, y2: &'static str) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const TOP_TO_BOTTOM: Self = Self::new("50%", "0%", "50%", "100%");
    pub const BOTTOM_TO_TOP: Self = Self::new("50%", "100%", "50%", "0%");
    pub const LEFT_TO_RIGHT: Self = Self::new("0%", "50%", "100%", "50%");
    pub const RIGHT_TO_LEFT: Self = Self::new("100%", "50%", "0%", "50%");
}

/// corners of a flow arrow, relative to the center of the chart.
///
/// the optional midpoints turn the quad into an arrow. without them it's a plain quadrilateral
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlowShape {
    pub top_left: Vector2,
    pub top_right: Vector2,
    pub bottom_right: Vector2,
    pub bottom_left: Vector2,

    pub middle_top: Option<Vector2>,
    pub middle_right: Option<Vector2>,
    pub middle_bottom: Option<Vector2>,
    pub middle_left: Option<Vector2>,
}
impl FlowShape {
    pub fn quad(top_left: Vector2, top_right: Vector2, bottom_right: Vector2, bottom_left: Vector2) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            ..Default::default()
        }
    }

    /// arrow along the vertical axis, with the given tip/notch points on the top and bottom edges
    pub fn vertical(self, middle_top: Vector2, middle_bottom: Vector2) -> Self {
        Self {
            middle_top: Some(middle_top),
            middle_bottom: Some(middle_bottom),
            ..self
        }
    }

    /// arrow along the horizontal axis, with the given tip/notch points on the left and right edges
    pub fn horizontal(self, middle_left: Vector2, middle_right: Vector2) -> Self {
        Self {
            middle_left: Some(middle_left),
            middle_right: Some(middle_right),
            ..self
        }
    }
}
