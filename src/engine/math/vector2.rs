use std::ops::{ Add, Deref, Neg, Sub };

#[derive(Copy, Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f32;2]", into = "[f32;2]")]
pub struct Vector2(cgmath::Vector2<f32>);
impl Vector2 {
    pub const ZERO: Self = Self(cgmath::Vector2::new(0.0, 0.0));
    pub const ONE: Self = Self(cgmath::Vector2::new(1.0, 1.0));

    pub const fn new(x: f32, y: f32) -> Self { Self(cgmath::Vector2::new(x, y)) }

    /// point at `radius` from the origin, with 0 degrees pointing up and angles growing clockwise
    pub fn polar(radius: f32, degrees: f32) -> Self {
        let a = degrees.to_radians();
        Self::new(radius * a.sin(), -radius * a.cos())
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// the smaller of the two components (ie, the side of the largest square that fits)
    pub fn min_component(self) -> f32 {
        self.x.min(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Deref for Vector2 {
    type Target = cgmath::Vector2<f32>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[f32;2]> for Vector2 {
    fn from(value: [f32;2]) -> Self {
        Self::new(value[0], value[1])
    }
}
impl From<Vector2> for [f32;2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl Default for Vector2 {
    fn default() -> Self { Self::ZERO }
}

/// svg coordinate pair, ie `x,y`
impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", super::fmt_num(self.x), super::fmt_num(self.y))
    }
}

// negative nancy
impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

// add
impl Add<Vector2> for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// sub
impl Sub<Vector2> for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Self::Output {
        self + -rhs
    }
}
