use std::fmt::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
impl Color {
    #[inline]
    pub const fn new(r:f32, g:f32, b:f32, a:f32) -> Self {Self{r, g, b, a}}

    pub fn from_hex(hex:impl AsRef<str>) -> Self {
        let hex = hex.as_ref();
        Self::try_from_hex(hex).unwrap_or_else(|| {
            warn!("malformed hex: '{hex}'");
            Color::TRANSPARENT_BLACK
        })
    }

    pub fn try_from_hex(hex:impl AsRef<str>) -> Option<Color> {
        let hex = hex.as_ref();
        let chars = hex.trim_matches('#').chars().collect::<Vec<char>>();
        fn parse(c1:char, c2:char) -> Option<f32> {
            let n = u8::from_str_radix(&format!("{c1}{c2}"), 16).ok()?;
            Some(n as f32 / 255.0)
        }

        match chars.len() {
            3 => { // rgb
                let r = parse(chars[0], chars[0])?;
                let g = parse(chars[1], chars[1])?;
                let b = parse(chars[2], chars[2])?;
                Some(Self::new(r, g, b, 1.0))
            }
            4 => { // rgba
                let r = parse(chars[0], chars[0])?;
                let g = parse(chars[1], chars[1])?;
                let b = parse(chars[2], chars[2])?;
                let a = parse(chars[3], chars[3])?;
                Some(Color::new(r, g, b, a))
            }
            6 => { //rrggbb
                let r = parse(chars[0], chars[1])?;
                let g = parse(chars[2], chars[3])?;
                let b = parse(chars[4], chars[5])?;
                Some(Color::new(r, g, b, 1.0))
            }
            8 => { //rrggbbaa
                let r = parse(chars[0], chars[1])?;
                let g = parse(chars[2], chars[3])?;
                let b = parse(chars[4], chars[5])?;
                let a = parse(chars[6], chars[7])?;
                Some(Color::new(r, g, b, a))
            }

            _ => None
        }
    }

    fn byte(n: f32) -> u8 {
        (n.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// `#rrggbb`, with the alpha byte only appended when the color isnt opaque
    pub fn to_hex(self) -> String {
        let r = Self::byte(self.r);
        let g = Self::byte(self.g);
        let b = Self::byte(self.b);
        let a = Self::byte(self.a);

        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

// section colors
impl Color {
    pub const TRANSPARENT_BLACK:Color = Color {r:0.0,g:0.0,b:0.0,a:0.0};

    /// #36aed1
    pub const PRODUCTION:Color = Color {r:0.21176471,g:0.68235294,b:0.81960784,a:1.0};
    /// #fdc507
    pub const CONSUMPTION:Color = Color {r:0.99215686,g:0.77254902,b:0.02745098,a:1.0};
    /// #1d1d1d
    pub const GRID:Color = Color {r:0.11372549,g:0.11372549,b:0.11372549,a:1.0};
    /// #2d8fab
    pub const STORAGE:Color = Color {r:0.17647059,g:0.56078431,b:0.67058824,a:1.0};
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color::from_hex(value)
    }
}
impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_round_trip_for_section_colors() {
        assert_eq!(Color::PRODUCTION.to_hex(), "#36aed1");
        assert_eq!(Color::CONSUMPTION.to_hex(), "#fdc507");
        assert_eq!(Color::GRID.to_hex(), "#1d1d1d");
        assert_eq!(Color::STORAGE.to_hex(), "#2d8fab");

        assert_eq!(Color::from_hex("#2d8fab"), Color::new(45.0 / 255.0, 143.0 / 255.0, 171.0 / 255.0, 1.0));
    }

    #[test]
    fn short_and_alpha_forms() {
        assert_eq!(Color::from_hex("fff").to_hex(), "#ffffff");
        assert_eq!(Color::from_hex("#00000080").to_hex(), "#00000080");
        assert_eq!(Color::try_from_hex("nope"), None);
        assert_eq!(Color::from_hex("#12"), Color::TRANSPARENT_BLACK);
    }
}
