mod arc;
mod vector2;

pub use arc::*;
pub use vector2::*;

/// format a number for an svg attribute.
/// rounds to 2 decimals, trims trailing zeros, and never prints `-0`
pub fn fmt_num(n: f32) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    if rounded == 0.0 { return "0".to_owned() }

    let s = format!("{rounded:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}
