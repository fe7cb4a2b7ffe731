mod math;
mod color;
mod errors;
mod settings;

pub use math::*;
pub use color::*;
pub use errors::*;
pub use settings::*;
