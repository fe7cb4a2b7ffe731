mod chart;
mod render;
mod monitor;
mod section;
mod summary;
mod sections;
mod svg_types;
mod energy_flow;

pub use chart::*;
pub use render::*;
pub use monitor::*;
pub use section::*;
pub use summary::*;
pub use sections::*;
pub use svg_types::*;
pub use energy_flow::*;
