mod chart_settings;

pub use chart_settings::*;
