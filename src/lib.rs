#![deny(unused_must_use)] // ensure all futures are awaited

#[macro_use] extern crate log;
pub mod engine;
pub mod prelude;
pub mod energy_monitor;

// file the chart settings are read from when no path is given
pub const SETTINGS_FILE:&str = "energy_monitor.json";
