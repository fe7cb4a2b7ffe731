mod grid;
mod storage;
mod production;
mod consumption;

pub use grid::*;
pub use storage::*;
pub use production::*;
pub use consumption::*;
