pub mod dataset;
pub mod launch;
pub mod selection;

pub use dataset::*;
pub use launch::*;
pub use selection::*;
