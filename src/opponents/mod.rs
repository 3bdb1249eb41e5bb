pub mod model;
pub use model::*;

pub mod stats;
pub use stats::*;

pub mod tracker;
pub use tracker::*;

pub mod villain;
pub use villain::*;
