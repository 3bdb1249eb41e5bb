pub mod action;
pub use action::*;

pub mod sizing;
pub use sizing::*;
