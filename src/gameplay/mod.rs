pub mod lenient;

pub mod player;
pub use player::*;

pub mod position;
pub use position::*;

pub mod spot;
pub use spot::*;

pub mod state;
pub use state::*;
