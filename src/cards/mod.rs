pub mod board;
pub use board::*;

pub mod bucket;
pub use bucket::*;

pub mod card;
pub use card::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;

pub mod texture;
pub use texture::*;
