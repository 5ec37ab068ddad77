pub mod ai;
pub mod collision;
pub mod movement;
pub mod respawn;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use movement::*;
pub use respawn::*;
pub use scoring::*;
