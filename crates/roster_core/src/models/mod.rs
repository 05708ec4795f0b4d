pub mod player;

pub use player::{format_height, Player, Position};
