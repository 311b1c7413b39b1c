pub mod map;
pub mod play;
