pub mod play;
pub mod scores;
