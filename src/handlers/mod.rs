pub mod play;
pub mod quiz;
pub mod results;
