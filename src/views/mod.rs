pub mod layout;
pub mod quiz;

pub use layout::page;
