pub mod indicators;
pub mod visuals;
