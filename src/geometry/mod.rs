pub mod arc;
pub mod slider;
