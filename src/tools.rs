pub mod binning;
pub mod date;
pub mod math;
