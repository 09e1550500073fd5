pub mod error;
pub mod local;
pub mod rounding;
pub mod target_hour;
pub mod valid_time;
