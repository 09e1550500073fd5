pub mod forecast;
pub mod gridpoint;
pub mod hydrograph;
pub mod observation;
pub mod points;
pub mod sample;
