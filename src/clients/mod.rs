pub mod gridpoint_client;
pub mod hydrograph_client;
