pub mod band_range;
pub mod chart;
pub mod consts;
pub mod error;
pub mod io;
pub mod raster;
pub mod render;
pub mod settings;
pub mod vector;
pub mod viewer;
