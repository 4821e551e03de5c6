pub mod gdal_source;
pub mod image_io;

use std::path::Path;

use crate::error::SourceError;
use crate::raster::RasterSource;
use crate::vector::FeatureTable;

pub use gdal_source::GdalBackend;

/// Opens raster and vector files on behalf of the viewer.
pub trait Backend {
    /// Open `path` as a raster dataset.
    fn open_raster(&self, path: &Path) -> Result<Box<dyn RasterSource>, SourceError>;

    /// Open `path` as a vector layer and load its attribute table.
    fn open_vector(&self, path: &Path) -> Result<FeatureTable, SourceError>;
}
