use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a raster or vector backend.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("{0}")]
    Unsupported(String),
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Cannot open raster {}: {source}", path.display())]
    RasterOpen {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    #[error("Cannot open vector file {}: {source}", path.display())]
    VectorOpen {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    #[error("Invalid band range '{input}': {reason}")]
    BandRangeParse { input: String, reason: String },

    #[error("Band range {start}-{end} is outside 1-{band_count}")]
    BandRangeValidation {
        start: i64,
        end: i64,
        band_count: usize,
    },

    #[error("Failed to read band {band}: {source}")]
    RasterRead {
        band: usize,
        #[source]
        source: SourceError,
    },

    #[error("No raster loaded")]
    NoRasterLoaded,

    #[error("No shapefile loaded")]
    NoVectorLoaded,

    #[error("Attribute '{name}' not found in the shapefile")]
    AttributeNotFound { name: String },

    #[error("Attribute '{name}' holds text values and cannot be charted")]
    AttributeNotNumeric { name: String },

    #[error("Invalid display settings: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
