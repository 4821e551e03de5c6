use std::path::PathBuf;

use ndarray::{Array2, Array3};

use crate::band_range::BandRange;
use crate::error::{Result, SourceError, ViewerError};

/// An opened raster dataset. Band pixels are read on demand.
pub trait RasterSource {
    /// Number of bands in the dataset.
    fn band_count(&self) -> usize;

    /// Raster size as `(width, height)` in pixels.
    fn size(&self) -> (usize, usize);

    /// Read one band (1-based) as a `(rows, cols)` array.
    fn read_band(&self, band: usize) -> std::result::Result<Array2<f64>, SourceError>;
}

/// Summary of the currently loaded raster.
#[derive(Clone, Debug)]
pub struct RasterInfo {
    pub path: PathBuf,
    pub band_count: usize,
    pub width: usize,
    pub height: usize,
}

/// Read the bands of `range` into a stacked `(bands, rows, cols)` array.
pub fn read_stack(source: &dyn RasterSource, range: BandRange) -> Result<Array3<f64>> {
    let (width, height) = source.size();
    let mut stack = Array3::<f64>::zeros((range.len(), height, width));

    for (slot, band) in range.bands().enumerate() {
        let data = source
            .read_band(band)
            .map_err(|source| ViewerError::RasterRead { band, source })?;

        if data.dim() != (height, width) {
            return Err(ViewerError::RasterRead {
                band,
                source: SourceError::Unsupported(format!(
                    "band is {}x{}, expected {}x{}",
                    data.ncols(),
                    data.nrows(),
                    width,
                    height
                )),
            });
        }

        stack.index_axis_mut(ndarray::Axis(0), slot).assign(&data);
    }

    tracing::debug!(bands = %range, width, height, "Read raster stack");
    Ok(stack)
}
