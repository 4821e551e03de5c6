#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ndarray::{Array2, Array3, Axis};

use geoview_core::error::SourceError;
use geoview_core::io::Backend;
use geoview_core::raster::RasterSource;
use geoview_core::vector::{AttributeValue, FeatureRow, FeatureTable};

/// In-memory raster. Tracks how many handles are alive through `alive`.
pub struct FakeRaster {
    bands: Array3<f64>,
    alive: Rc<Cell<usize>>,
}

impl FakeRaster {
    fn new(bands: Array3<f64>, alive: Rc<Cell<usize>>) -> Self {
        alive.set(alive.get() + 1);
        Self { bands, alive }
    }
}

impl Drop for FakeRaster {
    fn drop(&mut self) {
        self.alive.set(self.alive.get() - 1);
    }
}

impl RasterSource for FakeRaster {
    fn band_count(&self) -> usize {
        self.bands.len_of(Axis(0))
    }

    fn size(&self) -> (usize, usize) {
        let (_, h, w) = self.bands.dim();
        (w, h)
    }

    fn read_band(&self, band: usize) -> Result<Array2<f64>, SourceError> {
        if band == 0 || band > self.band_count() {
            return Err(SourceError::Unsupported(format!("no band {band}")));
        }
        Ok(self.bands.index_axis(Axis(0), band - 1).to_owned())
    }
}

enum Entry {
    Raster(Array3<f64>),
    Vector(FeatureTable),
}

/// Backend serving registered in-memory files. Unknown paths fail to open.
#[derive(Default)]
pub struct FakeBackend {
    files: HashMap<PathBuf, Entry>,
    pub alive_rasters: Rc<Cell<usize>>,
}

impl FakeBackend {
    pub fn with_raster(mut self, path: &str, bands: Array3<f64>) -> Self {
        self.files.insert(PathBuf::from(path), Entry::Raster(bands));
        self
    }

    pub fn with_vector(mut self, path: &str, table: FeatureTable) -> Self {
        self.files.insert(PathBuf::from(path), Entry::Vector(table));
        self
    }
}

impl Backend for FakeBackend {
    fn open_raster(&self, path: &Path) -> Result<Box<dyn RasterSource>, SourceError> {
        match self.files.get(path) {
            Some(Entry::Raster(bands)) => Ok(Box::new(FakeRaster::new(
                bands.clone(),
                self.alive_rasters.clone(),
            ))),
            _ => Err(SourceError::Unsupported("not a raster".into())),
        }
    }

    fn open_vector(&self, path: &Path) -> Result<FeatureTable, SourceError> {
        match self.files.get(path) {
            Some(Entry::Vector(table)) => Ok(table.clone()),
            _ => Err(SourceError::Unsupported("not a shapefile".into())),
        }
    }
}

/// `bands` x `h` x `w` stack where band `b` (1-based) holds `b * 100 + row * w + col`.
pub fn numbered_bands(bands: usize, h: usize, w: usize) -> Array3<f64> {
    Array3::from_shape_fn((bands, h, w), |(b, row, col)| {
        ((b + 1) * 100 + row * w + col) as f64
    })
}

/// Table with the given columns where every row maps column name to value.
pub fn table(columns: &[&str], rows: Vec<Vec<AttributeValue>>) -> FeatureTable {
    let rows = rows
        .into_iter()
        .map(|values| FeatureRow {
            values: columns
                .iter()
                .map(|c| c.to_string())
                .zip(values)
                .collect(),
            geometry_type: Some("Point".into()),
        })
        .collect();
    FeatureTable::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

/// The three-feature `id`/`population` table.
pub fn population_table() -> FeatureTable {
    table(
        &["id", "population"],
        vec![
            vec![AttributeValue::Integer(1), AttributeValue::Real(1200.0)],
            vec![AttributeValue::Integer(2), AttributeValue::Real(860.5)],
            vec![AttributeValue::Integer(3), AttributeValue::Real(3100.0)],
        ],
    )
}
