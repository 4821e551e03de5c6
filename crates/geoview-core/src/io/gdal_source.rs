use std::collections::HashMap;
use std::path::Path;

use gdal::vector::{FieldValue, LayerAccess};
use gdal::Dataset;
use ndarray::Array2;

use super::Backend;
use crate::error::SourceError;
use crate::raster::RasterSource;
use crate::vector::{AttributeValue, FeatureRow, FeatureTable};

/// Backend reading rasters and shapefiles through GDAL.
#[derive(Clone, Copy, Debug, Default)]
pub struct GdalBackend;

impl Backend for GdalBackend {
    fn open_raster(&self, path: &Path) -> Result<Box<dyn RasterSource>, SourceError> {
        Ok(Box::new(GdalRaster::open(path)?))
    }

    fn open_vector(&self, path: &Path) -> Result<FeatureTable, SourceError> {
        read_feature_table(path)
    }
}

/// An open GDAL raster dataset. The file handle is released on drop.
pub struct GdalRaster {
    dataset: Dataset,
}

impl GdalRaster {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let dataset = Dataset::open(path)?;
        Ok(Self { dataset })
    }
}

impl RasterSource for GdalRaster {
    fn band_count(&self) -> usize {
        self.dataset.raster_count()
    }

    fn size(&self) -> (usize, usize) {
        self.dataset.raster_size()
    }

    fn read_band(&self, band: usize) -> Result<Array2<f64>, SourceError> {
        let (width, height) = self.size();
        let rasterband = self.dataset.rasterband(band as _)?;

        let mut data = vec![0.0f64; width * height];
        rasterband.read_into_slice::<f64>((0, 0), (width, height), (width, height), &mut data, None)?;

        Array2::from_shape_vec((height, width), data)
            .map_err(|e| SourceError::Unsupported(format!("band {band}: {e}")))
    }
}

/// Load the first layer of a vector file into memory.
fn read_feature_table(path: &Path) -> Result<FeatureTable, SourceError> {
    let dataset = Dataset::open(path)?;
    if dataset.layer_count() == 0 {
        return Err(SourceError::Unsupported("file contains no vector layers".into()));
    }

    let mut layer = dataset.layer(0)?;
    let columns: Vec<String> = layer.defn().fields().map(|field| field.name()).collect();

    let rows: Vec<FeatureRow> = layer
        .features()
        .map(|feature| {
            let values: HashMap<String, AttributeValue> = feature
                .fields()
                .map(|(name, value)| (name, convert_field(value)))
                .collect();
            let geometry_type = feature.geometry().map(|g| g.geometry_name());
            FeatureRow {
                values,
                geometry_type,
            }
        })
        .collect();

    tracing::debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "Read feature table"
    );
    Ok(FeatureTable::new(columns, rows))
}

fn convert_field(value: Option<FieldValue>) -> AttributeValue {
    match value {
        None => AttributeValue::Null,
        Some(FieldValue::IntegerValue(v)) => AttributeValue::Integer(v as i64),
        Some(FieldValue::Integer64Value(v)) => AttributeValue::Integer(v),
        Some(FieldValue::RealValue(v)) => AttributeValue::Real(v),
        Some(FieldValue::StringValue(s)) => AttributeValue::Text(s),
        Some(other) => other
            .into_string()
            .map(AttributeValue::Text)
            .unwrap_or(AttributeValue::Null),
    }
}
