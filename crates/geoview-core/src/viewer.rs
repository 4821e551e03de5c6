//! The viewer controller: session state plus the four user operations.
//!
//! Each operation runs to completion and either succeeds or leaves the
//! session exactly as it was. Text fields are free-form and only parsed
//! when the matching render operation runs.

use std::path::PathBuf;

use crate::band_range::BandRange;
use crate::chart::AttributeChart;
use crate::error::{Result, SourceError, ViewerError};
use crate::io::{Backend, GdalBackend};
use crate::raster::{read_stack, RasterInfo, RasterSource};
use crate::render::{render_stack, RenderedRaster};
use crate::vector::{FeatureTable, VectorInfo};

/// Outcome of a file-open dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileChoice {
    Selected(PathBuf),
    Cancelled,
}

impl From<Option<PathBuf>> for FileChoice {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::Selected(path),
            None => Self::Cancelled,
        }
    }
}

struct LoadedRaster {
    info: RasterInfo,
    source: Box<dyn RasterSource>,
}

struct LoadedVector {
    info: VectorInfo,
    table: FeatureTable,
}

/// Everything the viewer holds between user actions.
#[derive(Default)]
pub struct Session {
    raster: Option<LoadedRaster>,
    vector: Option<LoadedVector>,
    /// Band range field, `"<start>-<end>"`.
    pub band_text: String,
    /// Attribute name field.
    pub attribute_text: String,
}

pub struct Viewer<B: Backend = GdalBackend> {
    backend: B,
    session: Session,
}

impl Default for Viewer<GdalBackend> {
    fn default() -> Self {
        Self::new(GdalBackend)
    }
}

impl<B: Backend> Viewer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: Session::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn raster_info(&self) -> Option<&RasterInfo> {
        self.session.raster.as_ref().map(|r| &r.info)
    }

    pub fn vector_info(&self) -> Option<&VectorInfo> {
        self.session.vector.as_ref().map(|v| &v.info)
    }

    pub fn feature_table(&self) -> Option<&FeatureTable> {
        self.session.vector.as_ref().map(|v| &v.table)
    }

    /// Open a raster. Returns `Ok(None)` when the dialog was cancelled.
    ///
    /// On success the previous raster is released and the band field is reset
    /// to cover every band. On failure the session is unchanged.
    pub fn open_raster(&mut self, choice: FileChoice) -> Result<Option<RasterInfo>> {
        let FileChoice::Selected(path) = choice else {
            tracing::debug!("Raster open cancelled");
            return Ok(None);
        };

        let open_err = |source| ViewerError::RasterOpen {
            path: path.clone(),
            source,
        };

        let source = self.backend.open_raster(&path).map_err(open_err)?;
        let band_count = source.band_count();
        if band_count == 0 {
            return Err(open_err(SourceError::Unsupported(
                "dataset has no raster bands".into(),
            )));
        }

        let (width, height) = source.size();
        let info = RasterInfo {
            path,
            band_count,
            width,
            height,
        };

        // Replacing drops the previous handle.
        self.session.raster = Some(LoadedRaster {
            info: info.clone(),
            source,
        });
        self.session.band_text = BandRange::full(band_count).to_string();

        tracing::info!(
            path = %info.path.display(),
            bands = band_count,
            width,
            height,
            "Opened raster"
        );
        Ok(Some(info))
    }

    /// Render the bands named by the band field.
    pub fn render_raster(&self) -> Result<RenderedRaster> {
        let raster = self
            .session
            .raster
            .as_ref()
            .ok_or(ViewerError::NoRasterLoaded)?;

        let range = BandRange::from_text(&self.session.band_text, raster.info.band_count)?;
        let stack = read_stack(raster.source.as_ref(), range)?;
        let rendered = render_stack(&stack, range);

        tracing::info!(bands = %range, "Rendered raster");
        Ok(rendered)
    }

    /// Open a vector file. Returns `Ok(None)` when the dialog was cancelled.
    ///
    /// On success the attribute field defaults to the first column.
    pub fn open_vector(&mut self, choice: FileChoice) -> Result<Option<VectorInfo>> {
        let FileChoice::Selected(path) = choice else {
            tracing::debug!("Vector open cancelled");
            return Ok(None);
        };

        let table = self
            .backend
            .open_vector(&path)
            .map_err(|source| ViewerError::VectorOpen {
                path: path.clone(),
                source,
            })?;

        let info = VectorInfo {
            path,
            columns: table.columns().to_vec(),
            row_count: table.row_count(),
        };

        self.session.attribute_text = table.columns().first().cloned().unwrap_or_default();
        self.session.vector = Some(LoadedVector {
            info: info.clone(),
            table,
        });

        tracing::info!(
            path = %info.path.display(),
            columns = info.columns.len(),
            rows = info.row_count,
            "Opened shapefile"
        );
        Ok(Some(info))
    }

    /// Build the bar chart for the attribute named by the attribute field.
    pub fn attribute_chart(&self) -> Result<AttributeChart> {
        let vector = self
            .session
            .vector
            .as_ref()
            .ok_or(ViewerError::NoVectorLoaded)?;

        let name = self.session.attribute_text.trim();
        let chart = AttributeChart::from_table(&vector.table, name).inspect_err(|e| {
            tracing::warn!("{e}");
        })?;

        tracing::info!(attribute = name, bars = chart.bars.len(), "Built attribute chart");
        Ok(chart)
    }
}
