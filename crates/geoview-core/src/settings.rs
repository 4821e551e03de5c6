use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BAR_WIDTH, DEFAULT_CHART_WINDOW_SIZE, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM,
    DEFAULT_RASTER_EXTENSIONS, DEFAULT_VECTOR_EXTENSIONS,
};
use crate::error::{Result, ViewerError};

/// Display preferences. Only read or written when the user imports or exports them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub raster_extensions: Vec<String>,
    pub vector_extensions: Vec<String>,
    pub chart: ChartSettings,
    pub viewport: ViewportSettings,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            raster_extensions: DEFAULT_RASTER_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            vector_extensions: DEFAULT_VECTOR_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            chart: ChartSettings::default(),
            viewport: ViewportSettings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Initial window size `[width, height]`.
    pub window_size: [f32; 2],
    pub bar_width: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_CHART_WINDOW_SIZE,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl DisplaySettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| ViewerError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ViewerError::Settings(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        let ViewportSettings { min_zoom, max_zoom } = self.viewport;
        if !(min_zoom > 0.0 && min_zoom <= max_zoom) {
            return Err(ViewerError::Settings(format!(
                "zoom limits must satisfy 0 < min_zoom <= max_zoom (got {min_zoom}, {max_zoom})"
            )));
        }
        if self.chart.bar_width <= 0.0 {
            return Err(ViewerError::Settings("bar_width must be positive".into()));
        }
        if self.raster_extensions.is_empty() || self.vector_extensions.is_empty() {
            return Err(ViewerError::Settings(
                "extension lists must not be empty".into(),
            ));
        }
        Ok(())
    }
}
