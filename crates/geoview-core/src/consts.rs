/// Minimum pixel count (h*w) to colorize with Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Viridis color ramp stops, evenly spaced over [0.0, 1.0].
pub const VIRIDIS_STOPS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

/// Band count rendered as an RGB composite instead of a colormapped mean.
pub const RGB_COMPOSITE_BANDS: usize = 3;

/// File extensions offered by the raster open dialog.
pub const DEFAULT_RASTER_EXTENSIONS: &[&str] = &["tif", "tiff"];

/// File extensions offered by the vector open dialog.
pub const DEFAULT_VECTOR_EXTENSIONS: &[&str] = &["shp"];

/// Default size of an attribute chart window, in points.
pub const DEFAULT_CHART_WINDOW_SIZE: [f32; 2] = [480.0, 320.0];

/// Default width of a bar in an attribute chart, in x-axis units.
pub const DEFAULT_BAR_WIDTH: f64 = 0.8;

/// Default viewport zoom limits.
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;
pub const DEFAULT_MAX_ZOOM: f32 = 20.0;

/// X-axis label used by every attribute chart.
pub const FEATURE_INDEX_LABEL: &str = "Feature Index";
