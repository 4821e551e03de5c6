use std::path::{Path, PathBuf};

use gdal::raster::Buffer;
use gdal::vector::{FieldValue, Geometry, LayerAccess, LayerOptions, OGRFieldType};
use gdal::DriverManager;
use geoview_core::error::ViewerError;
use geoview_core::io::gdal_source::GdalRaster;
use geoview_core::io::{Backend, GdalBackend};
use geoview_core::raster::RasterSource;
use geoview_core::render::RenderMode;
use geoview_core::vector::AttributeValue;
use geoview_core::viewer::{FileChoice, Viewer};

const WIDTH: usize = 4;
const HEIGHT: usize = 3;

/// Sample value for `band` (1-based) at `(row, col)`.
fn sample(band: usize, row: usize, col: usize) -> f64 {
    (band * 100 + row * WIDTH + col) as f64
}

/// Write a float64 GeoTIFF whose bands are distinguishable by their hundreds digit.
fn write_geotiff(path: &Path, bands: usize) {
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let dataset = driver
        .create_with_band_type::<f64, _>(path, WIDTH, HEIGHT, bands)
        .unwrap();
    for band in 1..=bands {
        let data: Vec<f64> = (0..HEIGHT)
            .flat_map(|row| (0..WIDTH).map(move |col| sample(band, row, col)))
            .collect();
        let mut buffer = Buffer::new((WIDTH, HEIGHT), data);
        let mut rasterband = dataset.rasterband(band).unwrap();
        rasterband
            .write((0, 0), (WIDTH, HEIGHT), &mut buffer)
            .unwrap();
    }
}

/// Write a point shapefile with a string, an integer and a real column. The
/// last feature leaves `population` unset so it reads back as null.
fn write_shapefile(path: &Path) {
    let driver = DriverManager::get_driver_by_name("ESRI Shapefile").unwrap();
    let mut dataset = driver.create_vector_only(path).unwrap();
    let mut layer = dataset
        .create_layer(LayerOptions {
            name: "places",
            ty: gdal::vector::OGRwkbGeometryType::wkbPoint,
            ..Default::default()
        })
        .unwrap();
    layer
        .create_defn_fields(&[
            ("name", OGRFieldType::OFTString),
            ("population", OGRFieldType::OFTInteger),
            ("area", OGRFieldType::OFTReal),
        ])
        .unwrap();

    let features = [
        ("Alpha", Some(120), 1.5, "POINT (0 0)"),
        ("Beta", Some(45), 2.25, "POINT (1 1)"),
        ("Gamma", None, 0.5, "POINT (2 2)"),
    ];
    for (name, population, area, wkt) in features {
        let geometry = Geometry::from_wkt(wkt).unwrap();
        match population {
            Some(population) => layer
                .create_feature_fields(
                    geometry,
                    &["name", "population", "area"],
                    &[
                        FieldValue::StringValue(name.into()),
                        FieldValue::IntegerValue(population),
                        FieldValue::RealValue(area),
                    ],
                )
                .unwrap(),
            None => layer
                .create_feature_fields(
                    geometry,
                    &["name", "area"],
                    &[
                        FieldValue::StringValue(name.into()),
                        FieldValue::RealValue(area),
                    ],
                )
                .unwrap(),
        }
    }
}

#[test]
fn test_missing_raster_fails_to_open() {
    assert!(GdalBackend
        .open_raster(Path::new("/definitely/not/here.tif"))
        .is_err());
}

#[test]
fn test_missing_shapefile_fails_to_open() {
    assert!(GdalBackend
        .open_vector(Path::new("/definitely/not/here.shp"))
        .is_err());
}

#[test]
fn test_garbage_file_is_raster_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.tif");
    std::fs::write(&path, b"not a tiff at all").unwrap();

    let mut viewer: Viewer = Viewer::default();
    let err = viewer
        .open_raster(FileChoice::Selected(path.clone()))
        .unwrap_err();
    match err {
        ViewerError::RasterOpen { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected RasterOpen, got {other:?}"),
    }
    assert!(viewer.raster_info().is_none());
}

#[test]
fn test_garbage_file_is_vector_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("garbage.shp");
    std::fs::write(&path, b"not a shapefile").unwrap();

    let mut viewer: Viewer = Viewer::default();
    assert!(matches!(
        viewer.open_vector(FileChoice::Selected(path)),
        Err(ViewerError::VectorOpen { .. })
    ));
    assert!(viewer.vector_info().is_none());
}

// ---------------------------------------------------------------------------
// GeoTIFF
// ---------------------------------------------------------------------------

#[test]
fn test_geotiff_band_count_and_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bands.tif");
    write_geotiff(&path, 4);

    let mut viewer: Viewer = Viewer::default();
    let info = viewer
        .open_raster(FileChoice::Selected(path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(info.path, path);
    assert_eq!(info.band_count, 4);
    assert_eq!((info.width, info.height), (WIDTH, HEIGHT));
    assert_eq!(viewer.session().band_text, "1-4");
}

#[test]
fn test_geotiff_bands_read_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bands.tif");
    write_geotiff(&path, 3);

    let raster = GdalRaster::open(&path).unwrap();
    assert_eq!(raster.band_count(), 3);
    assert_eq!(raster.size(), (WIDTH, HEIGHT));
    for band in 1..=3 {
        let data = raster.read_band(band).unwrap();
        assert_eq!(data.dim(), (HEIGHT, WIDTH));
        assert_eq!(data[[0, 0]], sample(band, 0, 0));
        assert_eq!(data[[1, 2]], sample(band, 1, 2));
        assert_eq!(data[[HEIGHT - 1, WIDTH - 1]], sample(band, HEIGHT - 1, WIDTH - 1));
    }
    assert!(raster.read_band(4).is_err());
}

#[test]
fn test_geotiff_renders_selected_bands() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bands.tif");
    write_geotiff(&path, 4);

    let mut viewer: Viewer = Viewer::default();
    viewer.open_raster(FileChoice::Selected(path)).unwrap();
    viewer.session_mut().band_text = "2-3".into();

    let rendered = viewer.render_raster().unwrap();
    assert_eq!(rendered.bands.to_string(), "2-3");
    assert_eq!(rendered.mode, RenderMode::Colormap);
    assert_eq!((rendered.width, rendered.height), (WIDTH, HEIGHT));
    assert_eq!(rendered.pixels.len(), WIDTH * HEIGHT);
}

// ---------------------------------------------------------------------------
// Shapefile
// ---------------------------------------------------------------------------

#[test]
fn test_shapefile_columns_exclude_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("places.shp");
    write_shapefile(&path);

    let mut viewer: Viewer = Viewer::default();
    let info = viewer
        .open_vector(FileChoice::Selected(path))
        .unwrap()
        .unwrap();
    assert_eq!(info.columns, vec!["name", "population", "area"]);
    assert_eq!(info.row_count, 3);
    assert_eq!(viewer.session().attribute_text, "name");
}

#[test]
fn test_shapefile_rows_keep_load_order_and_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("places.shp");
    write_shapefile(&path);

    let table = GdalBackend.open_vector(&path).unwrap();
    let names: Vec<AttributeValue> = table.column_values("name").unwrap();
    assert_eq!(
        names,
        vec![
            AttributeValue::Text("Alpha".into()),
            AttributeValue::Text("Beta".into()),
            AttributeValue::Text("Gamma".into()),
        ]
    );
    assert_eq!(
        table.column_values("population").unwrap(),
        vec![
            AttributeValue::Integer(120),
            AttributeValue::Integer(45),
            AttributeValue::Null,
        ]
    );
    assert_eq!(
        table.column_values("area").unwrap(),
        vec![
            AttributeValue::Real(1.5),
            AttributeValue::Real(2.25),
            AttributeValue::Real(0.5),
        ]
    );
    for row in table.rows() {
        assert_eq!(row.geometry_type.as_deref(), Some("POINT"));
    }
}

#[test]
fn test_shapefile_chart_uses_stored_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("places.shp");
    write_shapefile(&path);

    let mut viewer: Viewer = Viewer::default();
    viewer.open_vector(FileChoice::Selected(path)).unwrap();

    viewer.session_mut().attribute_text = "population".into();
    let chart = viewer.attribute_chart().unwrap();
    let heights: Vec<f64> = chart.bars.iter().map(|bar| bar.value).collect();
    assert_eq!(heights, vec![120.0, 45.0, 0.0]);

    viewer.session_mut().attribute_text = "name".into();
    assert!(matches!(
        viewer.attribute_chart(),
        Err(ViewerError::AttributeNotNumeric { .. })
    ));
}
