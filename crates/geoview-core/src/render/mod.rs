pub mod colormap;

use ndarray::{Array2, Array3, ArrayView2, Axis};
use rayon::prelude::*;

use crate::band_range::BandRange;
use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGB_COMPOSITE_BANDS};
use colormap::{finite_range, normalize, viridis};

/// Fully transparent pixel used for non-finite samples.
const NO_DATA: [u8; 4] = [0, 0, 0, 0];

/// How a band stack was turned into color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Per-pixel mean of the bands through the viridis ramp.
    Colormap,
    /// Three bands as red, green and blue.
    RgbComposite,
}

/// An RGBA image produced from a band stack, row-major.
#[derive(Clone, Debug)]
pub struct RenderedRaster {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[u8; 4]>,
    pub bands: BandRange,
    pub mode: RenderMode,
}

impl RenderedRaster {
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 4] {
        self.pixels[row * self.width + col]
    }
}

/// Render a `(bands, rows, cols)` stack read for `bands`.
pub fn render_stack(stack: &Array3<f64>, bands: BandRange) -> RenderedRaster {
    let (band_count, height, width) = stack.dim();

    let (pixels, mode) = if band_count == RGB_COMPOSITE_BANDS {
        (rgb_composite(stack), RenderMode::RgbComposite)
    } else {
        let mean = stack
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array2::from_elem((height, width), f64::NAN));
        (colormapped(mean.view()), RenderMode::Colormap)
    };

    tracing::debug!(bands = %bands, ?mode, width, height, "Rendered raster");
    RenderedRaster {
        width,
        height,
        pixels,
        bands,
        mode,
    }
}

fn colormapped(data: ArrayView2<f64>) -> Vec<[u8; 4]> {
    let values: Vec<f64> = data.iter().copied().collect();
    let range = finite_range(&values).unwrap_or((0.0, 0.0));

    map_pixels(values.len(), |i| {
        let v = values[i];
        if !v.is_finite() {
            return NO_DATA;
        }
        let [r, g, b] = viridis(normalize(v, range));
        [r, g, b, 255]
    })
}

fn rgb_composite(stack: &Array3<f64>) -> Vec<[u8; 4]> {
    let channels: Vec<(Vec<f64>, (f64, f64))> = stack
        .axis_iter(Axis(0))
        .map(|band| {
            let values: Vec<f64> = band.iter().copied().collect();
            let range = finite_range(&values).unwrap_or((0.0, 0.0));
            (values, range)
        })
        .collect();

    let count = channels.first().map(|(v, _)| v.len()).unwrap_or(0);
    map_pixels(count, |i| {
        let mut rgba = [0u8, 0, 0, 255];
        for (c, (values, range)) in channels.iter().enumerate() {
            let v = values[i];
            if !v.is_finite() {
                return NO_DATA;
            }
            rgba[c] = (normalize(v, *range) * 255.0).round() as u8;
        }
        rgba
    })
}

/// Compute one RGBA value per pixel index, splitting across Rayon for large images.
fn map_pixels<F>(count: usize, f: F) -> Vec<[u8; 4]>
where
    F: Fn(usize) -> [u8; 4] + Sync + Send,
{
    if count >= PARALLEL_PIXEL_THRESHOLD {
        (0..count).into_par_iter().map(f).collect()
    } else {
        (0..count).map(f).collect()
    }
}
