use geoview_core::render::RenderedRaster;

/// Convert a rendered RGBA raster to an egui ColorImage.
pub fn rendered_to_color_image(rendered: &RenderedRaster) -> egui::ColorImage {
    let pixels = rendered
        .pixels
        .iter()
        .map(|&[r, g, b, a]| egui::Color32::from_rgba_unmultiplied(r, g, b, a))
        .collect();

    egui::ColorImage {
        size: [rendered.width, rendered.height],
        pixels,
        source_size: Default::default(),
    }
}
