use geoview_core::render::RenderedRaster;

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// The render currently on screen, kept for export.
    pub rendered: Option<RenderedRaster>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    pub viewing_label: String,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            rendered: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            viewing_label: String::new(),
        }
    }
}

impl ViewportState {
    pub fn image_size(&self) -> Option<[usize; 2]> {
        self.rendered.as_ref().map(|r| [r.width, r.height])
    }
}
