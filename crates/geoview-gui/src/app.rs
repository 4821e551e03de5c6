use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geoview_core::io::image_io::save_png;
use geoview_core::render::RenderedRaster;
use geoview_core::settings::DisplaySettings;
use geoview_core::viewer::{FileChoice, Viewer};

use crate::convert::rendered_to_color_image;
use crate::panels;
use crate::states::{ChartWindows, UIState, ViewportState};

pub struct GeoViewApp {
    pub viewer: Viewer,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub charts: ChartWindows,
    pub settings: DisplaySettings,
}

impl GeoViewApp {
    pub fn new() -> Self {
        Self {
            viewer: Viewer::default(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            charts: ChartWindows::default(),
            settings: DisplaySettings::default(),
        }
    }

    pub fn open_raster(&mut self) {
        let choice = pick_file(&self.settings.raster_extensions, "Raster files");
        match self.viewer.open_raster(choice) {
            Ok(Some(info)) => self.ui_state.add_log(format!(
                "Opened raster: {} ({}x{}, {} bands)",
                info.path.display(),
                info.width,
                info.height,
                info.band_count
            )),
            Ok(None) => {}
            Err(e) => self.ui_state.add_error(e),
        }
    }

    /// Render the selected bands and swap the viewport texture in the same frame.
    pub fn render_raster(&mut self, ctx: &egui::Context) {
        match self.viewer.render_raster() {
            Ok(rendered) => {
                self.ui_state
                    .add_log(format!("Displayed bands {}", rendered.bands));
                self.update_viewport_texture(ctx, rendered);
                ctx.request_repaint();
            }
            Err(e) => self.ui_state.add_error(e),
        }
    }

    pub fn open_vector(&mut self) {
        let choice = pick_file(&self.settings.vector_extensions, "Shapefiles");
        match self.viewer.open_vector(choice) {
            Ok(Some(info)) => self.ui_state.add_log(format!(
                "Opened shapefile: {} ({} features, columns: {})",
                info.path.display(),
                info.row_count,
                info.columns.join(", ")
            )),
            Ok(None) => {}
            Err(e) => self.ui_state.add_error(e),
        }
    }

    /// Open a new chart window. Failures leave existing windows alone.
    pub fn plot_attribute(&mut self) {
        match self.viewer.attribute_chart() {
            Ok(chart) => {
                let attribute = chart.attribute.clone();
                let bars = chart.bars.len();
                self.charts.push(chart);
                self.ui_state
                    .add_log(format!("Plotted '{attribute}' ({bars} features)"));
            }
            Err(e) => self.ui_state.add_error(e),
        }
    }

    pub fn export_view(&mut self) {
        let Some(ref rendered) = self.viewport.rendered else {
            self.ui_state.add_log("Nothing to export: display a raster first".into());
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("view.png")
            .save_file()
        else {
            return;
        };

        match save_png(rendered, &path) {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => self.ui_state.add_error(e),
        }
    }

    pub fn import_settings(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };

        match read_settings(&path) {
            Ok(settings) => {
                self.settings = settings;
                self.clamp_zoom();
                self.ui_state
                    .add_log(format!("Imported display settings: {}", path.display()));
            }
            Err(e) => self.ui_state.add_error(format!("{e:#}")),
        }
    }

    pub fn export_settings(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("geoview_display.toml")
            .save_file()
        else {
            return;
        };

        match write_settings(&self.settings, &path) {
            Ok(()) => self
                .ui_state
                .add_log(format!("Exported display settings: {}", path.display())),
            Err(e) => self.ui_state.add_error(format!("{e:#}")),
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, rendered: RenderedRaster) {
        let image = rendered_to_color_image(&rendered);
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.viewing_label = format!("Bands {}", rendered.bands);
        self.viewport.texture = Some(texture);
        self.viewport.rendered = Some(rendered);
    }

    fn clamp_zoom(&mut self) {
        let limits = &self.settings.viewport;
        self.viewport.zoom = self.viewport.zoom.clamp(limits.min_zoom, limits.max_zoom);
    }
}

impl Default for GeoViewApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for GeoViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::charts::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About GeoView")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("GeoView");
                        ui.label("Raster and Shapefile Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

/// Blocking native file dialog filtered to `extensions`.
fn pick_file(extensions: &[String], label: &str) -> FileChoice {
    let extensions: Vec<&str> = extensions.iter().map(String::as_str).collect();
    let path: Option<PathBuf> = rfd::FileDialog::new()
        .add_filter(label, &extensions)
        .pick_file();
    FileChoice::from(path)
}

fn read_settings(path: &Path) -> Result<DisplaySettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let settings = DisplaySettings::from_toml_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(settings)
}

fn write_settings(settings: &DisplaySettings, path: &Path) -> Result<()> {
    let content = settings.to_toml_string()?;
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
