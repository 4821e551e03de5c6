use crate::app::GeoViewApp;

pub fn show(ctx: &egui::Context, app: &mut GeoViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(info) = app.viewer.raster_info() {
                ui.label(format!(
                    "Raster: {}x{}, {} bands",
                    info.width, info.height, info.band_count
                ));
                ui.separator();
            }
            if let Some(info) = app.viewer.vector_info() {
                ui.label(format!("Shapefile: {} features", info.row_count));
                ui.separator();
            }
            if !app.charts.is_empty() {
                ui.label(format!("Charts: {}", app.charts.len()));
                ui.separator();
            }
            if let Some(size) = app.viewport.image_size() {
                ui.label(format!("View: {}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
        });

        ui.add_space(2.0);
    });
}
