mod raster;
mod vector;

const RIGHT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::GeoViewApp) {
    egui::SidePanel::right("controls")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(RIGHT_PANEL_WIDTH - 20.0);

                raster::raster_section(ui, app);
                ui.separator();
                vector::vector_section(ui, app);
            });
        });
}

/// Full-width action button.
fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add(egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 28.0)))
        .clicked()
}

fn file_label(ui: &mut egui::Ui, path: &std::path::Path) {
    ui.label(
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
    );
}
