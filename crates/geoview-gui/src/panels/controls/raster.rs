use crate::app::GeoViewApp;

pub(super) fn raster_section(ui: &mut egui::Ui, app: &mut GeoViewApp) {
    let status = app
        .viewer
        .raster_info()
        .map(|info| format!("{} bands", info.band_count));
    crate::panels::section_header(ui, "Raster", status.as_deref());
    ui.add_space(4.0);

    if super::action_button(ui, "Load Raster...") {
        app.open_raster();
    }

    if let Some(info) = app.viewer.raster_info() {
        super::file_label(ui, &info.path);
        ui.small(format!("{}x{}", info.width, info.height));
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Bands:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.viewer.session_mut().band_text)
                .hint_text("1-3")
                .desired_width(f32::INFINITY),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            app.render_raster(ui.ctx());
        }
    });

    if super::action_button(ui, "Display Raster") {
        app.render_raster(ui.ctx());
    }
}
