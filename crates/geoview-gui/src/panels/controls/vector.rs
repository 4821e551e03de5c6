use crate::app::GeoViewApp;

pub(super) fn vector_section(ui: &mut egui::Ui, app: &mut GeoViewApp) {
    let status = app
        .viewer
        .vector_info()
        .map(|info| format!("{} features", info.row_count));
    crate::panels::section_header(ui, "Shapefile", status.as_deref());
    ui.add_space(4.0);

    if super::action_button(ui, "Load Shapefile...") {
        app.open_vector();
    }

    if let Some(table) = app.viewer.feature_table() {
        if let Some(info) = app.viewer.vector_info() {
            super::file_label(ui, &info.path);
        }
        let geometry = table.geometry_types().join(", ");
        if !geometry.is_empty() {
            ui.small(format!("Geometry: {geometry}"));
        }
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Attribute:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.viewer.session_mut().attribute_text)
                .desired_width(f32::INFINITY),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            app.plot_attribute();
        }
    });

    // Column picker fills the free-text field; the name is still checked on plot.
    let columns = app
        .viewer
        .vector_info()
        .map(|info| info.columns.clone())
        .unwrap_or_default();
    if !columns.is_empty() {
        let current = app.viewer.session().attribute_text.clone();
        egui::ComboBox::from_label("Columns")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for column in &columns {
                    let session = app.viewer.session_mut();
                    if ui
                        .selectable_label(session.attribute_text == *column, column)
                        .clicked()
                    {
                        session.attribute_text = column.clone();
                    }
                }
            });
    }

    if super::action_button(ui, "Plot Attribute") {
        app.plot_attribute();
    }
}
