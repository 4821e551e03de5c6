use crate::app::GeoViewApp;

pub fn show(ctx: &egui::Context, app: &mut GeoViewApp) {
    let open_raster_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let open_vector_shortcut = egui::KeyboardShortcut::new(
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
        egui::Key::O,
    );
    let export_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open Raster...").shortcut_text(ctx.format_shortcut(&open_raster_shortcut))).clicked() {
                    ui.close();
                    app.open_raster();
                }

                if ui.add(egui::Button::new("Open Shapefile...").shortcut_text(ctx.format_shortcut(&open_vector_shortcut))).clicked() {
                    ui.close();
                    app.open_vector();
                }

                ui.separator();

                let can_export = app.viewport.rendered.is_some();
                if ui.add_enabled(can_export, egui::Button::new("Export View as PNG...").shortcut_text(ctx.format_shortcut(&export_shortcut))).clicked() {
                    ui.close();
                    app.export_view();
                }

                ui.separator();

                if ui.button("Import Display Settings...").clicked() {
                    ui.close();
                    app.import_settings();
                }

                if ui.button("Export Display Settings...").clicked() {
                    ui.close();
                    app.export_settings();
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus). Shifted first: Ctrl+O also matches Ctrl+Shift+O.
        if ctx.input_mut(|i| i.consume_shortcut(&open_vector_shortcut)) {
            app.open_vector();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&open_raster_shortcut)) {
            app.open_raster();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&export_shortcut)) {
            app.export_view();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
