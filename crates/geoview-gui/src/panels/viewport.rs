use crate::app::GeoViewApp;

pub fn show(ctx: &egui::Context, app: &mut GeoViewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), egui::vec2(t.size()[0] as f32, t.size()[1] as f32)));

        if let Some((texture_id, image_size)) = texture_info {
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_zoom(ui, &response, app, rect);
            handle_pan(ui, &response, app);

            if response.double_clicked() {
                fit_to_rect(app, image_size, rect);
            }

            let img_rect = compute_img_rect(rect, image_size, app);
            draw_image(ui, texture_id, img_rect);
            draw_viewing_label(ui, rect, &app.viewport.viewing_label);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut GeoViewApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let limits = &app.settings.viewport;
    let zoom_factor = (scroll_delta * 0.005).exp();
    let new_zoom = (app.viewport.zoom * zoom_factor).clamp(limits.min_zoom, limits.max_zoom);

    // Zoom toward mouse cursor
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let center = rect.center().to_vec2() + app.viewport.pan_offset;
        let mouse_rel = mouse_pos.to_vec2() - center;
        let scale_change = new_zoom / app.viewport.zoom;
        app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
    }

    app.viewport.zoom = new_zoom;
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut GeoViewApp) {
    if response.dragged_by(egui::PointerButton::Middle)
        || (response.dragged_by(egui::PointerButton::Primary) && ui.input(|i| i.modifiers.command))
    {
        app.viewport.pan_offset += response.drag_delta();
    }
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &GeoViewApp) -> egui::Rect {
    let scaled = image_size * app.viewport.zoom;
    let center = rect.center() + app.viewport.pan_offset;
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Load a raster and press Display Raster")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn fit_to_rect(app: &mut GeoViewApp, image_size: egui::Vec2, rect: egui::Rect) {
    let limits = &app.settings.viewport;
    let available = rect.size();
    let fit_x = available.x / image_size.x;
    let fit_y = available.y / image_size.y;
    app.viewport.zoom = fit_x.min(fit_y).clamp(limits.min_zoom, limits.max_zoom);
    app.viewport.pan_offset = egui::Vec2::ZERO;
}
