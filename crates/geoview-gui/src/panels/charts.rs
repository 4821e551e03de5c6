use egui_plot::{Bar, BarChart, Plot};

use crate::app::GeoViewApp;
use crate::states::ChartWindow;

/// Draw every open attribute chart in its own native window.
pub fn show(ctx: &egui::Context, app: &mut GeoViewApp) {
    let size = app.settings.chart.window_size;
    let bar_width = app.settings.chart.bar_width;

    for window in app.charts.iter_mut() {
        let builder = egui::ViewportBuilder::default()
            .with_title(window.title())
            .with_inner_size(size);

        ctx.show_viewport_immediate(window.viewport_id(), builder, |ctx, class| {
            if matches!(class, egui::ViewportClass::Embedded) {
                // Backend without multi-viewport support.
                let mut open = window.open;
                egui::Window::new(window.title())
                    .id(egui::Id::new(("attribute_chart", window.id)))
                    .open(&mut open)
                    .default_size(size)
                    .resizable(true)
                    .show(ctx, |ui| chart_plot(ui, window, bar_width));
                window.open = open;
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| chart_plot(ui, window, bar_width));
            if ctx.input(|i| i.viewport().close_requested()) {
                window.open = false;
            }
        });
    }
    app.charts.retain_open();
}

fn chart_plot(ui: &mut egui::Ui, window: &ChartWindow, bar_width: f64) {
    let chart = &window.chart;
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|bar| Bar::new(bar.x, bar.value).width(bar_width))
        .collect();

    Plot::new(("attribute_plot", window.id))
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(chart.attribute.clone(), bars));
        });
}
