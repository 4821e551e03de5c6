use geoview_core::chart::AttributeChart;

/// One open attribute chart window.
pub struct ChartWindow {
    pub id: u64,
    pub chart: AttributeChart,
    pub open: bool,
}

impl ChartWindow {
    pub fn title(&self) -> String {
        format!("{} (chart {})", self.chart.attribute, self.id)
    }

    /// Native viewport backing this chart; stable for the window's lifetime.
    pub fn viewport_id(&self) -> egui::ViewportId {
        egui::ViewportId::from_hash_of(("attribute_chart", self.id))
    }
}

/// Chart windows opened so far. Each successful plot adds a new window;
/// windows only go away when the user closes them.
#[derive(Default)]
pub struct ChartWindows {
    windows: Vec<ChartWindow>,
    next_id: u64,
}

impl ChartWindows {
    pub fn push(&mut self, chart: AttributeChart) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.windows.push(ChartWindow {
            id,
            chart,
            open: true,
        });
        id
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ChartWindow> {
        self.windows.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Drop windows the user has closed.
    pub fn retain_open(&mut self) {
        self.windows.retain(|w| w.open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoview_core::chart::ChartBar;

    fn chart(name: &str) -> AttributeChart {
        AttributeChart {
            attribute: name.into(),
            x_label: "Feature Index".into(),
            y_label: name.into(),
            bars: vec![ChartBar { x: 0.0, value: 1.0 }],
        }
    }

    #[test]
    fn test_each_push_opens_a_new_window() {
        let mut charts = ChartWindows::default();
        let a = charts.push(chart("population"));
        let b = charts.push(chart("population"));
        assert_ne!(a, b);
        assert_eq!(charts.len(), 2);
    }

    #[test]
    fn test_each_window_gets_its_own_viewport() {
        let mut charts = ChartWindows::default();
        charts.push(chart("population"));
        charts.push(chart("population"));
        let ids: Vec<egui::ViewportId> = charts.iter_mut().map(|w| w.viewport_id()).collect();
        assert_ne!(ids[0], ids[1]);
        assert!(ids.iter().all(|id| *id != egui::ViewportId::ROOT));
    }

    #[test]
    fn test_closed_windows_are_dropped() {
        let mut charts = ChartWindows::default();
        charts.push(chart("id"));
        charts.push(chart("population"));
        if let Some(first) = charts.iter_mut().next() {
            first.open = false;
        }
        charts.retain_open();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts.iter_mut().next().unwrap().chart.attribute, "population");
    }
}
