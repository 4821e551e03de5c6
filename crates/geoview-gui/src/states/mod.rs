mod charts;
mod ui;
mod viewport;

pub use charts::{ChartWindow, ChartWindows};
pub use ui::UIState;
pub use viewport::ViewportState;
