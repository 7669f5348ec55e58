// Dashboard refresh frame
use super::chart::ChartSpec;
use super::clock_display::ClockDisplay;
use serde::Serialize;

/// Everything the page redraws on a timer tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshFrame {
    pub clocks: ClockDisplay,
    pub figure: ChartSpec,
}

impl RefreshFrame {
    pub fn new(clocks: ClockDisplay, figure: ChartSpec) -> Self {
        Self { clocks, figure }
    }
}
