// Operational readouts shown around the chart
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DraughtReadout {
    pub actual: f64,
    pub selected: f64,
}

impl DraughtReadout {
    /// Text of the readout annotation at the top of the chart.
    pub fn annotation_text(&self) -> String {
        format!(
            "ACTUAL DRAUGHT <b>{:.2} m</b>   SELECTED DRAUGHT <b>{:.2} m</b>",
            self.actual, self.selected
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpsPosition {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readouts {
    pub draught: DraughtReadout,
    pub bit_depth: f64,
    pub corrected_bit_depth: f64,
    pub position: GpsPosition,
}
