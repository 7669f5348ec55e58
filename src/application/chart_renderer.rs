// Chart renderer - Turns a heave sample set into a Plotly figure
use crate::domain::chart::{
    Annotation, ChartSpec, Font, Layout, LayoutImage, LineStyle, Margin, MarkerOutline,
    MarkerStyle, Trace, XAxis, YAxis,
};
use crate::domain::readouts::DraughtReadout;
use crate::domain::sample::{window, Sample};
use crate::domain::theme::{ThemeMode, ACCENT_COLOR};
use crate::domain::ticks::{
    axis_time, stepped_range, utc_offset_hours, value_extent, x_ticks, y_ticks, Y_PAD_ABOVE,
    Y_PAD_BELOW,
};
use chrono::{DateTime, FixedOffset};

/// Index of the sample the marker image and reference line anchor on.
pub const ANCHOR_SAMPLE: usize = 2;

const LINE_WIDTH: f64 = 1.2;
const REFERENCE_DEPTH_BELOW_MIN: f64 = 2.0;
const REFERENCE_STEP: f64 = 0.1;
const ANNOTATION_X: f64 = 0.98;
const ANNOTATION_Y_INSET: f64 = 0.3;
const MARKER_IMAGE_WIDTH_MS: f64 = 30_000_000.0;
const DISCLAIMER: &str = "Only effective sea level data is shown";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("chart needs at least {required} samples, got {found}")]
    InsufficientSamples { required: usize, found: usize },
}

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    marker_image: String,
}

impl ChartRenderer {
    pub fn new(marker_image: String) -> Self {
        Self { marker_image }
    }

    pub fn render(
        &self,
        now: DateTime<FixedOffset>,
        samples: &[Sample],
        theme: ThemeMode,
        draught: &DraughtReadout,
    ) -> Result<ChartSpec, ChartError> {
        let anchor = samples.get(ANCHOR_SAMPLE).ok_or(ChartError::InsufficientSamples {
            required: ANCHOR_SAMPLE + 1,
            found: samples.len(),
        })?;
        let (min_y, max_y) = value_extent(samples).ok_or(ChartError::InsufficientSamples {
            required: ANCHOR_SAMPLE + 1,
            found: 0,
        })?;

        let palette = theme.palette();
        let anchor_x = axis_time(&anchor.timestamp);
        let (start, end) = window(now);

        let series = Trace {
            kind: "scatter",
            mode: "markers+lines",
            line: LineStyle {
                color: ACCENT_COLOR,
                width: LINE_WIDTH,
                shape: Some("spline"),
                dash: None,
            },
            marker: MarkerStyle {
                symbol: Some("square"),
                color: "white",
                size: 8.0,
                line: Some(MarkerOutline {
                    width: 1.0,
                    color: ACCENT_COLOR,
                }),
            },
            showlegend: false,
            hoverinfo: "skip",
            x: samples.iter().map(|s| axis_time(&s.timestamp)).collect(),
            y: samples.iter().map(|s| s.value).collect(),
            cliponaxis: None,
        };

        let reference_y = stepped_range(min_y - REFERENCE_DEPTH_BELOW_MIN, anchor.value, REFERENCE_STEP);
        let reference = Trace {
            kind: "scatter",
            mode: "lines",
            line: LineStyle {
                color: palette.dashed_line_color,
                width: LINE_WIDTH,
                shape: None,
                dash: Some("dash"),
            },
            marker: MarkerStyle {
                symbol: None,
                color: "blue",
                size: 1.0,
                line: None,
            },
            showlegend: false,
            hoverinfo: "skip",
            x: vec![anchor_x; reference_y.len()],
            y: reference_y,
            cliponaxis: Some(false),
        };

        let x = x_ticks(samples, utc_offset_hours(now.offset()));
        let y = y_ticks(min_y, max_y);

        let layout = Layout {
            xaxis: XAxis {
                tickvals: x.values,
                ticktext: x.labels,
                ticks: "outside",
                tickfont: Font::colored(palette.ticks_color),
                range: [axis_time(&start), axis_time(&end)],
                tickmode: "array",
                title: None,
                showgrid: false,
                fixedrange: true,
                rangemode: "tozero",
            },
            yaxis: YAxis {
                range: [min_y - Y_PAD_BELOW, max_y + Y_PAD_ABOVE],
                tickformat: ".1f",
                title: None,
                gridcolor: "rgba(245,247,251,1.0)",
                gridwidth: 0.1,
                tickvals: y.values,
                ticktext: y.labels,
                tickfont: Font::colored(palette.ticks_color),
                showgrid: true,
                tickmode: "array",
                zeroline: false,
                fixedrange: true,
            },
            annotations: vec![
                Annotation {
                    x: ANNOTATION_X,
                    y: max_y + ANNOTATION_Y_INSET,
                    xref: "paper",
                    yref: "y",
                    text: draught.annotation_text(),
                    showarrow: false,
                    font: Font::sized(15.0, palette.ticks_color),
                },
                Annotation {
                    x: ANNOTATION_X,
                    y: min_y - ANNOTATION_Y_INSET,
                    xref: "paper",
                    yref: "y",
                    text: DISCLAIMER.to_string(),
                    showarrow: false,
                    font: Font::sized(13.0, ACCENT_COLOR),
                },
            ],
            images: vec![LayoutImage {
                source: self.marker_image.clone(),
                xref: "x",
                yref: "y",
                x: anchor_x,
                y: anchor.value,
                sizex: MARKER_IMAGE_WIDTH_MS,
                sizey: 1.0,
                xanchor: "center",
                yanchor: "middle",
                layer: "above",
            }],
            paper_bgcolor: "rgba(0, 0, 0, 0)",
            plot_bgcolor: palette.plot_bg_color,
            margin: Margin {
                l: 62,
                r: 38,
                t: 0,
                b: 10,
            },
        };

        Ok(ChartSpec {
            data: vec![series, reference],
            layout,
        })
    }
}
