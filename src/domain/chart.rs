// Chart specification, serialized as a Plotly figure
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub line: LineStyle,
    pub marker: MarkerStyle,
    pub showlegend: bool,
    pub hoverinfo: &'static str,
    pub x: Vec<NaiveDateTime>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliponaxis: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    pub color: &'static str,
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerOutline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerOutline {
    pub width: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    pub color: &'static str,
}

impl Font {
    pub fn colored(color: &'static str) -> Self {
        Self { size: None, color }
    }

    pub fn sized(size: f64, color: &'static str) -> Self {
        Self {
            size: Some(size),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub annotations: Vec<Annotation>,
    pub images: Vec<LayoutImage>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub tickvals: Vec<NaiveDateTime>,
    pub ticktext: Vec<String>,
    pub ticks: &'static str,
    pub tickfont: Font,
    pub range: [NaiveDateTime; 2],
    pub tickmode: &'static str,
    pub title: Option<String>,
    pub showgrid: bool,
    pub fixedrange: bool,
    pub rangemode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub range: [f64; 2],
    pub tickformat: &'static str,
    pub title: Option<String>,
    pub gridcolor: &'static str,
    pub gridwidth: f64,
    pub tickvals: Vec<f64>,
    pub ticktext: Vec<String>,
    pub tickfont: Font,
    pub showgrid: bool,
    pub tickmode: &'static str,
    pub zeroline: bool,
    pub fixedrange: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub text: String,
    pub showarrow: bool,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutImage {
    pub source: String,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: NaiveDateTime,
    pub y: f64,
    /// Width in axis units; milliseconds on a date axis.
    pub sizex: f64,
    pub sizey: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub layer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}
