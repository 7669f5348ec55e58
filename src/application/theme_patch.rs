// Theme patch - Moves an existing figure to another theme without re-rendering
use crate::domain::chart::ChartSpec;
use crate::domain::theme::ThemeMode;
use serde::Serialize;

/// Figure fields whose value depends on the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemedField {
    PlotBackground,
    XTickFont,
    YTickFont,
    ReadoutFont,
    ReferenceLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

use self::PathSegment::{Index, Key};

impl ThemedField {
    pub const ALL: [ThemedField; 5] = [
        ThemedField::PlotBackground,
        ThemedField::XTickFont,
        ThemedField::YTickFont,
        ThemedField::ReadoutFont,
        ThemedField::ReferenceLine,
    ];

    /// Location of the field inside the serialized figure.
    pub fn path(self) -> &'static [PathSegment] {
        match self {
            ThemedField::PlotBackground => &[Key("layout"), Key("plot_bgcolor")],
            ThemedField::XTickFont => &[Key("layout"), Key("xaxis"), Key("tickfont"), Key("color")],
            ThemedField::YTickFont => &[Key("layout"), Key("yaxis"), Key("tickfont"), Key("color")],
            ThemedField::ReadoutFont => &[
                Key("layout"),
                Key("annotations"),
                Index(0),
                Key("font"),
                Key("color"),
            ],
            ThemedField::ReferenceLine => &[Key("data"), Index(1), Key("line"), Key("color")],
        }
    }

    pub fn value_for(self, theme: ThemeMode) -> &'static str {
        let palette = theme.palette();
        match self {
            ThemedField::PlotBackground => palette.plot_bg_color,
            ThemedField::XTickFont | ThemedField::YTickFont | ThemedField::ReadoutFont => {
                palette.ticks_color
            }
            ThemedField::ReferenceLine => palette.dashed_line_color,
        }
    }

    fn set(self, chart: &mut ChartSpec, value: &'static str) {
        match self {
            ThemedField::PlotBackground => chart.layout.plot_bgcolor = value,
            ThemedField::XTickFont => chart.layout.xaxis.tickfont.color = value,
            ThemedField::YTickFont => chart.layout.yaxis.tickfont.color = value,
            ThemedField::ReadoutFont => {
                if let Some(annotation) = chart.layout.annotations.get_mut(0) {
                    annotation.font.color = value;
                }
            }
            ThemedField::ReferenceLine => {
                if let Some(trace) = chart.data.get_mut(1) {
                    trace.line.color = value;
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchOp {
    pub path: &'static [PathSegment],
    pub value: &'static str,
    #[serde(skip)]
    field: ThemedField,
}

/// Absolute assignments for every themed field; applying one twice is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemePatch {
    pub theme: ThemeMode,
    pub ops: Vec<PatchOp>,
}

impl ThemePatch {
    pub fn for_theme(theme: ThemeMode) -> Self {
        let ops = ThemedField::ALL
            .iter()
            .map(|&field| PatchOp {
                path: field.path(),
                value: field.value_for(theme),
                field,
            })
            .collect();
        Self { theme, ops }
    }

    pub fn apply(&self, chart: &mut ChartSpec) {
        for op in &self.ops {
            op.field.set(chart, op.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_renderer::ChartRenderer;
    use crate::domain::readouts::DraughtReadout;
    use crate::domain::sample::generate_samples;
    use chrono::{DateTime, FixedOffset, TimeZone};

    fn t0() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 20, 14, 42, 7)
            .unwrap()
    }

    fn render(theme: ThemeMode) -> ChartSpec {
        let draught = DraughtReadout {
            actual: 26.0,
            selected: 25.0,
        };
        ChartRenderer::new("/assets/drill.png".to_string())
            .render(t0(), &generate_samples(t0()), theme, &draught)
            .unwrap()
    }

    #[test]
    fn test_patch_matches_full_render() {
        let mut chart = render(ThemeMode::Light);
        ThemePatch::for_theme(ThemeMode::Dark).apply(&mut chart);
        assert_eq!(chart, render(ThemeMode::Dark));

        let mut chart = render(ThemeMode::Dark);
        ThemePatch::for_theme(ThemeMode::Light).apply(&mut chart);
        assert_eq!(chart, render(ThemeMode::Light));
    }

    #[test]
    fn test_round_trip_restores_light_colors() {
        let original = render(ThemeMode::Light);
        let mut chart = original.clone();
        ThemePatch::for_theme(ThemeMode::Dark).apply(&mut chart);
        assert_ne!(chart, original);
        ThemePatch::for_theme(ThemeMode::Light).apply(&mut chart);
        assert_eq!(chart, original);
    }

    #[test]
    fn test_repeated_toggles_do_not_drift() {
        let mut toggled = render(ThemeMode::Light);
        for theme in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark] {
            ThemePatch::for_theme(theme).apply(&mut toggled);
        }
        let mut once = render(ThemeMode::Light);
        ThemePatch::for_theme(ThemeMode::Dark).apply(&mut once);
        assert_eq!(toggled, once);
    }

    #[test]
    fn test_patch_paths_resolve_in_serialized_figure() {
        let chart = render(ThemeMode::Dark);
        let json = serde_json::to_value(&chart).unwrap();

        for op in &ThemePatch::for_theme(ThemeMode::Dark).ops {
            let mut node = &json;
            for segment in op.path {
                node = match segment {
                    Key(key) => &node[*key],
                    Index(i) => &node[*i],
                };
            }
            assert_eq!(node, op.value, "path {:?}", op.path);
        }
    }

    #[test]
    fn test_patch_serialization() {
        let json = serde_json::to_value(ThemePatch::for_theme(ThemeMode::Dark)).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["ops"].as_array().unwrap().len(), 5);
        assert_eq!(
            json["ops"][4],
            serde_json::json!({"path": ["data", 1, "line", "color"], "value": "white"})
        );
    }
}
