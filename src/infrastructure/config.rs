use anyhow::Context;
use chrono::FixedOffset;
use serde::Deserialize;
use std::time::Duration;

const ENV_PREFIX: &str = "HEAVE_DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub clock: ClockSettings,
    pub chart: ChartSettings,
    pub assets: AssetSettings,
    pub readouts: ReadoutsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_ms: u64,
}

impl RefreshSettings {
    pub fn interval(&self) -> anyhow::Result<Duration> {
        if self.interval_ms == 0 {
            anyhow::bail!("refresh.interval_ms must be greater than zero");
        }
        Ok(Duration::from_millis(self.interval_ms))
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClockSettings {
    /// Pins the local offset instead of using the host timezone.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl ClockSettings {
    pub fn fixed_offset(&self) -> anyhow::Result<Option<FixedOffset>> {
        self.utc_offset_minutes
            .map(|minutes| {
                FixedOffset::east_opt(minutes * 60)
                    .with_context(|| format!("clock.utc_offset_minutes out of range: {}", minutes))
            })
            .transpose()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub marker_image: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetSettings {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReadoutsConfig {
    pub actual_draught: f64,
    pub selected_draught: f64,
    pub bit_depth: f64,
    pub corrected_bit_depth: f64,
    pub latitude: String,
    pub longitude: String,
}

/// Defaults, then `config/dashboard.{toml,...}` if present, then `HEAVE_DASHBOARD__*` variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(config::File::with_name("config/dashboard").required(false))
}

fn build_config<S>(file: S) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("refresh.interval_ms", 1000_i64)?
        .set_default("chart.marker_image", "/assets/drill.png")?
        .set_default("assets.dir", "assets")?
        .set_default("readouts.actual_draught", 26.0)?
        .set_default("readouts.selected_draught", 25.0)?
        .set_default("readouts.bit_depth", 354.21)?
        .set_default("readouts.corrected_bit_depth", 354.21)?
        .set_default("readouts.latitude", "52.220156 / N 52° 13' 12.561")?
        .set_default("readouts.longitude", "20.978256 / E 20° 58' 41.721")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in a template.
///
/// Substituted values are copied verbatim, never scanned for placeholders.
/// Unknown names are left in place.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            rest = &rest[start..];
            break;
        };
        let name = &after[..end];
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> anyhow::Result<DashboardConfig> {
        build_config(File::from_str(toml, FileFormat::Toml))
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.refresh.interval().unwrap(), Duration::from_secs(1));
        assert_eq!(config.readouts.actual_draught, 26.0);
        assert_eq!(config.readouts.selected_draught, 25.0);
        assert_eq!(config.chart.marker_image, "/assets/drill.png");
        assert!(config.clock.fixed_offset().unwrap().is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = from_toml(
            r#"
            [refresh]
            interval_ms = 250

            [clock]
            utc_offset_minutes = -120

            [readouts]
            actual_draught = 21.5
            "#,
        )
        .unwrap();

        assert_eq!(config.refresh.interval().unwrap(), Duration::from_millis(250));
        assert_eq!(config.readouts.actual_draught, 21.5);
        assert_eq!(config.readouts.selected_draught, 25.0);
        assert_eq!(
            config.clock.fixed_offset().unwrap(),
            FixedOffset::west_opt(2 * 3600)
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = from_toml("[refresh]\ninterval_ms = 0\n").unwrap();
        assert!(config.refresh.interval().is_err());

        let config = from_toml("[clock]\nutc_offset_minutes = 100000\n").unwrap();
        assert!(config.clock.fixed_offset().is_err());
    }

    #[test]
    fn test_fill_template() {
        let vars = [("bit_depth", "354.21".to_string()), ("lat", "52.2".to_string())];
        let result = fill_template("depth ${bit_depth} m at ${lat}, ${unknown}", &vars);
        assert_eq!(result, "depth 354.21 m at 52.2, ${unknown}");
    }

    #[test]
    fn test_fill_template_does_not_expand_values() {
        let vars = [
            ("latitude", "${longitude}".to_string()),
            ("longitude", "EAST".to_string()),
        ];
        let result = fill_template("LAT: ${latitude} LON: ${longitude} ${open", &vars);
        assert_eq!(result, "LAT: ${longitude} LON: EAST ${open");
    }
}
