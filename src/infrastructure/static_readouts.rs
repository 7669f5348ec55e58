// Configured readouts, standing in for a live telemetry feed
use crate::application::readout_provider::ReadoutProvider;
use crate::domain::readouts::{DraughtReadout, GpsPosition, Readouts};
use crate::infrastructure::config::ReadoutsConfig;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct StaticReadouts {
    readouts: Readouts,
}

impl StaticReadouts {
    pub fn new(config: &ReadoutsConfig) -> Self {
        Self {
            readouts: Readouts {
                draught: DraughtReadout {
                    actual: config.actual_draught,
                    selected: config.selected_draught,
                },
                bit_depth: config.bit_depth,
                corrected_bit_depth: config.corrected_bit_depth,
                position: GpsPosition {
                    latitude: config.latitude.clone(),
                    longitude: config.longitude.clone(),
                },
            },
        }
    }
}

#[async_trait]
impl ReadoutProvider for StaticReadouts {
    async fn readouts(&self) -> anyhow::Result<Readouts> {
        Ok(self.readouts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_configured_values() {
        let config = ReadoutsConfig {
            actual_draught: 26.0,
            selected_draught: 25.0,
            bit_depth: 354.21,
            corrected_bit_depth: 353.9,
            latitude: "lat".to_string(),
            longitude: "lon".to_string(),
        };
        let readouts = StaticReadouts::new(&config).readouts().await.unwrap();

        assert_eq!(readouts.draught.actual, 26.0);
        assert_eq!(readouts.draught.selected, 25.0);
        assert_eq!(readouts.corrected_bit_depth, 353.9);
        assert_eq!(readouts.position.longitude, "lon");
    }
}
