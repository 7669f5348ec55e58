// Local and UTC clock strings for the info strip
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockDisplay {
    pub local: String,
    pub utc: String,
}

impl ClockDisplay {
    pub fn at(now: &DateTime<FixedOffset>) -> Self {
        Self {
            local: now.format(CLOCK_FORMAT).to_string(),
            utc: now.naive_utc().format(CLOCK_FORMAT).to_string(),
        }
    }
}
