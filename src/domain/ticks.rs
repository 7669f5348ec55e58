// Axis extent and tick computations
use crate::domain::sample::Sample;
use crate::domain::theme::ACCENT_COLOR;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};

pub const Y_TICK_STEP: f64 = 0.5;
/// Padding below `min_y` for the y range and first tick.
pub const Y_PAD_BELOW: f64 = 0.5;
/// Padding above `max_y` for the y range and tick bound.
pub const Y_PAD_ABOVE: f64 = 0.7;

/// Rounds away from zero to the next multiple of 0.5.
pub fn round_to_half(number: f64) -> f64 {
    if number < 0.0 {
        -((number.abs() * 2.0).ceil() / 2.0)
    } else {
        (number * 2.0).ceil() / 2.0
    }
}

/// `(min_y, max_y)` of the samples, each rounded outward to 0.5.
pub fn value_extent(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut values = samples.iter().map(|s| s.value);
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some((round_to_half(min), round_to_half(max)))
}

/// `start, start + step, ...` while below `stop`.
pub fn stepped_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let span = ((stop - start) / step).ceil();
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    (0..span as usize).map(|k| start + k as f64 * step).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct YTicks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

pub fn y_ticks(min_y: f64, max_y: f64) -> YTicks {
    let values = stepped_range(min_y - Y_PAD_BELOW, max_y + Y_PAD_ABOVE, Y_TICK_STEP);
    let labels = values.iter().map(|v| format!("{:.1} m", v)).collect();
    YTicks { values, labels }
}

/// Local-minus-UTC offset in whole hours, rounded away from zero.
pub fn utc_offset_hours(offset: &FixedOffset) -> i32 {
    let secs = offset.local_minus_utc();
    let hours = secs / 3600;
    if secs % 3600 == 0 {
        hours
    } else {
        hours + secs.signum()
    }
}

/// UTC hour shown under a local hour.
pub fn utc_hour(local_hour: u32, offset_hours: i32) -> u32 {
    (local_hour as i32 - offset_hours).rem_euclid(24) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct XTicks {
    pub values: Vec<NaiveDateTime>,
    pub labels: Vec<String>,
}

/// Ticks on every sample whose local hour is a multiple of three.
pub fn x_ticks(samples: &[Sample], offset_hours: i32) -> XTicks {
    let values: Vec<NaiveDateTime> = samples
        .iter()
        .map(|s| s.timestamp.naive_local())
        .filter(|t| t.hour() % 3 == 0)
        .map(truncate_to_hour)
        .collect();

    let labels = values
        .iter()
        .map(|t| x_tick_label(t.hour(), utc_hour(t.hour(), offset_hours)))
        .collect();

    XTicks { values, labels }
}

fn x_tick_label(local_hour: u32, utc_hour: u32) -> String {
    format!(
        "{}<br></br><span style=\"color:{}\">{}</span>",
        local_hour, ACCENT_COLOR, utc_hour
    )
}

fn truncate_to_hour(t: NaiveDateTime) -> NaiveDateTime {
    t.date()
        .and_hms_opt(t.hour(), 0, 0)
        .unwrap_or(t)
}

/// Wall-clock time of `t` as shown on the x axis.
pub fn axis_time(t: &DateTime<FixedOffset>) -> NaiveDateTime {
    t.naive_local()
}
