// Domain layer - Samples, ticks, themes and the chart model
pub mod chart;
pub mod clock_display;
pub mod dashboard;
pub mod readouts;
pub mod sample;
pub mod theme;
pub mod ticks;
