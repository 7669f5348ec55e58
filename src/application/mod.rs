// Application layer - Use cases and the seams they depend on
pub mod chart_renderer;
pub mod clock;
pub mod dashboard_service;
pub mod readout_provider;
pub mod refresh_feed;
pub mod session;
pub mod theme_patch;
