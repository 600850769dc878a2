//! Data models for the CDI tracker
//!
//! Samples are what the writer persists; chart points are what the renderer plots.

pub mod chart;
pub mod sample;

pub use chart::ChartPoint;
pub use sample::RateSample;
