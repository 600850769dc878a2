//! Chart generation models

use super::sample::RateSample;

/// A single data point on the rate chart; `index` is the row position in the store
#[derive(Debug, Clone)]
pub struct ChartPoint {
    pub index: usize,
    pub label: String,
    pub rate: f64,
}

impl ChartPoint {
    pub fn from_samples(samples: &[RateSample]) -> Vec<ChartPoint> {
        samples
            .iter()
            .enumerate()
            .map(|(index, sample)| ChartPoint {
                index,
                label: sample.time_label(),
                rate: sample.rate,
            })
            .collect()
    }
}
