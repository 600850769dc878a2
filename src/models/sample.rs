//! Rate sample models

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize, Serializer};

/// One jittered CDI observation, persisted as a `data,hora,taxa` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSample {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "hora")]
    pub time: NaiveTime,
    #[serde(rename = "taxa", serialize_with = "serialize_rate")]
    pub rate: f64,
}

impl RateSample {
    /// Draw a sample from `base_rate ± jitter` stamped with `now`
    pub fn jittered<Tz: TimeZone, R: Rng + ?Sized>(
        base_rate: f64,
        jitter: f64,
        now: &DateTime<Tz>,
        rng: &mut R,
    ) -> Self {
        let offset = if jitter > 0.0 { rng.gen_range(-jitter..=jitter) } else { 0.0 };
        let naive = now.naive_local();

        RateSample {
            date: naive.date(),
            time: naive.time().with_nanosecond(0).unwrap_or_else(|| naive.time()),
            rate: round_to_places(base_rate + offset, 4),
        }
    }

    /// Time-of-day label used on the chart's x axis
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn serialize_rate<S: Serializer>(rate: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.4}", rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(12.345678, 4), 12.3457);
        assert_eq!(round_to_places(9.99996, 4), 10.0);
        assert_eq!(round_to_places(10.65, 4), 10.65);
    }

    #[test]
    fn test_jittered_sample_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Local::now();

        for _ in 0..200 {
            let sample = RateSample::jittered(10.65, 0.5, &now, &mut rng);
            assert!(sample.rate >= 10.15 && sample.rate <= 11.15, "rate {} out of range", sample.rate);
            assert_eq!(sample.rate, round_to_places(sample.rate, 4));
        }
    }

    #[test]
    fn test_jittered_sample_drops_subseconds() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 1).unwrap()
            + chrono::Duration::milliseconds(750);

        let sample = RateSample::jittered(12.0, 0.0, &now, &mut rng);
        assert_eq!(sample.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(sample.time_label(), "10:00:01");
        assert_eq!(sample.rate, 12.0);
    }
}
