use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::thread;

use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use rand::Rng;
use tracing::{debug, info};

use crate::config::SamplingSettings;
use crate::models::RateSample;
use crate::utils::errors::StoreError;

/// The store needs a header when it is missing or has no bytes yet
fn needs_header(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> StoreError {
    StoreError::Csv {
        path: path.display().to_string(),
        source,
    }
}

/// Append `settings.sample_count` jittered samples of `base_rate` to the CSV store.
///
/// Each row is flushed as soon as it is written and the thread blocks for
/// `settings.interval` between rows, so timestamps are spread in real time.
pub fn append_samples<R: Rng + ?Sized>(
    path: &Path,
    base_rate: f64,
    settings: &SamplingSettings,
    rng: &mut R,
) -> Result<Vec<RateSample>, StoreError> {
    let write_header = needs_header(path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;

    let mut writer = WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    let mut written = Vec::with_capacity(settings.sample_count);

    for i in 0..settings.sample_count {
        if i > 0 && !settings.interval.is_zero() {
            thread::sleep(settings.interval);
        }

        let sample = RateSample::jittered(base_rate, settings.jitter, &Local::now(), rng);
        writer.serialize(&sample).map_err(|e| csv_error(path, e))?;
        writer.flush().map_err(|e| io_error(path, e))?;

        debug!("Sample {}/{}: {:?}", i + 1, settings.sample_count, sample);
        written.push(sample);
    }

    info!("CSV file '{}' updated with {} samples", path.display(), written.len());
    Ok(written)
}

/// Load every sample in the store, in file order
pub fn load_samples(path: &Path) -> Result<Vec<RateSample>, StoreError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    reader
        .deserialize::<RateSample>()
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|e| {
                debug!("Bad row at line {} of '{}'", idx + 2, path.display());
                csv_error(path, e)
            })
        })
        .collect()
}
