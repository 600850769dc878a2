use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{info, warn};

use crate::config::ChartSettings;
use crate::models::ChartPoint;
use crate::services::sample_service;
use crate::utils::errors::ChartError;

const CHART_TITLE: &str = "Taxa CDI ao longo do tempo";
const X_DESC: &str = "Hora";
const Y_DESC: &str = "Taxa CDI";

/// `<name>.png`, relative to the working directory
pub fn chart_path(chart_name: &str) -> PathBuf {
    PathBuf::from(format!("{}.png", chart_name))
}

/// Y range with 10% padding; a flat or empty series still gets a visible band.
/// Non-finite rates and a padded range that overflows `f64` are errors.
fn rate_range(points: &[ChartPoint]) -> Result<(f64, f64), ChartError> {
    if let Some(bad) = points.iter().find(|p| !p.rate.is_finite()) {
        return Err(ChartError::NonFiniteRate {
            row: bad.index + 1,
            rate: bad.rate,
        });
    }

    if points.is_empty() {
        return Ok((0.0, 1.0));
    }

    let min_rate = points.iter().map(|p| p.rate).fold(f64::INFINITY, f64::min);
    let max_rate = points.iter().map(|p| p.rate).fold(f64::NEG_INFINITY, f64::max);

    let padding = ((max_rate - min_rate) * 0.1).max(0.01);
    let (y_min, y_max) = (min_rate - padding, max_rate + padding);
    if !padding.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
        return Err(ChartError::UnplottableRange {
            min: min_rate,
            max: max_rate,
        });
    }

    Ok((y_min, y_max))
}

/// Render the whole CSV store to `<chart_name>.png`.
///
/// Returns `Ok(None)` without touching the output when the store does not exist yet.
pub fn render_chart(
    csv_path: &Path,
    chart_name: &str,
    settings: &ChartSettings,
) -> Result<Option<PathBuf>, ChartError> {
    if !csv_path.exists() {
        warn!(
            "File '{}' not found. Generate the CSV before rendering a chart.",
            csv_path.display()
        );
        return Ok(None);
    }

    let samples = sample_service::load_samples(csv_path)?;
    let points = ChartPoint::from_samples(&samples);
    if points.is_empty() {
        warn!("CSV store '{}' has no rows; rendering an empty chart", csv_path.display());
    }

    let y_range = rate_range(&points)?;
    let output = chart_path(chart_name);
    draw(&output, &points, y_range, settings)?;

    info!("Chart saved as '{}'", output.display());
    Ok(Some(output))
}

fn draw(
    output: &Path,
    points: &[ChartPoint],
    (y_min, y_max): (f64, f64),
    settings: &ChartSettings,
) -> Result<(), ChartError> {
    // The backend writes the file on present() and is released when this scope ends
    let backend = BitMapBackend::new(output, (settings.width, settings.height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::drawing("fill canvas", e))?;

    // One slot of padding on each side so the first and last labels are not clipped
    let x_max = points.len() as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 28.0).into_font())
        .margin(15)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d(-1i32..x_max, y_min..y_max)
        .map_err(|e| ChartError::drawing("build chart", e))?;

    let label_style = ("sans-serif", 12.0)
        .into_font()
        .transform(FontTransform::Rotate90);

    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    let x_formatter = |x: &i32| -> String {
        usize::try_from(*x)
            .ok()
            .and_then(|i| labels.get(i))
            .map(|l| l.to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_labels(points.len() + 2)
        .x_label_formatter(&x_formatter)
        .x_label_style(label_style)
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .draw()
        .map_err(|e| ChartError::drawing("draw mesh", e))?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.index as i32, p.rate)),
            &BLUE,
        ))
        .map_err(|e| ChartError::drawing("draw line", e))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.index as i32, p.rate), 3, BLUE.filled())),
        )
        .map_err(|e| ChartError::drawing("draw points", e))?;

    root.present()
        .map_err(|e| ChartError::drawing("render chart", e))?;

    Ok(())
}
