use std::env;
use std::path::Path;

use flexi_logger::{Logger, LoggerHandle};
use plotters::prelude::*;

use trace_smoother::config::{load_config, SmootherConfig};
use trace_smoother::smoothing::tools::compute_mean_and_std;
use trace_smoother::synthetic::noisy_steps;
use trace_smoother::trace_io::{read_trace, smooth_in_batches, write_trace, DEFAULT_BATCH_SIZE};
use trace_smoother::SmoothingParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = setup_logging("info")?;

    match env::args().nth(1) {
        Some(config_path) => run_from_config(&load_config(Path::new(&config_path))?),
        None => run_demo(),
    }
}

fn setup_logging(base_level: &str) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    Logger::try_with_env_or_str(base_level)?.start()
}

fn run_from_config(config: &SmootherConfig) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_trace(&config.input, config.max_samples, config.strict)?;
    if raw.is_empty() {
        log::warn!("No samples found in {}", config.input.display());
    }

    let smoothed = smooth_in_batches(&raw, config.batch_size, &config.filter);
    write_trace(&config.output, &smoothed)?;
    log::info!("Wrote {} smoothed samples to {}", smoothed.len(), config.output.display());

    if let Some(plot_path) = &config.plot {
        if !raw.is_empty() {
            plot_sequences(plot_path, &raw, &smoothed)?;
        }
    }

    Ok(())
}

// No config given: smooth a synthetic step trace and plot it
fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    log::info!("No config file given, running on a synthetic trace");
    log::info!("Usage: trace-smoother <config.json>");

    let raw = noisy_steps(&[1000.0, 600.0, 1200.0, 900.0], 50, 60.0, 6)?;
    let smoothed = smooth_in_batches(&raw, DEFAULT_BATCH_SIZE, &SmoothingParams::default());

    let [_, std_raw] = compute_mean_and_std(&raw);
    let [_, std_smoothed] = compute_mean_and_std(&smoothed);
    log::info!("Standard deviation {:.2} -> {:.2}", std_raw, std_smoothed);

    plot_sequences(Path::new("smoothing_plot.png"), &raw, &smoothed)
}

fn plot_sequences(path: &Path, raw: &[f64], smoothed: &[f64]) -> Result<(), Box<dyn std::error::Error>> {
    let root_area = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let x_range = 0..raw.len();
    let y_min = raw.iter().cloned().fold(f64::INFINITY, f64::min)
        .min(smoothed.iter().cloned().fold(f64::INFINITY, f64::min));
    let y_max = raw.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        .max(smoothed.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
    // Flat traces still need a non-empty y range
    let y_max = if y_max > y_min { y_max } else { y_min + 1.0 };

    let mut chart = ChartBuilder::on(&root_area)
        .caption("Raw and Smoothed Trace", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_min..y_max)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(LineSeries::new(
        raw.iter().enumerate().map(|(i, &v)| (i, v)),
        &RED,
    ))?.label("Raw")
      .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart.draw_series(LineSeries::new(
        smoothed.iter().enumerate().map(|(i, &v)| (i, v)),
        &BLUE,
    ))?.label("Smoothed")
      .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root_area.present()?;
    log::info!("Plot saved to {}", path.display());

    Ok(())
}
