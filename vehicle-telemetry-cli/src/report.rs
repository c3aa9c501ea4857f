//! Text rendering of the dashboard
//!
//! Renders the latest sample as labeled metrics, sparkline charts of the trailing
//! window, and a fixed-width table. Nothing is rendered for an empty log.

use std::fmt::Write as _;
use vehicle_telemetry::export::format_decimal;
use vehicle_telemetry::{Sample, Session};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Shown instead of metrics, charts and tables while the log is empty
pub const NO_SAMPLES: &str = "No samples yet. Type `start` to begin monitoring.";
const RULE: &str = "───────────────────────────────────────────────────────────────────────────────";

/// Full dashboard: status line, metrics, charts and table of the last `window` samples
pub fn render_dashboard(session: &Session, window: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_status(session));
    out.push('\n');

    let log = session.log();
    let Some(latest) = log.latest() else {
        out.push('\n');
        out.push_str(NO_SAMPLES);
        out.push('\n');
        return out;
    };

    let recent = log.tail(window);
    out.push_str("\n📊 Live Vehicle Metrics\n");
    out.push_str(&render_metrics(latest));
    out.push_str("\n\n📈 Sensor Trends (last ");
    out.push_str(&recent.len().to_string());
    out.push_str(" samples)\n");
    out.push_str(&render_charts(recent));
    out.push_str("\n📋 Sensor Data\n");
    out.push_str(&render_table(recent));
    out
}

/// One-line run state summary
pub fn render_status(session: &Session) -> String {
    format!(
        "🚘 Vehicle Telemetry  [{}]  samples: {}",
        session.run_state(),
        session.log().len()
    )
}

/// Latest sample as labeled metrics
pub fn render_metrics(sample: &Sample) -> String {
    format!(
        "Speed {} | RPM {} | Fuel {}% | Battery {}V | Temp {}°C | Gear {} | Distance {} km | Alert {}",
        sample.speed(),
        sample.rpm(),
        sample.fuel(),
        format_decimal(sample.battery()),
        sample.temperature(),
        sample.gear(),
        format_decimal(sample.distance()),
        sample.alert()
    )
}

/// Sparkline per series over the given samples
pub fn render_charts(samples: &[Sample]) -> String {
    let series: [(&str, fn(&Sample) -> f64); 5] = [
        ("Speed", |s: &Sample| f64::from(s.speed())),
        ("RPM", |s: &Sample| f64::from(s.rpm())),
        ("Fuel Level", |s: &Sample| f64::from(s.fuel())),
        ("Battery Voltage", |s: &Sample| s.battery()),
        ("Engine Temp", |s: &Sample| f64::from(s.temperature())),
    ];

    let mut out = String::new();
    for (title, value_of) in series {
        let values: Vec<f64> = samples.iter().map(value_of).collect();
        let (min, max) = bounds(&values);
        let _ = writeln!(
            out,
            "{:<16} {:<20} min {:>7} max {:>7}",
            title,
            sparkline(&values),
            format_value(min),
            format_value(max)
        );
    }
    out
}

/// Fixed-width table of the given samples
pub fn render_table(samples: &[Sample]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8}  {:>5}  {:>4}  {:>4}  {:>7}  {:>11}  {:>4}  {:>8}  {}",
        "Time", "Speed", "RPM", "Fuel", "Battery", "Temperature", "Gear", "Distance", "Alert"
    );
    out.push_str(RULE);
    out.push('\n');
    for sample in samples {
        let _ = writeln!(
            out,
            "{:<8}  {:>5}  {:>4}  {:>4}  {:>7}  {:>11}  {:>4}  {:>8}  {}",
            sample.time_label(),
            sample.speed(),
            sample.rpm(),
            sample.fuel(),
            format_decimal(sample.battery()),
            sample.temperature(),
            sample.gear(),
            format_decimal(sample.distance()),
            sample.alert()
        );
    }
    out
}

/// Map values onto eight block heights between their min and max
pub fn sparkline(values: &[f64]) -> String {
    let (min, max) = bounds(values);
    let span = max - min;
    values
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                SPARK_LEVELS[SPARK_LEVELS.len() / 2]
            } else {
                let level = ((v - min) / span * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            }
        })
        .collect()
}

fn bounds(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
