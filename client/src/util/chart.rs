//! Geometry for the dashboard's CSS bar charts.
//!
//! Rendering is plain markup; these helpers turn series values into bar
//! heights and percentage shares so the math is testable off-browser.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Scale `values` to bar heights in `0..=max_height`, largest value at
/// `max_height`. An all-zero series yields flat bars.
#[allow(clippy::cast_precision_loss)]
pub fn bar_heights(values: &[u64], max_height: f64) -> Vec<f64> {
    let peak = values.iter().copied().max().unwrap_or(0);
    if peak == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|&v| v as f64 / peak as f64 * max_height)
        .collect()
}

/// Percentage share of each value, rounded to one decimal place.
#[allow(clippy::cast_precision_loss)]
pub fn percentages(values: &[u64]) -> Vec<f64> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|&v| (v as f64 / total as f64 * 1000.0).round() / 10.0)
        .collect()
}

/// Compact count label: `950`, `1.2K`, `3.4M`. The unit is chosen after
/// rounding to one decimal, so `999_950` reads `1.0M`, not `1000.0K`.
pub fn compact_count(value: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let v = value as f64;
    if value >= 999_950 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", v / 1_000.0)
    } else {
        value.to_string()
    }
}
