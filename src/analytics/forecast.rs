//! Naive next-year volume prediction
//!
//! Projects the next year's paper count from the mean year-over-year growth
//! rate. Transitions whose prior-year count is zero are dropped from the mean
//! (they would divide by zero); when no valid rate remains, the prediction
//! falls back to the integer average of the observed counts.

use chrono::Utc;
use std::fmt::Write as _;

use crate::error::ForecastError;
use crate::models::YearCounts;

/// One valid year-over-year growth observation
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRate {
    pub from_year: i32,
    pub to_year: i32,
    /// (count_to - count_from) / count_from
    pub rate: f64,
}

/// Computed forecast for the year after the last observed one
#[derive(Debug, Clone)]
pub struct Forecast {
    /// Observed years, ascending
    pub years: Vec<i32>,

    /// Counts aligned with `years`
    pub counts: Vec<u64>,

    /// Valid growth observations (zero-prior transitions dropped)
    pub growth_rates: Vec<GrowthRate>,

    /// Mean of the valid growth rates, when any exist
    pub mean_growth: Option<f64>,

    /// Year being predicted
    pub next_year: i32,

    /// Predicted paper count
    pub predicted: u64,
}

impl Forecast {
    /// Render the forecast as the text report written next to the charts
    #[must_use]
    pub fn to_report(&self, conference: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} paper count prediction: {}",
            conference, self.next_year, self.predicted
        );

        let _ = writeln!(out, "\nPapers per year:");
        for (year, count) in self.years.iter().zip(&self.counts) {
            let _ = writeln!(out, "{year}: {count}");
        }

        if self.growth_rates.is_empty() {
            let _ = writeln!(
                out,
                "\nNo valid growth rates; prediction uses the average yearly count."
            );
        } else {
            let _ = writeln!(out, "\nYear-over-year growth:");
            for rate in &self.growth_rates {
                let _ = writeln!(
                    out,
                    "{} -> {}: {:.2}%",
                    rate.from_year,
                    rate.to_year,
                    rate.rate * 100.0
                );
            }
            if let Some(mean) = self.mean_growth {
                let _ = writeln!(out, "\nAverage growth rate: {:.2}%", mean * 100.0);
            }
        }

        let _ = writeln!(
            out,
            "\nGenerated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );

        out
    }
}

/// Predict the next year's paper count from yearly totals
///
/// # Errors
///
/// Returns `ForecastError::InsufficientData` with fewer than two distinct
/// years, and `ForecastError::InvalidYear` if a year key is not an integer.
pub fn predict(year_counts: &YearCounts) -> Result<Forecast, ForecastError> {
    if year_counts.len() < 2 {
        return Err(ForecastError::InsufficientData(year_counts.len()));
    }

    let mut series: Vec<(i32, u64)> = Vec::with_capacity(year_counts.len());
    for (year, &count) in year_counts {
        let parsed = year
            .parse::<i32>()
            .map_err(|_| ForecastError::InvalidYear(year.clone()))?;
        series.push((parsed, count));
    }
    series.sort_by_key(|&(year, _)| year);

    let years: Vec<i32> = series.iter().map(|&(y, _)| y).collect();
    let counts: Vec<u64> = series.iter().map(|&(_, c)| c).collect();

    let mut growth_rates = Vec::new();
    for window in series.windows(2) {
        let (from_year, prior) = window[0];
        let (to_year, current) = window[1];
        // A zero prior year would divide by zero; drop that transition
        if prior == 0 {
            continue;
        }
        growth_rates.push(GrowthRate {
            from_year,
            to_year,
            rate: (current as f64 - prior as f64) / prior as f64,
        });
    }

    let last_year = years[years.len() - 1];
    let last_count = counts[counts.len() - 1];
    let next_year = last_year + 1;

    let (mean_growth, predicted) = if growth_rates.is_empty() {
        let avg = counts.iter().sum::<u64>() / counts.len() as u64;
        (None, avg)
    } else {
        let mean = growth_rates.iter().map(|g| g.rate).sum::<f64>() / growth_rates.len() as f64;
        let projected = (last_count as f64 * (1.0 + mean)).floor().max(0.0) as u64;
        (Some(mean), projected)
    };

    Ok(Forecast {
        years,
        counts,
        growth_rates,
        mean_growth,
        next_year,
        predicted,
    })
}
