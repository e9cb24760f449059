//! Additive Holt-Winters exponential smoothing.
//!
//! The model keeps a level, a linear trend and one additive seasonal index per
//! position in the season:
//!
//! ```text
//! fitted_t = l_{t-1} + b_{t-1} + s_{t-m}
//! l_t = alpha * (y_t - s_{t-m}) + (1 - alpha) * (l_{t-1} + b_{t-1})
//! b_t = beta * (l_t - l_{t-1}) + (1 - beta) * b_{t-1}
//! s_t = gamma * (y_t - l_{t-1} - b_{t-1}) + (1 - gamma) * s_{t-m}
//! ```
//!
//! The initial level is the mean of the first season, the initial trend the
//! mean per-step change between the first two seasons, and the initial
//! seasonal indices are the first-season deviations from that level.
//! Smoothing parameters are chosen by minimising the one-step-ahead sum of
//! squared errors with a Nelder-Mead search over logit-transformed
//! parameters, which keeps each of them inside `[0, 1]`.

use crate::errors::{Error, Result, ValidationError};
use log::debug;

const MAX_ITERATIONS: usize = 500;
const TOLERANCE: f64 = 1e-10;
const INITIAL_STEP: f64 = 0.5;

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Smoothing parameters, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWintersParams {
    /// Level smoothing.
    pub alpha: f64,
    /// Trend smoothing.
    pub beta: f64,
    /// Seasonal smoothing.
    pub gamma: f64,
}

impl HoltWintersParams {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::InvalidInput(format!(
                    "Smoothing parameter {} must be within [0, 1], got {}",
                    name, value
                ))
                .into());
            }
        }
        Ok(())
    }

    fn to_unbounded(self) -> [f64; 3] {
        [logit(self.alpha), logit(self.beta), logit(self.gamma)]
    }

    fn from_unbounded(x: &[f64; 3]) -> Self {
        Self::new(sigmoid(x[0]), sigmoid(x[1]), sigmoid(x[2]))
    }
}

impl Default for HoltWintersParams {
    /// Starting point of the parameter search.
    fn default() -> Self {
        Self::new(0.5, 0.1, 0.1)
    }
}

/// A fitted additive Holt-Winters model.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    params: HoltWintersParams,
    period: usize,
    observations: usize,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    sse: f64,
}

/// Smoothing state after running the recursions over a whole series.
struct FilterState {
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    sse: f64,
}

impl HoltWinters {
    /// Number of observations the model needs for a given seasonal period.
    pub fn min_observations(period: usize) -> usize {
        period * 2
    }

    /// Fits the model to `series`, optimising the smoothing parameters.
    pub fn fit(series: &[f64], period: usize) -> Result<Self> {
        validate_series(series, period)?;

        let objective = |x: &[f64; 3]| {
            let sse = run_filter(series, period, HoltWintersParams::from_unbounded(x)).sse;
            if sse.is_finite() {
                sse
            } else {
                f64::INFINITY
            }
        };
        let (best, iterations) = nelder_mead(objective, HoltWintersParams::default().to_unbounded());
        let params = HoltWintersParams::from_unbounded(&best);

        debug!(
            "Fitted Holt-Winters on {} observations in {} iterations: alpha={:.4} beta={:.4} gamma={:.4}",
            series.len(),
            iterations,
            params.alpha,
            params.beta,
            params.gamma
        );

        Ok(Self::from_state(series, period, params))
    }

    /// Runs the model with fixed smoothing parameters.
    pub fn with_params(series: &[f64], period: usize, params: HoltWintersParams) -> Result<Self> {
        validate_series(series, period)?;
        params.validate()?;
        Ok(Self::from_state(series, period, params))
    }

    fn from_state(series: &[f64], period: usize, params: HoltWintersParams) -> Self {
        let state = run_filter(series, period, params);
        Self {
            params,
            period,
            observations: series.len(),
            level: state.level,
            trend: state.trend,
            seasonals: state.seasonals,
            sse: state.sse,
        }
    }

    /// Point forecasts for the next `steps` periods after the last observation.
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        (1..=steps)
            .map(|h| {
                let season = self.seasonals[(self.observations + h - 1) % self.period];
                self.level + h as f64 * self.trend + season
            })
            .collect()
    }

    pub fn params(&self) -> HoltWintersParams {
        self.params
    }

    /// In-sample one-step-ahead sum of squared errors.
    pub fn sse(&self) -> f64 {
        self.sse
    }
}

fn validate_series(series: &[f64], period: usize) -> Result<()> {
    if period == 0 {
        return Err(ValidationError::InvalidInput("Seasonal period must be positive".to_string()).into());
    }
    let required = HoltWinters::min_observations(period);
    if series.len() < required {
        return Err(Error::InsufficientHistory {
            required,
            available: series.len(),
        });
    }
    if let Some(position) = series.iter().position(|v| !v.is_finite()) {
        return Err(Error::InvalidExchangeRate(format!(
            "Non-finite rate {} at position {}",
            series[position], position
        )));
    }
    Ok(())
}

/// Requires `series.len() >= 2 * period`.
fn run_filter(series: &[f64], period: usize, params: HoltWintersParams) -> FilterState {
    let HoltWintersParams { alpha, beta, gamma } = params;

    let first_mean = mean(&series[..period]);
    let second_mean = mean(&series[period..period * 2]);

    let mut level = first_mean;
    let mut trend = (second_mean - first_mean) / period as f64;
    let mut seasonals: Vec<f64> = series[..period].iter().map(|y| y - first_mean).collect();
    let mut sse = 0.0;

    for (t, &y) in series.iter().enumerate() {
        let index = t % period;
        let season = seasonals[index];

        let error = y - (level + trend + season);
        sse += error * error;

        let next_level = alpha * (y - season) + (1.0 - alpha) * (level + trend);
        let next_trend = beta * (next_level - level) + (1.0 - beta) * trend;
        seasonals[index] = gamma * (y - level - trend) + (1.0 - gamma) * season;

        level = next_level;
        trend = next_trend;
    }

    FilterState {
        level,
        trend,
        seasonals,
        sse,
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn logit(p: f64) -> f64 {
    let p = p.clamp(1e-9, 1.0 - 1e-9);
    (p / (1.0 - p)).ln()
}

fn combine(a: &[f64; 3], b: &[f64; 3], weight: f64) -> [f64; 3] {
    // a + weight * (b - a)
    [
        a[0] + weight * (b[0] - a[0]),
        a[1] + weight * (b[1] - a[1]),
        a[2] + weight * (b[2] - a[2]),
    ]
}

/// Minimises `objective` with the Nelder-Mead simplex method.
///
/// Returns the best vertex found and the number of iterations run. The best
/// vertex never gets worse between iterations, so the result is never worse
/// than `start`.
fn nelder_mead<F>(objective: F, start: [f64; 3]) -> ([f64; 3], usize)
where
    F: Fn(&[f64; 3]) -> f64,
{
    let mut simplex: Vec<([f64; 3], f64)> = Vec::with_capacity(4);
    simplex.push((start, objective(&start)));
    for axis in 0..3 {
        let mut vertex = start;
        vertex[axis] += INITIAL_STEP;
        simplex.push((vertex, objective(&vertex)));
    }

    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));

        let best = simplex[0].1;
        let worst = simplex[3].1;
        if (worst - best).abs() <= TOLERANCE * (1.0 + best.abs()) {
            break;
        }
        iterations += 1;

        let mut centroid = [0.0; 3];
        for (vertex, _) in &simplex[..3] {
            for (c, v) in centroid.iter_mut().zip(vertex) {
                *c += v / 3.0;
            }
        }

        let worst_vertex = simplex[3].0;
        let reflected = combine(&centroid, &worst_vertex, -REFLECTION);
        let reflected_value = objective(&reflected);

        if reflected_value < best {
            let expanded = combine(&centroid, &reflected, EXPANSION);
            let expanded_value = objective(&expanded);
            simplex[3] = if expanded_value < reflected_value {
                (expanded, expanded_value)
            } else {
                (reflected, reflected_value)
            };
            continue;
        }

        if reflected_value < simplex[2].1 {
            simplex[3] = (reflected, reflected_value);
            continue;
        }

        let (contracted, accept_below) = if reflected_value < worst {
            (combine(&centroid, &reflected, CONTRACTION), reflected_value)
        } else {
            (combine(&centroid, &worst_vertex, CONTRACTION), worst)
        };
        let contracted_value = objective(&contracted);
        if contracted_value <= accept_below {
            simplex[3] = (contracted, contracted_value);
            continue;
        }

        let anchor = simplex[0].0;
        for entry in simplex.iter_mut().skip(1) {
            let vertex = combine(&anchor, &entry.0, SHRINK);
            *entry = (vertex, objective(&vertex));
        }
    }

    simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
    (simplex[0].0, iterations)
}
