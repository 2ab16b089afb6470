use argminmax::ArgMinMax;
use itertools::Itertools;
use statrs::statistics::Statistics;

/// Ordinary least-squares fit `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation, clipped to [-1, 1]. Zero when either series is constant.
    pub r_value: f64,
}

impl LinearFit {
    #[inline]
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

/// Fits a straight line through `(xs[i], ys[i])`.
/// Returns `None` when the fit is undefined (fewer than 2 points, mismatched lengths,
/// constant x, or non-finite sums).
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    // Biased (population) second moments
    let mut ssxm = 0.0;
    let mut ssym = 0.0;
    let mut ssxym = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        ssxm += dx * dx;
        ssym += dy * dy;
        ssxym += dx * dy;
    }
    ssxm /= n;
    ssym /= n;
    ssxym /= n;

    if ssxm == 0.0 || !ssxm.is_finite() || !ssym.is_finite() || !ssxym.is_finite() {
        return None;
    }

    let r_den = (ssxm * ssym).sqrt();
    let r_value = if r_den == 0.0 {
        0.0
    } else {
        (ssxym / r_den).clamp(-1.0, 1.0)
    };

    let slope = ssxym / ssxm;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
        r_value,
    })
}

/// Index of the smallest value (first one on ties). Empty input gives 0.
pub fn argmin_index(vec: &[f64]) -> usize {
    if vec.is_empty() {
        return 0;
    }
    vec.argmin()
}

/// Index of the largest value (first one on ties). Empty input gives 0.
pub fn argmax_index(vec: &[f64]) -> usize {
    if vec.is_empty() {
        return 0;
    }
    vec.argmax()
}

/// Population standard deviation; 0.0 for an empty slice.
pub fn population_std(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    vec.population_std_dev()
}

/// Population variance; 0.0 for an empty slice.
pub fn population_variance(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    vec.population_variance()
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    Statistics::mean(vec)
}

/// `vec[i+1] - vec[i]` for every consecutive pair
pub fn first_differences(vec: &[f64]) -> Vec<f64> {
    vec.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
