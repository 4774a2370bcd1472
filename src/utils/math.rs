/// Kahan compensated summation.
///
/// Keeps a running compensation term so the accumulated error stays O(ε)
/// regardless of the number of terms.
pub fn kahan_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut c = 0.0;
    for &v in values {
        let y = v - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Kahan-summed arithmetic mean. `NaN` for an empty slice.
pub fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    kahan_sum(values) / values.len() as f64
}

/// Sum of squared deviations from the mean (Welford).
pub fn sum_squared_deviations(values: &[f64]) -> f64 {
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (x - mean);
    }
    m2
}
