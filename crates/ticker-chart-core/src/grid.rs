// File: crates/ticker-chart-core/src/grid.rs
// Summary: Evenly spaced sampling and "nice" tick layout helpers.

/// `steps` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            // pin the last value so the range end is hit exactly
            out[steps - 1] = end;
            out
        }
    }
}

/// Step from the 1, 2, 2.5, 5 × 10^k family giving at most `max_ticks` ticks over `span`.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    if !(span > 0.0) || max_ticks < 2 {
        return 1.0;
    }
    let raw = span / (max_ticks as f64 - 1.0);
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    for mult in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let step = mult * magnitude;
        if step >= raw {
            return step;
        }
    }
    10.0 * magnitude
}

/// Multiples of a nice step lying inside `[lo, hi]`.
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if !(hi > lo) {
        return vec![lo];
    }
    let step = nice_step(hi - lo, max_ticks);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Fewest decimals that distinguish consecutive ticks at `step`.
pub fn decimals_for_step(step: f64) -> usize {
    if !(step > 0.0) {
        return 0;
    }
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 * scaled.abs().max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(0.0, 14.0, 75);
        assert_eq!(v.len(), 75);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[74], 14.0);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 6), 2.0);
        assert_eq!(nice_step(1.0, 6), 0.2);
        assert_eq!(nice_step(12.0, 6), 2.5);
        assert_eq!(nice_step(40.0, 6), 10.0);
    }

    #[test]
    fn ticks_stay_inside_range() {
        let t = nice_ticks(98.6, 115.4, 6);
        assert!(t.iter().all(|&v| v >= 98.6 && v <= 115.4));
        assert!(t.len() >= 2 && t.len() <= 6);
    }

    #[test]
    fn decimals() {
        assert_eq!(decimals_for_step(5.0), 0);
        assert_eq!(decimals_for_step(0.5), 1);
        assert_eq!(decimals_for_step(0.25), 2);
    }
}
