// File: crates/ticker-chart-core/src/spline.rs
// Summary: Natural cubic spline fit and evaluation over strictly increasing knots.

/// Piecewise cubic through every knot with zero second derivative at both ends.
#[derive(Clone, Debug)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot; first and last are 0.
    m: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Fit through `(xs[i], ys[i])`. Returns `None` when the inputs differ in
    /// length, hold fewer than two knots, or `xs` is not strictly increasing.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let n = xs.len();
        if n < 2 || ys.len() != n {
            return None;
        }
        if xs.windows(2).any(|w| !(w[1] > w[0])) {
            return None;
        }

        let mut m = vec![0.0; n];
        if n > 2 {
            // Tridiagonal system for interior second derivatives, solved with
            // the Thomas algorithm. Rows 1..n-1; boundary rows are m = 0.
            let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
            let interior = n - 2;
            let mut diag = vec![0.0; interior];
            let mut upper = vec![0.0; interior];
            let mut rhs = vec![0.0; interior];
            for k in 0..interior {
                let i = k + 1;
                diag[k] = 2.0 * (h[i - 1] + h[i]);
                upper[k] = h[i];
                rhs[k] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
            }
            // Forward sweep; the sub-diagonal entry of row k is h[k].
            for k in 1..interior {
                let w = h[k] / diag[k - 1];
                diag[k] -= w * upper[k - 1];
                rhs[k] -= w * rhs[k - 1];
            }
            // Back substitution.
            let mut next = 0.0;
            for k in (0..interior).rev() {
                let v = (rhs[k] - upper[k] * next) / diag[k];
                m[k + 1] = v;
                next = v;
            }
        }

        Some(Self { xs: xs.to_vec(), ys: ys.to_vec(), m })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate at `x`. Knots return their sample value exactly; outside the
    /// domain the end cubic is extended.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        // index of first knot strictly greater than x
        let upper = self.xs.partition_point(|&k| k <= x);
        if upper > 0 && self.xs[upper - 1] == x {
            return self.ys[upper - 1];
        }
        let i = upper.clamp(1, n - 1) - 1;

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;

        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }

    /// Evaluate at every `x` in `xs`.
    pub fn eval_many(&self, xs: &[f64]) -> Vec<(f64, f64)> {
        xs.iter().map(|&x| (x, self.eval(x))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproduces_linear_data() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [1.0, 3.0, 5.0, 7.0, 9.0];
        let s = NaturalCubicSpline::fit(&xs, &ys).expect("fit");
        for x in [0.25, 1.5, 2.75, 3.9] {
            assert!((s.eval(x) - (1.0 + 2.0 * x)).abs() < 1e-9);
        }
    }

    #[test]
    fn natural_ends_have_zero_curvature() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 2.0, -1.0, 4.0];
        let s = NaturalCubicSpline::fit(&xs, &ys).expect("fit");
        assert_eq!(s.m[0], 0.0);
        assert_eq!(s.m[3], 0.0);
        // Numerical second derivative near each end should be close to 0.
        let d2 = |x: f64| {
            let e = 1e-4;
            (s.eval(x + e) - 2.0 * s.eval(x) + s.eval(x - e)) / (e * e)
        };
        assert!(d2(1e-3).abs() < 0.1);
        assert!(d2(3.0 - 1e-3).abs() < 0.1);
    }

    #[test]
    fn matches_hand_solved_three_knots() {
        // One interior knot: m1 = 6 * ((0 - 1) - (1 - 0)) / 4 = -3
        let s = NaturalCubicSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).expect("fit");
        assert!((s.m[1] + 3.0).abs() < 1e-12);
        // S(0.5) = -3 * 0.125 / 6 + (0)(0.5) + (1 + 0.5)(0.5) = 0.6875
        assert!((s.eval(0.5) - 0.6875).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_knots() {
        assert!(NaturalCubicSpline::fit(&[0.0], &[1.0]).is_none());
        assert!(NaturalCubicSpline::fit(&[0.0, 1.0], &[1.0]).is_none());
        assert!(NaturalCubicSpline::fit(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
    }
}
