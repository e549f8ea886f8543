use crate::config::StepConfig;
use crate::error::{Error, Result};
use crate::solvers::{solve, Method};
use crate::state::State;

// ---------------------------------------------------------------------------
// Global error under step refinement
// ---------------------------------------------------------------------------

/// One refinement level of a convergence study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceRow {
    pub h: f64,
    pub steps: usize,
    /// Max-abs component error at the final sample.
    pub error: f64,
}

/// Global error of one method over a fixed span at successively halved
/// step sizes.
#[derive(Debug, Clone)]
pub struct ConvergenceStudy {
    pub method: Method,
    pub t0: f64,
    pub t_end: f64,
    pub rows: Vec<ConvergenceRow>,
}

impl ConvergenceStudy {
    /// Integrate `f` from `(t0, y0)` to `t_end` with `base_steps · 2^k`
    /// steps for `k in 0..levels`, comparing the final sample with `exact`.
    #[allow(clippy::too_many_arguments)]
    pub fn run<S, F, X>(
        method: Method,
        mut f: F,
        y0: S,
        exact: X,
        t0: f64,
        t_end: f64,
        base_steps: usize,
        levels: usize,
    ) -> Result<Self>
    where
        S: State,
        F: FnMut(f64, &S) -> S,
        X: Fn(f64) -> S,
    {
        if levels < 2 {
            return Err(Error::TooFewLevels(levels));
        }
        let mut config = StepConfig::over_span(t0, t_end, base_steps)?;

        let mut rows = Vec::with_capacity(levels);
        for _ in 0..levels {
            let traj = solve(method, &mut f, y0.clone(), &config);
            let error = match traj.last() {
                Some((t, y)) => max_abs_diff(y, &exact(t)),
                None => f64::NAN,
            };
            rows.push(ConvergenceRow {
                h: config.h,
                steps: config.steps,
                error,
            });
            config = config.refined();
        }

        Ok(Self {
            method,
            t0,
            t_end,
            rows,
        })
    }

    /// `e_k / e_{k+1}` for consecutive levels (≈ `2^order`).
    pub fn error_ratios(&self) -> Vec<f64> {
        self.rows
            .windows(2)
            .map(|w| w[0].error / w[1].error)
            .collect()
    }

    /// `log2` of the error ratios: the empirical order of accuracy.
    pub fn observed_orders(&self) -> Vec<f64> {
        self.error_ratios().into_iter().map(f64::log2).collect()
    }
}

/// Largest component-wise absolute difference.
pub fn max_abs_diff<S: State>(a: &S, b: &S) -> f64 {
    a.components()
        .iter()
        .zip(b.components().iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0_f64, f64::max)
}
